use serde_json::json;

use crate::domain::repository::Mailer;
use crate::error::ApiError;

/// HTTP mail-API client (sendgrid-style send endpoint).
///
/// One POST per `send` call; no retries — a failed delivery surfaces as
/// `NotifierFailure` and the caller decides what to do with it.
#[derive(Clone)]
pub struct MailApiClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl MailApiClient {
    pub fn new(http: reqwest::Client, api_url: String, api_key: String, from: String) -> Self {
        Self {
            http,
            api_url,
            api_key,
            from,
        }
    }
}

impl Mailer for MailApiClient {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ApiError> {
        let payload = json!({
            "personalizations": [
                { "to": [{ "email": to }] }
            ],
            "from": { "email": self.from },
            "subject": subject,
            "content": [
                { "type": "text/plain", "value": body }
            ],
        });

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ApiError::NotifierFailure(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::NotifierFailure(anyhow::anyhow!(
                "mail api returned {status}"
            )));
        }

        tracing::info!(%to, "otp mail accepted by mail api");
        Ok(())
    }
}
