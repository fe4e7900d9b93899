use reqwest::multipart;

use crate::domain::repository::AssetStore;
use crate::domain::types::AssetRef;
use crate::error::ApiError;

/// Client for the third-party image host the storefront images live on.
///
/// Endpoints:
/// - `POST   {base}/upload`            multipart field "file" → `AssetRef`
/// - `DELETE {base}/assets/{public_id}`
/// - `GET    {base}/assets`            → `[AssetRef]`
#[derive(Clone)]
pub struct ImageHostClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ImageHostClient {
    pub fn new(http: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }
}

impl AssetStore for ImageHostClient {
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<AssetRef, ApiError> {
        let part = multipart::Part::bytes(bytes)
            .file_name(filename.to_owned())
            .mime_str(content_type)
            .map_err(|e| ApiError::AssetHost(e.into()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/upload", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::AssetHost(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::AssetHost(anyhow::anyhow!(
                "image host returned {status}"
            )));
        }

        response
            .json::<AssetRef>()
            .await
            .map_err(|e| ApiError::AssetHost(e.into()))
    }

    async fn delete(&self, public_id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(format!("{}/assets/{public_id}", self.base_url))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| ApiError::AssetHost(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::AssetHost(anyhow::anyhow!(
                "image host returned {status}"
            )));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<AssetRef>, ApiError> {
        let response = self
            .http
            .get(format!("{}/assets", self.base_url))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| ApiError::AssetHost(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::AssetHost(anyhow::anyhow!(
                "image host returned {status}"
            )));
        }

        response
            .json::<Vec<AssetRef>>()
            .await
            .map_err(|e| ApiError::AssetHost(e.into()))
    }
}
