use chrono::{Duration, Utc};
use rand::RngExt;

use crate::domain::repository::{Mailer, OtpStore};
use crate::domain::types::{OTP_TTL_SECS, OtpChallenge};
use crate::error::ApiError;
use crate::usecase::token::issue_session_token;

/// Generate a 6-digit numeric code, leading zeros preserved.
fn generate_code() -> String {
    let mut rng = rand::rng();
    format!("{:06}", rng.random_range(0..1_000_000u32))
}

// ── SendOtp ──────────────────────────────────────────────────────────────────

pub struct SendOtpInput {
    pub email: String,
}

pub struct SendOtpUseCase<S, M>
where
    S: OtpStore,
    M: Mailer,
{
    pub otp_store: S,
    pub mailer: M,
    pub admin_email: String,
}

impl<S, M> SendOtpUseCase<S, M>
where
    S: OtpStore,
    M: Mailer,
{
    pub async fn execute(&self, input: SendOtpInput) -> Result<(), ApiError> {
        // Capability check, separate from challenge validity: only the one
        // configured admin may ever hold a challenge.
        if input.email != self.admin_email {
            return Err(ApiError::Unauthorized);
        }

        let code = generate_code();
        let now = Utc::now();
        let challenge = OtpChallenge {
            email: input.email.clone(),
            code: code.clone(),
            issued_at: now,
            expires_at: now + Duration::seconds(OTP_TTL_SECS),
        };

        // Replaces any outstanding challenge for this email. The write is not
        // rolled back on delivery failure, matching the reference flow.
        self.otp_store.put(challenge);

        self.mailer
            .send(
                &input.email,
                "Your login code",
                &format!("Your one-time login code is {code}. It expires in {OTP_TTL_SECS} seconds."),
            )
            .await
    }
}

// ── VerifyOtp ────────────────────────────────────────────────────────────────

pub struct VerifyOtpInput {
    pub email: String,
    pub otp: String,
}

#[derive(Debug)]
pub struct VerifyOtpOutput {
    pub token: String,
    pub token_exp: u64,
}

pub struct VerifyOtpUseCase<S: OtpStore> {
    pub otp_store: S,
    pub jwt_secret: String,
}

impl<S: OtpStore> VerifyOtpUseCase<S> {
    pub async fn execute(&self, input: VerifyOtpInput) -> Result<VerifyOtpOutput, ApiError> {
        // Absent, mismatched and expired all surface as the same error so the
        // response cannot be used as an oracle.
        let challenge = self
            .otp_store
            .get(&input.email)
            .ok_or(ApiError::InvalidOtp)?;

        if challenge.code != input.otp || challenge.is_expired() {
            // Failed attempts leave the challenge in place; the legitimate
            // holder may retry until expiry.
            return Err(ApiError::InvalidOtp);
        }

        // Single use: consumed only on the success path.
        self.otp_store.remove(&input.email);

        let (token, token_exp) = issue_session_token(&input.email, &self.jwt_secret)?;
        Ok(VerifyOtpOutput { token, token_exp })
    }
}
