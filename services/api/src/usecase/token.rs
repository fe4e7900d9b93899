use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::types::SESSION_TTL_SECS;
use crate::error::ApiError;

/// JWT claims for a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Email of the verified identity.
    pub sub: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Mint a signed session token for a verified email. Stateless bearer
/// semantics: the server keeps no record of issued tokens.
pub fn issue_session_token(email: &str, secret: &str) -> Result<(String, u64), ApiError> {
    let exp = now_secs() + SESSION_TTL_SECS;
    let claims = SessionClaims {
        sub: email.to_owned(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(e.into()))?;
    Ok((token, exp))
}

/// Validate a session token (signature + expiry) and return its claims.
pub fn validate_session_token(token: &str, secret: &str) -> Result<SessionClaims, ApiError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| ApiError::TokenInvalid)?;

    Ok(data.claims)
}
