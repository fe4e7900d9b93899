use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service error variants.
///
/// Challenge lookup failures (absent, code mismatch, expired) all collapse
/// into `InvalidOtp` with one generic message: the caller must not be able to
/// tell which of the three occurred.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("invalid or expired otp")]
    InvalidOtp,
    #[error("failed to send otp")]
    NotifierFailure(#[source] anyhow::Error),
    #[error("invalid token")]
    TokenInvalid,
    #[error("package not found")]
    PackageNotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error("image host error")]
    AssetHost(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthorized | Self::TokenInvalid => StatusCode::UNAUTHORIZED,
            Self::InvalidOtp | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PackageNotFound => StatusCode::NOT_FOUND,
            Self::AssetHost(_) => StatusCode::BAD_GATEWAY,
            Self::NotifierFailure(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 5xx only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        let body = match &self {
            Self::NotifierFailure(e) | Self::AssetHost(e) => {
                tracing::error!(error = %e, "upstream collaborator failure");
                serde_json::json!({
                    "message": self.to_string(),
                    "error": e.to_string(),
                })
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                serde_json::json!({ "message": self.to_string() })
            }
            _ => serde_json::json!({ "message": self.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}
