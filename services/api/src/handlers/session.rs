use axum::RequestPartsExt;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::token::validate_session_token;

/// Verified session extracted from the `Authorization: Bearer` header.
/// Rejection (missing header, bad signature, expired) maps to 401.
pub struct Session {
    pub email: String,
}

impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| ApiError::TokenInvalid)?;

        let claims = validate_session_token(bearer.token(), &state.jwt_secret)?;
        Ok(Session { email: claims.sub })
    }
}
