use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::otp::{SendOtpInput, SendOtpUseCase, VerifyOtpInput, VerifyOtpUseCase};

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ── POST /api/send-otp ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SendOtpRequest {
    pub email: String,
}

pub async fn send_otp(
    State(state): State<AppState>,
    Json(body): Json<SendOtpRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let usecase = SendOtpUseCase {
        otp_store: state.otp_store.clone(),
        mailer: state.mailer.clone(),
        admin_email: state.admin_email.clone(),
    };
    usecase.execute(SendOtpInput { email: body.email }).await?;

    Ok(Json(MessageResponse {
        message: "otp sent".to_owned(),
    }))
}

// ── POST /api/verify-otp ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Serialize)]
pub struct VerifyOtpResponse {
    pub token: String,
    pub message: String,
}

pub async fn verify_otp(
    State(state): State<AppState>,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>, ApiError> {
    let usecase = VerifyOtpUseCase {
        otp_store: state.otp_store.clone(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(VerifyOtpInput {
            email: body.email,
            otp: body.otp,
        })
        .await?;

    Ok(Json(VerifyOtpResponse {
        token: out.token,
        message: "login successful".to_owned(),
    }))
}

// ── POST /api/logout ─────────────────────────────────────────────────────────

/// Sessions are stateless bearer tokens, so there is nothing to revoke
/// server-side; this only tells the client to discard its token.
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "logged out".to_owned(),
    })
}
