use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::handlers::{
    asset::{delete_asset, list_assets, upload_asset},
    auth::{logout, send_otp, verify_otp},
    health::{healthz, readyz},
    package::{create_package, delete_package, get_package, list_packages, update_package},
};
use crate::state::AppState;

#[derive(Clone, Default)]
struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(id.parse().unwrap()))
    }
}

pub fn build_router(state: AppState, public_dir: &str) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/api/send-otp", post(send_otp))
        .route("/api/verify-otp", post(verify_otp))
        .route("/api/logout", post(logout))
        // Packages
        .route("/api/packages", post(create_package))
        .route("/api/packages", get(list_packages))
        .route("/api/packages/{id}", get(get_package))
        .route("/api/packages/{id}", put(update_package))
        .route("/api/packages/{id}", delete(delete_package))
        // Assets
        .route("/api/assets", post(upload_asset))
        .route("/api/assets", get(list_assets))
        .route("/api/assets/{public_id}", delete(delete_asset))
        // Static files
        .nest_service("/public", ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(
            axum::http::HeaderName::from_static("x-request-id"),
            MakeUuidRequestId,
        ))
        .with_state(state)
}
