use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};

use crate::domain::types::AssetRef;
use crate::error::ApiError;
use crate::handlers::session::Session;
use crate::state::AppState;
use crate::usecase::asset::{
    DeleteAssetUseCase, ListAssetsUseCase, UploadAssetInput, UploadAssetUseCase,
};

// ── POST /api/assets ─────────────────────────────────────────────────────────

/// Accepts a single `multipart/form-data` file field named "image" and
/// forwards it to the image host.
pub async fn upload_asset(
    State(state): State<AppState>,
    _session: Session,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<AssetRef>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_owned();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_owned();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?
            .to_vec();

        let usecase = UploadAssetUseCase {
            assets: state.image_host.clone(),
        };
        let asset = usecase
            .execute(UploadAssetInput {
                filename,
                content_type,
                bytes,
            })
            .await?;
        return Ok((StatusCode::CREATED, Json(asset)));
    }

    Err(ApiError::BadRequest("missing image field".to_owned()))
}

// ── GET /api/assets ──────────────────────────────────────────────────────────

pub async fn list_assets(
    State(state): State<AppState>,
    _session: Session,
) -> Result<Json<Vec<AssetRef>>, ApiError> {
    let usecase = ListAssetsUseCase {
        assets: state.image_host.clone(),
    };
    Ok(Json(usecase.execute().await?))
}

// ── DELETE /api/assets/{public_id} ───────────────────────────────────────────

pub async fn delete_asset(
    State(state): State<AppState>,
    _session: Session,
    Path(public_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteAssetUseCase {
        assets: state.image_host.clone(),
    };
    usecase.execute(&public_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
