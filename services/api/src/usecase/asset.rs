use crate::domain::repository::AssetStore;
use crate::domain::types::AssetRef;
use crate::error::ApiError;

// ── UploadAsset ──────────────────────────────────────────────────────────────

pub struct UploadAssetInput {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub struct UploadAssetUseCase<A: AssetStore> {
    pub assets: A,
}

impl<A: AssetStore> UploadAssetUseCase<A> {
    pub async fn execute(&self, input: UploadAssetInput) -> Result<AssetRef, ApiError> {
        if input.bytes.is_empty() {
            return Err(ApiError::BadRequest("empty upload".to_owned()));
        }
        if !input.content_type.starts_with("image/") {
            return Err(ApiError::BadRequest(format!(
                "unsupported content type: {}",
                input.content_type
            )));
        }
        self.assets
            .upload(&input.filename, &input.content_type, input.bytes)
            .await
    }
}

// ── DeleteAsset / ListAssets ─────────────────────────────────────────────────

pub struct DeleteAssetUseCase<A: AssetStore> {
    pub assets: A,
}

impl<A: AssetStore> DeleteAssetUseCase<A> {
    pub async fn execute(&self, public_id: &str) -> Result<(), ApiError> {
        self.assets.delete(public_id).await
    }
}

pub struct ListAssetsUseCase<A: AssetStore> {
    pub assets: A,
}

impl<A: AssetStore> ListAssetsUseCase<A> {
    pub async fn execute(&self) -> Result<Vec<AssetRef>, ApiError> {
        self.assets.list().await
    }
}
