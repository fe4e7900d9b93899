use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::PackageRepository;
use crate::domain::types::Package;
use crate::error::ApiError;

// ── CreatePackage ────────────────────────────────────────────────────────────

pub struct CreatePackageInput {
    pub image_url: String,
    pub name: String,
    pub camera_count: String,
    pub waterproof_box_count: String,
    pub wire_length: String,
    pub hard_drive: String,
    pub dvr_model: String,
    pub dc_pin_count: String,
    pub bnc_connector_count: String,
    pub price: String,
}

pub struct CreatePackageUseCase<R: PackageRepository> {
    pub repo: R,
}

impl<R: PackageRepository> CreatePackageUseCase<R> {
    pub async fn execute(&self, input: CreatePackageInput) -> Result<Package, ApiError> {
        let now = Utc::now();
        let package = Package {
            id: Uuid::new_v4(),
            image_url: input.image_url,
            name: input.name,
            camera_count: input.camera_count,
            waterproof_box_count: input.waterproof_box_count,
            wire_length: input.wire_length,
            hard_drive: input.hard_drive,
            dvr_model: input.dvr_model,
            dc_pin_count: input.dc_pin_count,
            bnc_connector_count: input.bnc_connector_count,
            price: input.price,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&package).await?;
        Ok(package)
    }
}

// ── ListPackages / GetPackage ────────────────────────────────────────────────

pub struct ListPackagesUseCase<R: PackageRepository> {
    pub repo: R,
}

impl<R: PackageRepository> ListPackagesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Package>, ApiError> {
        self.repo.list().await
    }
}

pub struct GetPackageUseCase<R: PackageRepository> {
    pub repo: R,
}

impl<R: PackageRepository> GetPackageUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Package, ApiError> {
        self.repo.find(id).await?.ok_or(ApiError::PackageNotFound)
    }
}

// ── UpdatePackage ────────────────────────────────────────────────────────────

/// Partial update; `None` fields keep their stored value.
#[derive(Default)]
pub struct PackagePatch {
    pub image_url: Option<String>,
    pub name: Option<String>,
    pub camera_count: Option<String>,
    pub waterproof_box_count: Option<String>,
    pub wire_length: Option<String>,
    pub hard_drive: Option<String>,
    pub dvr_model: Option<String>,
    pub dc_pin_count: Option<String>,
    pub bnc_connector_count: Option<String>,
    pub price: Option<String>,
}

pub struct UpdatePackageUseCase<R: PackageRepository> {
    pub repo: R,
}

impl<R: PackageRepository> UpdatePackageUseCase<R> {
    pub async fn execute(&self, id: Uuid, patch: PackagePatch) -> Result<Package, ApiError> {
        let mut package = self.repo.find(id).await?.ok_or(ApiError::PackageNotFound)?;

        if let Some(v) = patch.image_url {
            package.image_url = v;
        }
        if let Some(v) = patch.name {
            package.name = v;
        }
        if let Some(v) = patch.camera_count {
            package.camera_count = v;
        }
        if let Some(v) = patch.waterproof_box_count {
            package.waterproof_box_count = v;
        }
        if let Some(v) = patch.wire_length {
            package.wire_length = v;
        }
        if let Some(v) = patch.hard_drive {
            package.hard_drive = v;
        }
        if let Some(v) = patch.dvr_model {
            package.dvr_model = v;
        }
        if let Some(v) = patch.dc_pin_count {
            package.dc_pin_count = v;
        }
        if let Some(v) = patch.bnc_connector_count {
            package.bnc_connector_count = v;
        }
        if let Some(v) = patch.price {
            package.price = v;
        }
        package.updated_at = Utc::now();

        self.repo.update(&package).await?;
        Ok(package)
    }
}

// ── DeletePackage ────────────────────────────────────────────────────────────

pub struct DeletePackageUseCase<R: PackageRepository> {
    pub repo: R,
}

impl<R: PackageRepository> DeletePackageUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiError> {
        if !self.repo.delete(id).await? {
            return Err(ApiError::PackageNotFound);
        }
        Ok(())
    }
}
