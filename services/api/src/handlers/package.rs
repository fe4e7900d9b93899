use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::types::Package;
use crate::error::ApiError;
use crate::handlers::session::Session;
use crate::state::AppState;
use crate::usecase::package::{
    CreatePackageInput, CreatePackageUseCase, DeletePackageUseCase, GetPackageUseCase,
    ListPackagesUseCase, PackagePatch, UpdatePackageUseCase,
};

// ── POST /api/packages ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePackageRequest {
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

pub async fn create_package(
    State(state): State<AppState>,
    _session: Session,
    Json(body): Json<CreatePackageRequest>,
) -> Result<(StatusCode, Json<Package>), ApiError> {
    let usecase = CreatePackageUseCase {
        repo: state.packages.clone(),
    };
    let package = usecase
        .execute(CreatePackageInput {
            image_url: body.image_url,
            name: body.name,
            camera_count: body.camera_count,
            waterproof_box_count: body.waterproof_box_count,
            wire_length: body.wire_length,
            hard_drive: body.hard_drive,
            dvr_model: body.dvr_model,
            dc_pin_count: body.dc_pin_count,
            bnc_connector_count: body.bnc_connector_count,
            price: body.price,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(package)))
}

// ── GET /api/packages ────────────────────────────────────────────────────────

pub async fn list_packages(
    State(state): State<AppState>,
) -> Result<Json<Vec<Package>>, ApiError> {
    let usecase = ListPackagesUseCase {
        repo: state.packages.clone(),
    };
    Ok(Json(usecase.execute().await?))
}

// ── GET /api/packages/{id} ───────────────────────────────────────────────────

pub async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Package>, ApiError> {
    let usecase = GetPackageUseCase {
        repo: state.packages.clone(),
    };
    Ok(Json(usecase.execute(id).await?))
}

// ── PUT /api/packages/{id} ───────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdatePackageRequest {
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

pub async fn update_package(
    State(state): State<AppState>,
    _session: Session,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdatePackageRequest>,
) -> Result<Json<Package>, ApiError> {
    let usecase = UpdatePackageUseCase {
        repo: state.packages.clone(),
    };
    let package = usecase
        .execute(
            id,
            PackagePatch {
                image_url: body.image_url,
                name: body.name,
                camera_count: body.camera_count,
                waterproof_box_count: body.waterproof_box_count,
                wire_length: body.wire_length,
                hard_drive: body.hard_drive,
                dvr_model: body.dvr_model,
                dc_pin_count: body.dc_pin_count,
                bnc_connector_count: body.bnc_connector_count,
                price: body.price,
            },
        )
        .await?;
    Ok(Json(package))
}

// ── DELETE /api/packages/{id} ────────────────────────────────────────────────

pub async fn delete_package(
    State(state): State<AppState>,
    _session: Session,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeletePackageUseCase {
        repo: state.packages.clone(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
