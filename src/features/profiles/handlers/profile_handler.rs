use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::profiles::dtos::ProfileResponseDto;
use crate::features::profiles::services::ProfileService;
use crate::shared::types::{ApiResponse, Meta};

/// List all officer profiles
#[utoipa::path(
    get,
    path = "/api/profiles",
    responses(
        (status = 200, description = "List of profiles", body = ApiResponse<Vec<ProfileResponseDto>>),
    ),
    tag = "profiles"
)]
pub async fn list_profiles(
    State(service): State<Arc<ProfileService>>,
) -> Result<Json<ApiResponse<Vec<ProfileResponseDto>>>> {
    let profiles = service.list().await?;
    let total = profiles.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(profiles),
        None,
        Some(Meta { total }),
    )))
}

/// Get profile by id
#[utoipa::path(
    get,
    path = "/api/profiles/{id}",
    params(
        ("id" = Uuid, Path, description = "Profile id")
    ),
    responses(
        (status = 200, description = "Profile found", body = ApiResponse<ProfileResponseDto>),
        (status = 404, description = "Profile not found")
    ),
    tag = "profiles"
)]
pub async fn get_profile(
    State(service): State<Arc<ProfileService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    let profile = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(profile), None, None)))
}
