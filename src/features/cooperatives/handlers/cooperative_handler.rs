use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::cooperatives::dtos::{
    CooperativeResponseDto, CreateCooperativeDto, UpdateCooperativeDto,
    UpdateCooperativeStatusDto,
};
use crate::features::cooperatives::models::{CooperativeStatus, CooperativeSummary};
use crate::features::cooperatives::services::CooperativeService;
use crate::shared::types::{ApiResponse, Meta};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListCooperativesQuery {
    /// Filter by review status
    pub status: Option<CooperativeStatus>,
}

/// List cooperatives
#[utoipa::path(
    get,
    path = "/api/cooperatives",
    params(ListCooperativesQuery),
    responses(
        (status = 200, description = "List of cooperatives", body = ApiResponse<Vec<CooperativeResponseDto>>),
    ),
    tag = "cooperatives"
)]
pub async fn list_cooperatives(
    State(service): State<Arc<CooperativeService>>,
    Query(query): Query<ListCooperativesQuery>,
) -> Result<Json<ApiResponse<Vec<CooperativeResponseDto>>>> {
    let cooperatives = service.list(query.status).await?;
    let total = cooperatives.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(cooperatives),
        None,
        Some(Meta { total }),
    )))
}

/// Status counts over all cooperatives
#[utoipa::path(
    get,
    path = "/api/cooperatives/summary",
    responses(
        (status = 200, description = "Cooperative status counts", body = ApiResponse<CooperativeSummary>),
    ),
    tag = "cooperatives"
)]
pub async fn cooperative_summary(
    State(service): State<Arc<CooperativeService>>,
) -> Result<Json<ApiResponse<CooperativeSummary>>> {
    let summary = service.summary().await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

/// Get cooperative by id
#[utoipa::path(
    get,
    path = "/api/cooperatives/{id}",
    params(
        ("id" = Uuid, Path, description = "Cooperative id")
    ),
    responses(
        (status = 200, description = "Cooperative found", body = ApiResponse<CooperativeResponseDto>),
        (status = 404, description = "Cooperative not found")
    ),
    tag = "cooperatives"
)]
pub async fn get_cooperative(
    State(service): State<Arc<CooperativeService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CooperativeResponseDto>>> {
    let cooperative = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(cooperative), None, None)))
}

/// Register a cooperative
#[utoipa::path(
    post,
    path = "/api/cooperatives",
    request_body = CreateCooperativeDto,
    responses(
        (status = 201, description = "Cooperative registered", body = ApiResponse<CooperativeResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "cooperatives"
)]
pub async fn create_cooperative(
    State(service): State<Arc<CooperativeService>>,
    AppJson(dto): AppJson<CreateCooperativeDto>,
) -> Result<(axum::http::StatusCode, Json<ApiResponse<CooperativeResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let cooperative = service.create(dto).await?;
    Ok((
        axum::http::StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(cooperative),
            Some("Cooperative registered successfully".to_string()),
            None,
        )),
    ))
}

/// Replace a cooperative's details
#[utoipa::path(
    put,
    path = "/api/cooperatives/{id}",
    params(
        ("id" = Uuid, Path, description = "Cooperative id")
    ),
    request_body = UpdateCooperativeDto,
    responses(
        (status = 200, description = "Cooperative updated", body = ApiResponse<CooperativeResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Cooperative not found")
    ),
    tag = "cooperatives"
)]
pub async fn update_cooperative(
    State(service): State<Arc<CooperativeService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCooperativeDto>,
) -> Result<Json<ApiResponse<CooperativeResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let cooperative = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(cooperative),
        Some("Cooperative updated successfully".to_string()),
        None,
    )))
}

/// Record a review decision
#[utoipa::path(
    patch,
    path = "/api/cooperatives/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Cooperative id")
    ),
    request_body = UpdateCooperativeStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<CooperativeResponseDto>),
        (status = 400, description = "Invalid status"),
        (status = 404, description = "Cooperative not found")
    ),
    tag = "cooperatives"
)]
pub async fn update_cooperative_status(
    State(service): State<Arc<CooperativeService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCooperativeStatusDto>,
) -> Result<Json<ApiResponse<CooperativeResponseDto>>> {
    let cooperative = service.update_status(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(cooperative),
        Some("Cooperative status updated".to_string()),
        None,
    )))
}

/// Delete a cooperative
#[utoipa::path(
    delete,
    path = "/api/cooperatives/{id}",
    params(
        ("id" = Uuid, Path, description = "Cooperative id")
    ),
    responses(
        (status = 200, description = "Cooperative deleted"),
        (status = 404, description = "Cooperative not found")
    ),
    tag = "cooperatives"
)]
pub async fn delete_cooperative(
    State(service): State<Arc<CooperativeService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Cooperative deleted successfully".to_string()),
        None,
    )))
}
