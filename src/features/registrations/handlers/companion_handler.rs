use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::registrations::dtos::{
    CompanionListItemDto, CompanionResponseDto, CreateCompanionDto,
};
use crate::features::registrations::services::CompanionService;
use crate::shared::types::{ApiResponse, Meta};

/// List all companion registrations
#[utoipa::path(
    get,
    path = "/api/companion-registrations",
    responses(
        (status = 200, description = "List of companion registrations", body = ApiResponse<Vec<CompanionListItemDto>>),
    ),
    tag = "companion-registrations"
)]
pub async fn list_companions(
    State(service): State<Arc<CompanionService>>,
) -> Result<Json<ApiResponse<Vec<CompanionListItemDto>>>> {
    let companions = service.list().await?;
    let total = companions.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(companions),
        None,
        Some(Meta { total }),
    )))
}

/// List companions registered for one training
#[utoipa::path(
    get,
    path = "/api/companion-registrations/training/{training_id}",
    params(
        ("training_id" = Uuid, Path, description = "Training id")
    ),
    responses(
        (status = 200, description = "Companions for the training", body = ApiResponse<Vec<CompanionListItemDto>>),
    ),
    tag = "companion-registrations"
)]
pub async fn list_companions_by_training(
    State(service): State<Arc<CompanionService>>,
    Path(training_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<CompanionListItemDto>>>> {
    let companions = service.list_by_training(training_id).await?;
    let total = companions.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(companions),
        None,
        Some(Meta { total }),
    )))
}

/// Register a single companion
#[utoipa::path(
    post,
    path = "/api/companion-registrations",
    request_body = CreateCompanionDto,
    responses(
        (status = 201, description = "Companion registered", body = ApiResponse<CompanionResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "companion-registrations"
)]
pub async fn create_companion(
    State(service): State<Arc<CompanionService>>,
    AppJson(dto): AppJson<CreateCompanionDto>,
) -> Result<(StatusCode, Json<ApiResponse<CompanionResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let companion = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(companion),
            Some("Companion registered successfully".to_string()),
            None,
        )),
    ))
}
