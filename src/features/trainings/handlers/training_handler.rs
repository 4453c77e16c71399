use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::trainings::dtos::{
    CreateTrainingDto, TrainingResponseDto, TrainingWithMetricsDto, UpdateTrainingDto,
};
use crate::features::trainings::services::TrainingService;
use crate::shared::types::{ApiResponse, Meta};

/// List all trainings
#[utoipa::path(
    get,
    path = "/api/trainings",
    responses(
        (status = 200, description = "List of trainings", body = ApiResponse<Vec<TrainingResponseDto>>),
    ),
    tag = "trainings"
)]
pub async fn list_trainings(
    State(service): State<Arc<TrainingService>>,
) -> Result<Json<ApiResponse<Vec<TrainingResponseDto>>>> {
    let trainings = service.list().await?;
    let total = trainings.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(trainings),
        None,
        Some(Meta { total }),
    )))
}

/// List trainings with registration counts
#[utoipa::path(
    get,
    path = "/api/trainings/with-metrics",
    responses(
        (status = 200, description = "Trainings with registration counts", body = ApiResponse<Vec<TrainingWithMetricsDto>>),
    ),
    tag = "trainings"
)]
pub async fn list_trainings_with_metrics(
    State(service): State<Arc<TrainingService>>,
) -> Result<Json<ApiResponse<Vec<TrainingWithMetricsDto>>>> {
    let trainings = service.list_with_metrics().await?;
    let total = trainings.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(trainings),
        None,
        Some(Meta { total }),
    )))
}

/// Get training by id
#[utoipa::path(
    get,
    path = "/api/trainings/{id}",
    params(
        ("id" = Uuid, Path, description = "Training id")
    ),
    responses(
        (status = 200, description = "Training found", body = ApiResponse<TrainingResponseDto>),
        (status = 404, description = "Training not found")
    ),
    tag = "trainings"
)]
pub async fn get_training(
    State(service): State<Arc<TrainingService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TrainingResponseDto>>> {
    let training = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(training), None, None)))
}

/// Create a training
#[utoipa::path(
    post,
    path = "/api/trainings",
    request_body = CreateTrainingDto,
    responses(
        (status = 201, description = "Training created", body = ApiResponse<TrainingResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "trainings"
)]
pub async fn create_training(
    State(service): State<Arc<TrainingService>>,
    AppJson(dto): AppJson<CreateTrainingDto>,
) -> Result<(axum::http::StatusCode, Json<ApiResponse<TrainingResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let training = service.create(dto).await?;
    Ok((
        axum::http::StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(training),
            Some("Training created successfully".to_string()),
            None,
        )),
    ))
}

/// Update a training
#[utoipa::path(
    put,
    path = "/api/trainings/{id}",
    params(
        ("id" = Uuid, Path, description = "Training id")
    ),
    request_body = UpdateTrainingDto,
    responses(
        (status = 200, description = "Training updated", body = ApiResponse<TrainingResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Training not found")
    ),
    tag = "trainings"
)]
pub async fn update_training(
    State(service): State<Arc<TrainingService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateTrainingDto>,
) -> Result<Json<ApiResponse<TrainingResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let training = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(training),
        Some("Training updated successfully".to_string()),
        None,
    )))
}

/// Delete a training
#[utoipa::path(
    delete,
    path = "/api/trainings/{id}",
    params(
        ("id" = Uuid, Path, description = "Training id")
    ),
    responses(
        (status = 200, description = "Training deleted"),
        (status = 404, description = "Training not found")
    ),
    tag = "trainings"
)]
pub async fn delete_training(
    State(service): State<Arc<TrainingService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Training deleted successfully".to_string()),
        None,
    )))
}
