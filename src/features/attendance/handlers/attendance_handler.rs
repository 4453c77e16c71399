use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::attendance::dtos::{
    AttendanceListItemDto, AttendanceResponseDto, OfficerAttendanceDto, RecordAttendanceDto,
};
use crate::features::attendance::services::AttendanceService;
use crate::shared::types::{ApiResponse, Meta};

/// List all attendance records
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "List of attendance records", body = ApiResponse<Vec<AttendanceListItemDto>>),
    ),
    tag = "attendance"
)]
pub async fn list_attendance(
    State(service): State<Arc<AttendanceService>>,
) -> Result<Json<ApiResponse<Vec<AttendanceListItemDto>>>> {
    let records = service.list().await?;
    let total = records.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(records),
        None,
        Some(Meta { total }),
    )))
}

/// List an officer's attendance history
#[utoipa::path(
    get,
    path = "/api/attendance/officer/{officer_id}",
    params(
        ("officer_id" = Uuid, Path, description = "Officer id")
    ),
    responses(
        (status = 200, description = "Officer's attendance history", body = ApiResponse<Vec<OfficerAttendanceDto>>),
    ),
    tag = "attendance"
)]
pub async fn list_officer_attendance(
    State(service): State<Arc<AttendanceService>>,
    Path(officer_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<OfficerAttendanceDto>>>> {
    let records = service.list_by_officer(officer_id).await?;
    let total = records.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(records),
        None,
        Some(Meta { total }),
    )))
}

/// Record attendance (upsert per officer and training)
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = RecordAttendanceDto,
    responses(
        (status = 201, description = "Attendance recorded", body = ApiResponse<AttendanceResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "attendance"
)]
pub async fn record_attendance(
    State(service): State<Arc<AttendanceService>>,
    AppJson(dto): AppJson<RecordAttendanceDto>,
) -> Result<(axum::http::StatusCode, Json<ApiResponse<AttendanceResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = service.record(dto).await?;
    Ok((
        axum::http::StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(record),
            Some("Attendance recorded successfully".to_string()),
            None,
        )),
    ))
}
