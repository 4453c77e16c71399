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
use crate::features::compliance::dtos::{
    ComplianceResponseDto, ComplianceWithCooperativeDto, CreateComplianceDto, UpdateComplianceDto,
    UpdateComplianceStatusDto,
};
use crate::features::compliance::models::{ComplianceStatus, ComplianceSummary};
use crate::features::compliance::services::{ComplianceFilter, ComplianceService};
use crate::shared::types::{ApiResponse, Meta};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListComplianceQuery {
    /// Filter by status
    pub status: Option<ComplianceStatus>,
    /// Filter by cooperative
    pub cooperative_id: Option<Uuid>,
    /// Filter by reporting year
    pub year: Option<i32>,
}

/// List compliance records
#[utoipa::path(
    get,
    path = "/api/compliance",
    params(ListComplianceQuery),
    responses(
        (status = 200, description = "List of compliance records", body = ApiResponse<Vec<ComplianceWithCooperativeDto>>),
    ),
    tag = "compliance"
)]
pub async fn list_compliance(
    State(service): State<Arc<ComplianceService>>,
    Query(query): Query<ListComplianceQuery>,
) -> Result<Json<ApiResponse<Vec<ComplianceWithCooperativeDto>>>> {
    let records = service
        .list(ComplianceFilter {
            status: query.status,
            cooperative_id: query.cooperative_id,
            year: query.year,
        })
        .await?;
    let total = records.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(records),
        None,
        Some(Meta { total }),
    )))
}

/// Status counts over all compliance records
#[utoipa::path(
    get,
    path = "/api/compliance/summary",
    responses(
        (status = 200, description = "Compliance status counts", body = ApiResponse<ComplianceSummary>),
    ),
    tag = "compliance"
)]
pub async fn compliance_summary(
    State(service): State<Arc<ComplianceService>>,
) -> Result<Json<ApiResponse<ComplianceSummary>>> {
    let summary = service.summary().await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

/// List a cooperative's compliance records
#[utoipa::path(
    get,
    path = "/api/compliance/cooperative/{cooperative_id}",
    params(
        ("cooperative_id" = Uuid, Path, description = "Cooperative id")
    ),
    responses(
        (status = 200, description = "Cooperative's compliance records", body = ApiResponse<Vec<ComplianceWithCooperativeDto>>),
    ),
    tag = "compliance"
)]
pub async fn list_cooperative_compliance(
    State(service): State<Arc<ComplianceService>>,
    Path(cooperative_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<ComplianceWithCooperativeDto>>>> {
    let records = service.list_by_cooperative(cooperative_id).await?;
    let total = records.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(records),
        None,
        Some(Meta { total }),
    )))
}

/// Get compliance record by id
#[utoipa::path(
    get,
    path = "/api/compliance/{id}",
    params(
        ("id" = Uuid, Path, description = "Compliance record id")
    ),
    responses(
        (status = 200, description = "Compliance record found", body = ApiResponse<ComplianceWithCooperativeDto>),
        (status = 404, description = "Compliance record not found")
    ),
    tag = "compliance"
)]
pub async fn get_compliance(
    State(service): State<Arc<ComplianceService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ComplianceWithCooperativeDto>>> {
    let record = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(record), None, None)))
}

/// Create a compliance requirement
#[utoipa::path(
    post,
    path = "/api/compliance",
    request_body = CreateComplianceDto,
    responses(
        (status = 201, description = "Compliance record created", body = ApiResponse<ComplianceResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "compliance"
)]
pub async fn create_compliance(
    State(service): State<Arc<ComplianceService>>,
    AppJson(dto): AppJson<CreateComplianceDto>,
) -> Result<(axum::http::StatusCode, Json<ApiResponse<ComplianceResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = service.create(dto).await?;
    Ok((
        axum::http::StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(record),
            Some("Compliance record created successfully".to_string()),
            None,
        )),
    ))
}

/// Replace a compliance record's details
#[utoipa::path(
    put,
    path = "/api/compliance/{id}",
    params(
        ("id" = Uuid, Path, description = "Compliance record id")
    ),
    request_body = UpdateComplianceDto,
    responses(
        (status = 200, description = "Compliance record updated", body = ApiResponse<ComplianceResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Compliance record not found")
    ),
    tag = "compliance"
)]
pub async fn update_compliance(
    State(service): State<Arc<ComplianceService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateComplianceDto>,
) -> Result<Json<ApiResponse<ComplianceResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(record),
        Some("Compliance record updated successfully".to_string()),
        None,
    )))
}

/// Record a status decision
#[utoipa::path(
    patch,
    path = "/api/compliance/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Compliance record id")
    ),
    request_body = UpdateComplianceStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<ComplianceResponseDto>),
        (status = 400, description = "Invalid status"),
        (status = 404, description = "Compliance record not found")
    ),
    tag = "compliance"
)]
pub async fn update_compliance_status(
    State(service): State<Arc<ComplianceService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateComplianceStatusDto>,
) -> Result<Json<ApiResponse<ComplianceResponseDto>>> {
    let record = service.update_status(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(record),
        Some("Compliance status updated".to_string()),
        None,
    )))
}

/// Delete a compliance record
#[utoipa::path(
    delete,
    path = "/api/compliance/{id}",
    params(
        ("id" = Uuid, Path, description = "Compliance record id")
    ),
    responses(
        (status = 200, description = "Compliance record deleted"),
        (status = 404, description = "Compliance record not found")
    ),
    tag = "compliance"
)]
pub async fn delete_compliance(
    State(service): State<Arc<ComplianceService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Compliance record deleted successfully".to_string()),
        None,
    )))
}
