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
use crate::features::members::dtos::{
    CreateMemberDto, MemberResponseDto, MemberWithCooperativeDto, UpdateMemberDto,
    UpdateMemberStatusDto,
};
use crate::features::members::models::{MemberStatus, MemberSummary};
use crate::features::members::services::MemberService;
use crate::shared::types::{ApiResponse, Meta};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListMembersQuery {
    /// Filter by review status
    pub status: Option<MemberStatus>,
    /// Filter by owning cooperative
    pub cooperative_id: Option<Uuid>,
}

/// List members
#[utoipa::path(
    get,
    path = "/api/members",
    params(ListMembersQuery),
    responses(
        (status = 200, description = "List of members", body = ApiResponse<Vec<MemberWithCooperativeDto>>),
    ),
    tag = "members"
)]
pub async fn list_members(
    State(service): State<Arc<MemberService>>,
    Query(query): Query<ListMembersQuery>,
) -> Result<Json<ApiResponse<Vec<MemberWithCooperativeDto>>>> {
    let members = service.list(query.status, query.cooperative_id).await?;
    let total = members.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(members),
        None,
        Some(Meta { total }),
    )))
}

/// Status counts over all members
#[utoipa::path(
    get,
    path = "/api/members/summary",
    responses(
        (status = 200, description = "Member status counts", body = ApiResponse<MemberSummary>),
    ),
    tag = "members"
)]
pub async fn member_summary(
    State(service): State<Arc<MemberService>>,
) -> Result<Json<ApiResponse<MemberSummary>>> {
    let summary = service.summary().await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

/// Get member by id
#[utoipa::path(
    get,
    path = "/api/members/{id}",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "Member found", body = ApiResponse<MemberWithCooperativeDto>),
        (status = 404, description = "Member not found")
    ),
    tag = "members"
)]
pub async fn get_member(
    State(service): State<Arc<MemberService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MemberWithCooperativeDto>>> {
    let member = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(member), None, None)))
}

/// Enroll a member
#[utoipa::path(
    post,
    path = "/api/members",
    request_body = CreateMemberDto,
    responses(
        (status = 201, description = "Member enrolled", body = ApiResponse<MemberResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "members"
)]
pub async fn create_member(
    State(service): State<Arc<MemberService>>,
    AppJson(dto): AppJson<CreateMemberDto>,
) -> Result<(axum::http::StatusCode, Json<ApiResponse<MemberResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let member = service.create(dto).await?;
    Ok((
        axum::http::StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(member),
            Some("Member enrolled successfully".to_string()),
            None,
        )),
    ))
}

/// Replace a member's details
#[utoipa::path(
    put,
    path = "/api/members/{id}",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Member updated", body = ApiResponse<MemberResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Member not found")
    ),
    tag = "members"
)]
pub async fn update_member(
    State(service): State<Arc<MemberService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateMemberDto>,
) -> Result<Json<ApiResponse<MemberResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let member = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(member),
        Some("Member updated successfully".to_string()),
        None,
    )))
}

/// Record a review decision
#[utoipa::path(
    patch,
    path = "/api/members/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    request_body = UpdateMemberStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<MemberResponseDto>),
        (status = 400, description = "Invalid status"),
        (status = 404, description = "Member not found")
    ),
    tag = "members"
)]
pub async fn update_member_status(
    State(service): State<Arc<MemberService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateMemberStatusDto>,
) -> Result<Json<ApiResponse<MemberResponseDto>>> {
    let member = service.update_status(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(member),
        Some("Member status updated".to_string()),
        None,
    )))
}

/// Delete a member
#[utoipa::path(
    delete,
    path = "/api/members/{id}",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "Member deleted"),
        (status = 404, description = "Member not found")
    ),
    tag = "members"
)]
pub async fn delete_member(
    State(service): State<Arc<MemberService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Member deleted successfully".to_string()),
        None,
    )))
}
