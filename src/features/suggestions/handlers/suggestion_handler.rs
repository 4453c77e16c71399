use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::suggestions::dtos::{
    CreateSuggestionDto, ImplementSuggestionDto, ImplementationResultDto, SuggestionListItemDto,
    SuggestionResponseDto, UpdateSuggestionStatusDto,
};
use crate::features::suggestions::services::SuggestionService;
use crate::shared::types::{ApiResponse, Meta};

/// List all training suggestions with officer names
#[utoipa::path(
    get,
    path = "/api/training-suggestions",
    responses(
        (status = 200, description = "List of training suggestions", body = ApiResponse<Vec<SuggestionListItemDto>>),
    ),
    tag = "training-suggestions"
)]
pub async fn list_suggestions(
    State(service): State<Arc<SuggestionService>>,
) -> Result<Json<ApiResponse<Vec<SuggestionListItemDto>>>> {
    let suggestions = service.list().await?;
    let total = suggestions.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(suggestions),
        None,
        Some(Meta { total }),
    )))
}

/// Submit a training suggestion
#[utoipa::path(
    post,
    path = "/api/training-suggestions",
    request_body = CreateSuggestionDto,
    responses(
        (status = 201, description = "Suggestion submitted", body = ApiResponse<SuggestionResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "training-suggestions"
)]
pub async fn create_suggestion(
    State(service): State<Arc<SuggestionService>>,
    AppJson(dto): AppJson<CreateSuggestionDto>,
) -> Result<(axum::http::StatusCode, Json<ApiResponse<SuggestionResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let suggestion = service.create(dto).await?;
    Ok((
        axum::http::StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(suggestion),
            Some("Training suggestion submitted successfully".to_string()),
            None,
        )),
    ))
}

/// Update a suggestion's status
#[utoipa::path(
    patch,
    path = "/api/training-suggestions/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Suggestion id")
    ),
    request_body = UpdateSuggestionStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<SuggestionResponseDto>),
        (status = 400, description = "Invalid status"),
        (status = 404, description = "Suggestion not found")
    ),
    tag = "training-suggestions"
)]
pub async fn update_suggestion_status(
    State(service): State<Arc<SuggestionService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateSuggestionStatusDto>,
) -> Result<Json<ApiResponse<SuggestionResponseDto>>> {
    let suggestion = service.update_status(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(suggestion),
        Some("Suggestion status updated".to_string()),
        None,
    )))
}

/// Implement a suggestion as a scheduled training
#[utoipa::path(
    post,
    path = "/api/training-suggestions/{id}/implement",
    params(
        ("id" = Uuid, Path, description = "Suggestion id")
    ),
    request_body = ImplementSuggestionDto,
    responses(
        (status = 201, description = "Training created from suggestion", body = ApiResponse<ImplementationResultDto>),
        (status = 400, description = "Invalid override values"),
        (status = 404, description = "Suggestion not found")
    ),
    tag = "training-suggestions"
)]
pub async fn implement_suggestion(
    State(service): State<Arc<SuggestionService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<ImplementSuggestionDto>,
) -> Result<(
    axum::http::StatusCode,
    Json<ApiResponse<ImplementationResultDto>>,
)> {
    let result = service.implement(id, dto).await?;
    Ok((
        axum::http::StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(result),
            Some("Suggestion implemented as training".to_string()),
            None,
        )),
    ))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use super::*;
    use crate::features::suggestions::routes;
    use crate::shared::test_helpers::lazy_test_pool;

    fn test_server() -> TestServer {
        let app = routes::routes(Arc::new(SuggestionService::new(lazy_test_pool())));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_status_patch_rejects_unknown_status() {
        let server = test_server();

        let response = server
            .patch(&format!(
                "/api/training-suggestions/{}/status",
                Uuid::new_v4()
            ))
            .json(&json!({"status": "archived"}))
            .await;

        // Unknown status fails enum deserialization before any query runs
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_implement_rejects_unparseable_start_date() {
        let server = test_server();

        let response = server
            .post(&format!(
                "/api/training-suggestions/{}/implement",
                Uuid::new_v4()
            ))
            .json(&json!({"start_date": "next monday"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title() {
        let server = test_server();

        let response = server
            .post("/api/training-suggestions")
            .json(&json!({"officer_id": Uuid::new_v4(), "title": ""}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
