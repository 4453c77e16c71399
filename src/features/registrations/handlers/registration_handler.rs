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
    CreateRegistrationDto, EnrollWithCompanionsDto, EnrollmentResultDto,
    OfficerRegistrationOutcome, RegistrationListItemDto, RegistrationResponseDto,
    TrainingRosterEntryDto,
};
use crate::features::registrations::services::RegistrationService;
use crate::shared::types::{ApiResponse, Meta};

/// List all training registrations
#[utoipa::path(
    get,
    path = "/api/training-registrations",
    responses(
        (status = 200, description = "List of registrations", body = ApiResponse<Vec<RegistrationListItemDto>>),
    ),
    tag = "training-registrations"
)]
pub async fn list_registrations(
    State(service): State<Arc<RegistrationService>>,
) -> Result<Json<ApiResponse<Vec<RegistrationListItemDto>>>> {
    let registrations = service.list().await?;
    let total = registrations.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(registrations),
        None,
        Some(Meta { total }),
    )))
}

/// List the roster of one training
#[utoipa::path(
    get,
    path = "/api/training-registrations/training/{training_id}",
    params(
        ("training_id" = Uuid, Path, description = "Training id")
    ),
    responses(
        (status = 200, description = "Training roster", body = ApiResponse<Vec<TrainingRosterEntryDto>>),
    ),
    tag = "training-registrations"
)]
pub async fn list_training_roster(
    State(service): State<Arc<RegistrationService>>,
    Path(training_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<TrainingRosterEntryDto>>>> {
    let roster = service.list_by_training(training_id).await?;
    let total = roster.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(roster),
        None,
        Some(Meta { total }),
    )))
}

/// Register an officer for a training
///
/// Idempotent: re-registering the same officer reports `already_registered`
/// rather than failing.
#[utoipa::path(
    post,
    path = "/api/training-registrations",
    request_body = CreateRegistrationDto,
    responses(
        (status = 201, description = "Registration created or already present", body = ApiResponse<RegistrationResponseDto>),
    ),
    tag = "training-registrations"
)]
pub async fn create_registration(
    State(service): State<Arc<RegistrationService>>,
    AppJson(dto): AppJson<CreateRegistrationDto>,
) -> Result<(StatusCode, Json<ApiResponse<RegistrationResponseDto>>)> {
    let (outcome, registration) = service.register(dto).await?;

    let message = match outcome {
        OfficerRegistrationOutcome::Created => "Registration successful",
        OfficerRegistrationOutcome::AlreadyRegistered => "Already registered",
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            registration,
            Some(message.to_string()),
            None,
        )),
    ))
}

/// Enroll an officer with up to three companions atomically
#[utoipa::path(
    post,
    path = "/api/training-registrations/enroll-with-companions",
    request_body = EnrollWithCompanionsDto,
    responses(
        (status = 201, description = "Enrollment committed", body = ApiResponse<EnrollmentResultDto>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Enrollment failed and was rolled back")
    ),
    tag = "training-registrations"
)]
pub async fn enroll_with_companions(
    State(service): State<Arc<RegistrationService>>,
    AppJson(dto): AppJson<EnrollWithCompanionsDto>,
) -> Result<(StatusCode, Json<ApiResponse<EnrollmentResultDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let result = service.enroll_with_companions(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(result),
            Some("Enrollment successful".to_string()),
            None,
        )),
    ))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::json;

    use super::*;
    use crate::features::registrations::routes;
    use crate::features::registrations::services::CompanionService;
    use crate::shared::test_helpers::lazy_test_pool;

    fn test_server() -> TestServer {
        let pool = lazy_test_pool();
        let app = routes::routes(
            Arc::new(RegistrationService::new(pool.clone())),
            Arc::new(CompanionService::new(pool)),
        );
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_enroll_rejects_four_companions() {
        let server = test_server();

        let companions: Vec<_> = (0..4)
            .map(|i| json!({"name": format!("Guest {i}"), "email": format!("g{i}@example.com")}))
            .collect();

        let response = server
            .post("/api/training-registrations/enroll-with-companions")
            .json(&json!({
                "training_id": Uuid::new_v4(),
                "officer_id": Uuid::new_v4(),
                "companions": companions,
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_enroll_rejects_companion_without_email() {
        let server = test_server();

        let response = server
            .post("/api/training-registrations/enroll-with-companions")
            .json(&json!({
                "training_id": Uuid::new_v4(),
                "officer_id": Uuid::new_v4(),
                "companions": [{"name": "Guest"}],
            }))
            .await;

        // Missing email fails JSON deserialization before any query runs
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_enroll_rejects_malformed_officer_id() {
        let server = test_server();

        let response = server
            .post("/api/training-registrations/enroll-with-companions")
            .json(&json!({
                "training_id": Uuid::new_v4(),
                "officer_id": "not-a-uuid",
                "companions": [],
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
