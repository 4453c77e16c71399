use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request DTO for registering a single companion outside the enrollment flow
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCompanionDto {
    pub training_id: Uuid,
    pub officer_id: Uuid,

    #[validate(length(min = 1, max = 255, message = "Companion name is required"))]
    pub companion_name: String,

    #[validate(email(message = "Companion email must be a valid email address"))]
    pub companion_email: String,

    #[validate(length(max = 50, message = "Phone must not exceed 50 characters"))]
    pub companion_phone: Option<String>,

    #[validate(length(max = 255, message = "Position must not exceed 255 characters"))]
    pub companion_position: Option<String>,
}

/// Response DTO for a companion registration row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanionResponseDto {
    pub id: Uuid,
    pub training_id: Uuid,
    pub officer_id: Uuid,
    pub companion_name: String,
    pub companion_email: String,
    pub companion_phone: Option<String>,
    pub companion_position: Option<String>,
    pub registered_at: DateTime<Utc>,
}

/// Companion with its officer and training names
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanionListItemDto {
    pub id: Uuid,
    pub training_id: Uuid,
    pub officer_id: Uuid,
    pub companion_name: String,
    pub companion_email: String,
    pub companion_phone: Option<String>,
    pub companion_position: Option<String>,
    pub registered_at: DateTime<Utc>,
    pub officer_name: String,
    pub training_title: String,
}
