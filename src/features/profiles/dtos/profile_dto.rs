use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Response DTO for officer profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponseDto {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    /// Derived `first middle last` display name
    pub full_name: String,
    pub position: Option<String>,
    pub cooperative: Option<String>,
    pub email: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
