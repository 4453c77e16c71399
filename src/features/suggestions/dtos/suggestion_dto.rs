use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::suggestions::models::SuggestionStatus;
use crate::features::trainings::dtos::TrainingResponseDto;

/// Request DTO for submitting a training suggestion
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSuggestionDto {
    pub officer_id: Uuid,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 255, message = "Category must not exceed 255 characters"))]
    pub category: Option<String>,

    pub preferred_date: Option<NaiveDate>,

    #[validate(length(max = 5000, message = "Justification must not exceed 5000 characters"))]
    pub justification: Option<String>,

    /// Defaults to `medium` when omitted
    #[validate(length(max = 50, message = "Priority must not exceed 50 characters"))]
    pub priority: Option<String>,
}

/// Request DTO for the status patch endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateSuggestionStatusDto {
    pub status: SuggestionStatus,
}

/// Optional overrides when implementing a suggestion as a training.
///
/// Date and time fields arrive as strings so a blank override can fall back to
/// the suggestion's own values; non-blank values must parse or the request is
/// rejected before the transaction starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ImplementSuggestionDto {
    pub venue: Option<String>,
    pub speaker: Option<String>,
    pub capacity: Option<i32>,
    /// `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`
    pub end_date: Option<String>,
    /// `HH:MM` or `HH:MM:SS`
    pub time: Option<String>,
}

/// Response DTO for training suggestion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuggestionResponseDto {
    pub id: Uuid,
    pub officer_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub justification: Option<String>,
    pub priority: String,
    pub status: SuggestionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Suggestion with the suggesting officer's name
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuggestionListItemDto {
    #[serde(flatten)]
    pub suggestion: SuggestionResponseDto,
    pub officer_name: String,
}

/// Result of implementing a suggestion: the created training and the updated
/// suggestion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImplementationResultDto {
    pub training: TrainingResponseDto,
    pub suggestion: SuggestionResponseDto,
}
