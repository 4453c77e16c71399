use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::trainings::models::TrainingStatus;
use crate::shared::validation::RECORD_CODE_REGEX;

/// Request DTO for creating a training
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTrainingDto {
    /// Human-readable training code; generated as `TRN-<base36>` when omitted
    #[validate(regex(
        path = *RECORD_CODE_REGEX,
        message = "Training code must look like TRN-<BASE36>"
    ))]
    pub training_id: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(max = 255, message = "Topic must not exceed 255 characters"))]
    pub topic: Option<String>,

    pub date: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Start time as `HH:MM` or `HH:MM:SS`
    pub time: String,

    #[validate(length(min = 1, max = 255, message = "Venue must be 1-255 characters"))]
    pub venue: String,

    #[validate(length(min = 1, max = 255, message = "Speaker must be 1-255 characters"))]
    pub speaker: String,

    #[validate(range(min = 1, message = "Capacity must be positive"))]
    pub capacity: i32,

    /// Defaults to `upcoming` when omitted
    pub status: Option<TrainingStatus>,
}

/// Request DTO for updating a training
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTrainingDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(max = 255, message = "Topic must not exceed 255 characters"))]
    pub topic: Option<String>,

    pub date: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Start time as `HH:MM` or `HH:MM:SS`
    pub time: String,

    #[validate(length(min = 1, max = 255, message = "Venue must be 1-255 characters"))]
    pub venue: String,

    #[validate(length(min = 1, max = 255, message = "Speaker must be 1-255 characters"))]
    pub speaker: String,

    #[validate(range(min = 1, message = "Capacity must be positive"))]
    pub capacity: i32,

    pub status: TrainingStatus,
}

/// Response DTO for training
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingResponseDto {
    pub id: Uuid,
    pub training_id: String,
    pub title: String,
    pub topic: Option<String>,
    pub date: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    pub speaker: String,
    pub capacity: i32,
    pub status: TrainingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Training with its registration count, for the admin overview table
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingWithMetricsDto {
    #[serde(flatten)]
    pub training: TrainingResponseDto,
    /// Number of registered officers (capacity is advisory and not enforced)
    pub registered: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_create() -> CreateTrainingDto {
        CreateTrainingDto {
            training_id: None,
            title: "Cooperative Governance 101".to_string(),
            topic: Some("Governance".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
            time: "09:00".to_string(),
            venue: "Main Hall".to_string(),
            speaker: "J. Santos".to_string(),
            capacity: 50,
            status: None,
        }
    }

    #[test]
    fn test_create_training_valid() {
        assert!(base_create().validate().is_ok());
    }

    #[test]
    fn test_create_training_rejects_bad_code() {
        let mut dto = base_create();
        dto.training_id = Some("trn_123".to_string());
        assert!(dto.validate().is_err());

        dto.training_id = Some("TRN-MBCDEF12".to_string());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_training_rejects_zero_capacity() {
        let mut dto = base_create();
        dto.capacity = 0;
        assert!(dto.validate().is_err());
    }
}
