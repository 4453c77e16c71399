use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::compliance::models::ComplianceStatus;

/// Request DTO for creating a compliance requirement
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateComplianceDto {
    pub cooperative_id: Uuid,

    #[validate(length(max = 100, message = "Requirement type must not exceed 100 characters"))]
    pub requirement_type: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Requirement name must be 1-255 characters"))]
    pub requirement_name: String,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    pub due_date: NaiveDate,

    /// Defaults to the current year when omitted
    #[validate(range(min = 2000, max = 2100, message = "Year must be between 2000 and 2100"))]
    pub year: Option<i32>,

    /// Uploaded document descriptors, defaults to an empty list
    pub documents: Option<serde_json::Value>,
}

/// Request DTO for replacing a compliance record's details
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateComplianceDto {
    #[validate(length(max = 100, message = "Requirement type must not exceed 100 characters"))]
    pub requirement_type: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Requirement name must be 1-255 characters"))]
    pub requirement_name: String,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    pub due_date: NaiveDate,
    pub submitted_date: Option<NaiveDate>,

    #[validate(range(min = 2000, max = 2100, message = "Year must be between 2000 and 2100"))]
    pub year: i32,

    pub documents: Option<serde_json::Value>,
}

/// Request DTO for the status patch endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateComplianceStatusDto {
    pub status: ComplianceStatus,
    pub reviewer_notes: Option<String>,
    pub reviewed_by: Option<String>,
    pub submitted_date: Option<NaiveDate>,
}

/// Response DTO for a compliance record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComplianceResponseDto {
    pub id: Uuid,
    pub cooperative_id: Uuid,
    pub requirement_type: Option<String>,
    pub requirement_name: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub submitted_date: Option<NaiveDate>,
    pub year: i32,
    pub documents: serde_json::Value,
    pub status: ComplianceStatus,
    pub reviewer_notes: Option<String>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compliance record with the cooperative's name and code
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComplianceWithCooperativeDto {
    #[serde(flatten)]
    pub record: ComplianceResponseDto,
    pub cooperative_name: Option<String>,
    pub coop_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_dto() -> CreateComplianceDto {
        CreateComplianceDto {
            cooperative_id: Uuid::nil(),
            requirement_type: Some("annual_report".to_string()),
            requirement_name: "Annual Financial Report".to_string(),
            description: None,
            due_date: "2026-04-30".parse().unwrap(),
            year: Some(2026),
            documents: None,
        }
    }

    #[test]
    fn test_valid_create_dto() {
        assert!(base_dto().validate().is_ok());
    }

    #[test]
    fn test_empty_requirement_name_rejected() {
        let mut dto = base_dto();
        dto.requirement_name = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_year_out_of_range_rejected() {
        let mut dto = base_dto();
        dto.year = Some(1970);
        assert!(dto.validate().is_err());
    }
}
