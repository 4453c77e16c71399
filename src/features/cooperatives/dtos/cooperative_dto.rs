use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::cooperatives::models::CooperativeStatus;

/// Request DTO for registering a cooperative
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCooperativeDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Type must be 1-100 characters"))]
    pub coop_type: String,

    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub region: Option<String>,
    pub registration_number: Option<String>,
    pub cda_registration_date: Option<NaiveDate>,
    pub tin: Option<String>,
    pub contact_person: Option<String>,

    #[validate(email(message = "Contact email must be a valid email address"))]
    pub contact_email: Option<String>,

    pub contact_phone: Option<String>,

    /// Uploaded document descriptors, defaults to an empty list
    pub submitted_documents: Option<serde_json::Value>,
}

/// Request DTO for replacing a cooperative's details
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCooperativeDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Type must be 1-100 characters"))]
    pub coop_type: String,

    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub region: Option<String>,
    pub registration_number: Option<String>,
    pub cda_registration_date: Option<NaiveDate>,
    pub tin: Option<String>,
    pub contact_person: Option<String>,

    #[validate(email(message = "Contact email must be a valid email address"))]
    pub contact_email: Option<String>,

    pub contact_phone: Option<String>,
    pub submitted_documents: Option<serde_json::Value>,
}

/// Request DTO for the review decision endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCooperativeStatusDto {
    pub status: CooperativeStatus,
    pub review_notes: Option<String>,
    pub reviewed_by: Option<String>,
}

/// Response DTO for a cooperative
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CooperativeResponseDto {
    pub id: Uuid,
    pub coop_id: String,
    pub name: String,
    pub coop_type: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub region: Option<String>,
    pub registration_number: Option<String>,
    pub cda_registration_date: Option<NaiveDate>,
    pub tin: Option<String>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub submitted_documents: serde_json::Value,
    pub status: CooperativeStatus,
    pub review_notes: Option<String>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_dto() -> CreateCooperativeDto {
        CreateCooperativeDto {
            name: "Bayanihan Farmers Cooperative".to_string(),
            coop_type: "agriculture".to_string(),
            address: None,
            city: None,
            province: None,
            region: None,
            registration_number: None,
            cda_registration_date: None,
            tin: None,
            contact_person: None,
            contact_email: None,
            contact_phone: None,
            submitted_documents: None,
        }
    }

    #[test]
    fn test_valid_create_dto() {
        assert!(base_dto().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut dto = base_dto();
        dto.name = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_bad_contact_email_rejected() {
        let mut dto = base_dto();
        dto.contact_email = Some("not-an-email".to_string());
        assert!(dto.validate().is_err());
    }
}
