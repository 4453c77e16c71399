use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::members::models::MemberStatus;

/// Request DTO for enrolling a member in a cooperative
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMemberDto {
    pub cooperative_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(max = 100, message = "Middle name must not exceed 100 characters"))]
    pub middle_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    pub suffix: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub civil_status: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,

    #[validate(email(message = "Email must be a valid email address"))]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub occupation: Option<String>,
    pub tin: Option<String>,
    pub photo_url: Option<String>,

    /// Uploaded document descriptors, defaults to an empty list
    pub documents: Option<serde_json::Value>,
}

/// Request DTO for replacing a member's details
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMemberDto {
    pub cooperative_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(max = 100, message = "Middle name must not exceed 100 characters"))]
    pub middle_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    pub suffix: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub civil_status: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,

    #[validate(email(message = "Email must be a valid email address"))]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub occupation: Option<String>,
    pub tin: Option<String>,
    pub photo_url: Option<String>,
    pub documents: Option<serde_json::Value>,
}

/// Request DTO for the review decision endpoint.
///
/// On approval the membership date is the supplied date or today; any other
/// decision clears it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateMemberStatusDto {
    pub status: MemberStatus,
    pub review_notes: Option<String>,
    pub reviewed_by: Option<String>,
    pub membership_date: Option<NaiveDate>,
}

/// Response DTO for a member
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MemberResponseDto {
    pub id: Uuid,
    pub member_id: String,
    pub cooperative_id: Uuid,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub suffix: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub civil_status: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub occupation: Option<String>,
    pub tin: Option<String>,
    pub photo_url: Option<String>,
    pub documents: serde_json::Value,
    pub status: MemberStatus,
    pub review_notes: Option<String>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub membership_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Member with the owning cooperative's name
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MemberWithCooperativeDto {
    #[serde(flatten)]
    pub member: MemberResponseDto,
    pub cooperative_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_dto() -> CreateMemberDto {
        CreateMemberDto {
            cooperative_id: Uuid::nil(),
            first_name: "Juan".to_string(),
            middle_name: None,
            last_name: "dela Cruz".to_string(),
            suffix: None,
            date_of_birth: None,
            gender: None,
            civil_status: None,
            address: None,
            city: None,
            province: None,
            email: None,
            phone: None,
            occupation: None,
            tin: None,
            photo_url: None,
            documents: None,
        }
    }

    #[test]
    fn test_valid_create_dto() {
        assert!(base_dto().validate().is_ok());
    }

    #[test]
    fn test_empty_first_name_rejected() {
        let mut dto = base_dto();
        dto.first_name = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut dto = base_dto();
        dto.email = Some("not-an-email".to_string());
        assert!(dto.validate().is_err());
    }
}
