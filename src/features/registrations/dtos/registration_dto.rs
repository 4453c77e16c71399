use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request DTO for registering a single officer
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRegistrationDto {
    pub training_id: Uuid,
    pub officer_id: Uuid,
}

/// One companion in an enrollment request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CompanionDto {
    #[validate(length(min = 1, max = 255, message = "Companion name is required"))]
    pub name: String,

    #[validate(email(message = "Companion email must be a valid email address"))]
    pub email: String,

    #[validate(length(max = 50, message = "Phone must not exceed 50 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 255, message = "Position must not exceed 255 characters"))]
    pub position: Option<String>,
}

/// Request DTO for the enroll-with-companions transaction
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct EnrollWithCompanionsDto {
    pub training_id: Uuid,
    pub officer_id: Uuid,

    /// Up to three companions per enrollment
    #[serde(default)]
    #[validate(length(max = 3, message = "At most 3 companions per enrollment"), nested)]
    pub companions: Vec<CompanionDto>,
}

/// Whether the officer registration was newly created or already present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OfficerRegistrationOutcome {
    Created,
    AlreadyRegistered,
}

/// Response DTO for the enroll-with-companions transaction
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentResultDto {
    pub officer_registration: OfficerRegistrationOutcome,
    pub companions_registered: i64,
}

/// Response DTO for a bare registration row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponseDto {
    pub id: Uuid,
    pub training_id: Uuid,
    pub officer_id: Uuid,
    pub registered_at: DateTime<Utc>,
}

/// Registration with officer and training names, for the admin list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationListItemDto {
    pub id: Uuid,
    pub training_id: Uuid,
    pub officer_id: Uuid,
    pub registered_at: DateTime<Utc>,
    pub officer_name: String,
    pub training_title: String,
}

/// Roster entry for one training
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingRosterEntryDto {
    pub id: Uuid,
    pub training_id: Uuid,
    pub officer_id: Uuid,
    pub registered_at: DateTime<Utc>,
    pub full_name: String,
    pub username: String,
    pub position: Option<String>,
    pub cooperative: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn companion(name: &str, email: &str) -> CompanionDto {
        CompanionDto {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            position: None,
        }
    }

    fn enrollment(companions: Vec<CompanionDto>) -> EnrollWithCompanionsDto {
        EnrollWithCompanionsDto {
            training_id: Uuid::new_v4(),
            officer_id: Uuid::new_v4(),
            companions,
        }
    }

    #[test]
    fn test_enrollment_with_no_companions_is_valid() {
        assert!(enrollment(vec![]).validate().is_ok());
    }

    #[test]
    fn test_enrollment_with_three_companions_is_valid() {
        let dto = enrollment(vec![
            companion("Ana Reyes", "ana@example.com"),
            companion("Ben Cruz", "ben@example.com"),
            companion("Carla Lim", "carla@example.com"),
        ]);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_enrollment_with_four_companions_is_rejected() {
        let dto = enrollment(vec![
            companion("A", "a@example.com"),
            companion("B", "b@example.com"),
            companion("C", "c@example.com"),
            companion("D", "d@example.com"),
        ]);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_companion_requires_name_and_valid_email() {
        let dto = enrollment(vec![companion("", "a@example.com")]);
        assert!(dto.validate().is_err());

        let dto = enrollment(vec![companion("Ana Reyes", "not-an-email")]);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_max_companions_constant_matches_validation() {
        // The serde/validator bound above is a literal; keep it in sync
        assert_eq!(crate::shared::constants::MAX_COMPANIONS_PER_ENROLLMENT, 3);
    }
}
