use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::registrations::dtos::{CompanionListItemDto, CompanionResponseDto};
use crate::shared::names::display_name;

/// Database model for a companion registration.
///
/// Companions are owned by a `(training, officer)` pair and have no account of
/// their own. There is no uniqueness constraint on this table.
#[derive(Debug, Clone, FromRow)]
pub struct CompanionRegistration {
    pub id: Uuid,
    pub training_id: Uuid,
    pub officer_id: Uuid,
    pub companion_name: String,
    pub companion_email: String,
    pub companion_phone: Option<String>,
    pub companion_position: Option<String>,
    pub registered_at: DateTime<Utc>,
}

/// Companion joined with its officer and training names
#[derive(Debug, Clone, FromRow)]
pub struct CompanionWithContext {
    pub id: Uuid,
    pub training_id: Uuid,
    pub officer_id: Uuid,
    pub companion_name: String,
    pub companion_email: String,
    pub companion_phone: Option<String>,
    pub companion_position: Option<String>,
    pub registered_at: DateTime<Utc>,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub training_title: String,
}

impl From<CompanionRegistration> for CompanionResponseDto {
    fn from(c: CompanionRegistration) -> Self {
        Self {
            id: c.id,
            training_id: c.training_id,
            officer_id: c.officer_id,
            companion_name: c.companion_name,
            companion_email: c.companion_email,
            companion_phone: c.companion_phone,
            companion_position: c.companion_position,
            registered_at: c.registered_at,
        }
    }
}

impl From<CompanionWithContext> for CompanionListItemDto {
    fn from(c: CompanionWithContext) -> Self {
        Self {
            id: c.id,
            training_id: c.training_id,
            officer_id: c.officer_id,
            companion_name: c.companion_name,
            companion_email: c.companion_email,
            companion_phone: c.companion_phone,
            companion_position: c.companion_position,
            registered_at: c.registered_at,
            officer_name: display_name(&c.first_name, c.middle_name.as_deref(), &c.last_name),
            training_title: c.training_title,
        }
    }
}
