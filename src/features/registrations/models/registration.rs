use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::registrations::dtos::{RegistrationListItemDto, TrainingRosterEntryDto};
use crate::shared::names::display_name;

/// Database model for a training registration
#[derive(Debug, Clone, FromRow)]
pub struct TrainingRegistration {
    pub id: Uuid,
    pub training_id: Uuid,
    pub officer_id: Uuid,
    pub registered_at: DateTime<Utc>,
}

/// Registration joined with officer and training names, for the admin list
#[derive(Debug, Clone, FromRow)]
pub struct RegistrationWithContext {
    pub id: Uuid,
    pub training_id: Uuid,
    pub officer_id: Uuid,
    pub registered_at: DateTime<Utc>,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub training_title: String,
}

/// Registration joined with the officer profile, for a training's roster
#[derive(Debug, Clone, FromRow)]
pub struct RosterEntry {
    pub id: Uuid,
    pub training_id: Uuid,
    pub officer_id: Uuid,
    pub registered_at: DateTime<Utc>,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub username: String,
    pub position: Option<String>,
    pub cooperative: Option<String>,
}

impl From<RegistrationWithContext> for RegistrationListItemDto {
    fn from(r: RegistrationWithContext) -> Self {
        Self {
            id: r.id,
            training_id: r.training_id,
            officer_id: r.officer_id,
            registered_at: r.registered_at,
            officer_name: display_name(&r.first_name, r.middle_name.as_deref(), &r.last_name),
            training_title: r.training_title,
        }
    }
}

impl From<RosterEntry> for TrainingRosterEntryDto {
    fn from(r: RosterEntry) -> Self {
        Self {
            id: r.id,
            training_id: r.training_id,
            officer_id: r.officer_id,
            registered_at: r.registered_at,
            full_name: display_name(&r.first_name, r.middle_name.as_deref(), &r.last_name),
            username: r.username,
            position: r.position,
            cooperative: r.cooperative,
        }
    }
}
