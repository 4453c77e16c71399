use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::profiles::dtos::ProfileResponseDto;
use crate::shared::names::display_name;

/// Database model for officer profile
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub position: Option<String>,
    pub cooperative: Option<String>,
    pub email: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        display_name(&self.first_name, self.middle_name.as_deref(), &self.last_name)
    }
}

impl From<Profile> for ProfileResponseDto {
    fn from(p: Profile) -> Self {
        let full_name = p.full_name();
        Self {
            id: p.id,
            username: p.username,
            first_name: p.first_name,
            middle_name: p.middle_name,
            last_name: p.last_name,
            full_name,
            position: p.position,
            cooperative: p.cooperative,
            email: p.email,
            role: p.role,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
