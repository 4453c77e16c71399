use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::suggestions::dtos::{SuggestionListItemDto, SuggestionResponseDto};
use crate::shared::names::display_name;

/// Suggestion lifecycle status matching the database enum.
///
/// The lifecycle is one-directional; nothing moves `implemented` back to
/// `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "suggestion_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    Pending,
    Approved,
    Implemented,
    Rejected,
}

impl std::fmt::Display for SuggestionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionStatus::Pending => write!(f, "pending"),
            SuggestionStatus::Approved => write!(f, "approved"),
            SuggestionStatus::Implemented => write!(f, "implemented"),
            SuggestionStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Database model for training suggestion
#[derive(Debug, Clone, FromRow)]
pub struct TrainingSuggestion {
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

/// Suggestion joined with the suggesting officer's name
#[derive(Debug, Clone, FromRow)]
pub struct SuggestionWithOfficer {
    #[sqlx(flatten)]
    pub suggestion: TrainingSuggestion,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
}

impl From<TrainingSuggestion> for SuggestionResponseDto {
    fn from(s: TrainingSuggestion) -> Self {
        Self {
            id: s.id,
            officer_id: s.officer_id,
            title: s.title,
            description: s.description,
            category: s.category,
            preferred_date: s.preferred_date,
            justification: s.justification,
            priority: s.priority,
            status: s.status,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

impl From<SuggestionWithOfficer> for SuggestionListItemDto {
    fn from(s: SuggestionWithOfficer) -> Self {
        let officer_name = display_name(
            &s.first_name,
            s.middle_name.as_deref(),
            &s.last_name,
        );
        Self {
            officer_name,
            suggestion: s.suggestion.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::TypeInfo;

    #[test]
    fn test_status_maps_to_database_enum() {
        let info = <SuggestionStatus as sqlx::Type<sqlx::Postgres>>::type_info();
        assert_eq!(info.name(), "suggestion_status");
    }

    #[test]
    fn test_status_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&SuggestionStatus::Implemented).unwrap(),
            "\"implemented\""
        );
        assert_eq!(
            serde_json::from_str::<SuggestionStatus>("\"approved\"").unwrap(),
            SuggestionStatus::Approved
        );
    }
}
