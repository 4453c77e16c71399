use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::trainings::dtos::{TrainingResponseDto, TrainingWithMetricsDto};

/// Training status enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "training_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TrainingStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl std::fmt::Display for TrainingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainingStatus::Upcoming => write!(f, "upcoming"),
            TrainingStatus::Ongoing => write!(f, "ongoing"),
            TrainingStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Database model for training
#[derive(Debug, Clone, FromRow)]
pub struct Training {
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

/// Training row joined with its registration count
#[derive(Debug, Clone, FromRow)]
pub struct TrainingWithMetrics {
    #[sqlx(flatten)]
    pub training: Training,
    pub registered: i64,
}

impl From<Training> for TrainingResponseDto {
    fn from(t: Training) -> Self {
        Self {
            id: t.id,
            training_id: t.training_id,
            title: t.title,
            topic: t.topic,
            date: t.date,
            start_date: t.start_date,
            end_date: t.end_date,
            time: t.time,
            venue: t.venue,
            speaker: t.speaker,
            capacity: t.capacity,
            status: t.status,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

impl From<TrainingWithMetrics> for TrainingWithMetricsDto {
    fn from(t: TrainingWithMetrics) -> Self {
        Self {
            registered: t.registered,
            training: t.training.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::TypeInfo;

    #[test]
    fn test_status_maps_to_database_enum() {
        let info = <TrainingStatus as sqlx::Type<sqlx::Postgres>>::type_info();
        assert_eq!(info.name(), "training_status");
    }

    #[test]
    fn test_status_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&TrainingStatus::Upcoming).unwrap(),
            "\"upcoming\""
        );
        assert_eq!(
            serde_json::from_str::<TrainingStatus>("\"completed\"").unwrap(),
            TrainingStatus::Completed
        );
    }
}
