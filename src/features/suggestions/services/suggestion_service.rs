use chrono::{NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::suggestions::dtos::{
    CreateSuggestionDto, ImplementSuggestionDto, ImplementationResultDto, SuggestionListItemDto,
    SuggestionResponseDto, UpdateSuggestionStatusDto,
};
use crate::features::suggestions::models::{
    SuggestionStatus, SuggestionWithOfficer, TrainingSuggestion,
};
use crate::features::trainings::models::Training;
use crate::shared::constants::{DEFAULT_TRAINING_CAPACITY, DEFAULT_TRAINING_TIME, FIELD_TBD};
use crate::shared::ids::generate_code;
use crate::shared::time::parse_time_of_day;

const SUGGESTION_COLUMNS: &str = "id, officer_id, title, description, category, preferred_date, \
     justification, priority, status, created_at, updated_at";

/// Overrides with blanks dropped and dates/times parsed
#[derive(Debug, Default)]
pub struct ParsedOverrides {
    pub venue: Option<String>,
    pub speaker: Option<String>,
    pub capacity: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl ParsedOverrides {
    /// Trim string overrides, dropping blanks, and parse date/time overrides.
    /// A non-blank override that fails to parse is a validation error.
    pub fn from_dto(dto: &ImplementSuggestionDto) -> Result<Self> {
        let non_blank = |s: &Option<String>| {
            s.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let start_date = non_blank(&dto.start_date)
            .map(|s| {
                s.parse::<NaiveDate>().map_err(|_| {
                    AppError::Validation("start_date must be YYYY-MM-DD".to_string())
                })
            })
            .transpose()?;

        let end_date = non_blank(&dto.end_date)
            .map(|s| {
                s.parse::<NaiveDate>()
                    .map_err(|_| AppError::Validation("end_date must be YYYY-MM-DD".to_string()))
            })
            .transpose()?;

        let time = non_blank(&dto.time)
            .map(|s| {
                parse_time_of_day(&s)
                    .ok_or_else(|| AppError::Validation("time must be HH:MM".to_string()))
            })
            .transpose()?;

        Ok(Self {
            venue: non_blank(&dto.venue),
            speaker: non_blank(&dto.speaker),
            capacity: dto.capacity,
            start_date,
            end_date,
            time,
        })
    }
}

/// Effective field values for the training created from a suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTrainingFields {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    pub speaker: String,
    pub capacity: i32,
}

/// Resolve the training fields for a suggestion: an override wins when given,
/// then the suggestion's preferred date, then hard defaults.
pub fn resolve_training_fields(
    overrides: &ParsedOverrides,
    preferred_date: Option<NaiveDate>,
    today: NaiveDate,
) -> ResolvedTrainingFields {
    let start_date = overrides.start_date.or(preferred_date).unwrap_or(today);
    let end_date = overrides.end_date.unwrap_or(start_date);

    ResolvedTrainingFields {
        start_date,
        end_date,
        time: overrides.time.unwrap_or_else(|| {
            // DEFAULT_TRAINING_TIME is a valid HH:MM literal
            parse_time_of_day(DEFAULT_TRAINING_TIME).unwrap()
        }),
        venue: overrides.venue.clone().unwrap_or_else(|| FIELD_TBD.to_string()),
        speaker: overrides
            .speaker
            .clone()
            .unwrap_or_else(|| FIELD_TBD.to_string()),
        capacity: overrides.capacity.unwrap_or(DEFAULT_TRAINING_CAPACITY),
    }
}

/// Service for training suggestions, including the implement transaction
pub struct SuggestionService {
    pool: PgPool,
}

impl SuggestionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all suggestions with the suggesting officer's name
    pub async fn list(&self) -> Result<Vec<SuggestionListItemDto>> {
        let rows = sqlx::query_as::<_, SuggestionWithOfficer>(
            r#"
            SELECT ts.id, ts.officer_id, ts.title, ts.description, ts.category,
                   ts.preferred_date, ts.justification, ts.priority, ts.status,
                   ts.created_at, ts.updated_at,
                   p.first_name, p.middle_name, p.last_name
            FROM training_suggestions ts
            JOIN profiles p ON ts.officer_id = p.id
            ORDER BY ts.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list training suggestions: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|s| s.into()).collect())
    }

    /// Submit a new suggestion
    pub async fn create(&self, dto: CreateSuggestionDto) -> Result<SuggestionResponseDto> {
        let suggestion = sqlx::query_as::<_, TrainingSuggestion>(&format!(
            r#"
            INSERT INTO training_suggestions
                (officer_id, title, description, category, preferred_date, justification, priority)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {SUGGESTION_COLUMNS}
            "#
        ))
        .bind(dto.officer_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.category)
        .bind(dto.preferred_date)
        .bind(&dto.justification)
        .bind(dto.priority.as_deref().unwrap_or("medium"))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create training suggestion: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Training suggestion created: id={}", suggestion.id);

        Ok(suggestion.into())
    }

    /// Patch a suggestion's status
    pub async fn update_status(
        &self,
        id: Uuid,
        dto: UpdateSuggestionStatusDto,
    ) -> Result<SuggestionResponseDto> {
        let suggestion = sqlx::query_as::<_, TrainingSuggestion>(&format!(
            r#"
            UPDATE training_suggestions
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING {SUGGESTION_COLUMNS}
            "#
        ))
        .bind(dto.status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update suggestion status: {:?}", e);
            AppError::Database(e)
        })?;

        suggestion
            .map(|s| s.into())
            .ok_or_else(|| AppError::NotFound("Training suggestion not found".to_string()))
    }

    /// Implement a suggestion as a new training.
    ///
    /// One transaction: read the suggestion, insert the training, mark the
    /// suggestion implemented. The status update is unconditional, so
    /// re-implementing an implemented suggestion schedules another training
    /// (a second cohort) rather than failing.
    pub async fn implement(
        &self,
        id: Uuid,
        dto: ImplementSuggestionDto,
    ) -> Result<ImplementationResultDto> {
        // Parse overrides before touching the database
        let overrides = ParsedOverrides::from_dto(&dto)?;

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin implement transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let suggestion = sqlx::query_as::<_, TrainingSuggestion>(&format!(
            "SELECT {SUGGESTION_COLUMNS} FROM training_suggestions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load suggestion for implementation: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Training suggestion not found".to_string()))?;

        let fields =
            resolve_training_fields(&overrides, suggestion.preferred_date, Utc::now().date_naive());
        let code = generate_code("TRN");

        let training = sqlx::query_as::<_, Training>(
            r#"
            INSERT INTO trainings (training_id, title, topic, date, start_date, end_date,
                                   time, venue, speaker, capacity, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'upcoming')
            RETURNING id, training_id, title, topic, date, start_date, end_date,
                      time, venue, speaker, capacity, status, created_at, updated_at
            "#,
        )
        .bind(&code)
        .bind(&suggestion.title)
        .bind(&suggestion.category)
        .bind(fields.start_date)
        .bind(fields.start_date)
        .bind(fields.end_date)
        .bind(fields.time)
        .bind(&fields.venue)
        .bind(&fields.speaker)
        .bind(fields.capacity)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create training from suggestion: {:?}", e);
            AppError::Database(e)
        })?;

        let suggestion = sqlx::query_as::<_, TrainingSuggestion>(&format!(
            r#"
            UPDATE training_suggestions
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING {SUGGESTION_COLUMNS}
            "#
        ))
        .bind(SuggestionStatus::Implemented)
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to mark suggestion implemented: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit implement transaction: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Suggestion implemented: suggestion={}, training={}, code={}",
            suggestion.id,
            training.id,
            training.training_id
        );

        Ok(ImplementationResultDto {
            training: training.into(),
            suggestion: suggestion.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn parse(dto: &ImplementSuggestionDto) -> ParsedOverrides {
        ParsedOverrides::from_dto(dto).unwrap()
    }

    #[test]
    fn test_defaults_when_no_overrides() {
        let overrides = parse(&ImplementSuggestionDto::default());
        let fields =
            resolve_training_fields(&overrides, Some(date("2024-06-01")), date("2024-05-15"));

        assert_eq!(fields.start_date, date("2024-06-01"));
        assert_eq!(fields.end_date, date("2024-06-01"));
        assert_eq!(fields.venue, "TBD");
        assert_eq!(fields.speaker, "TBD");
        assert_eq!(fields.capacity, 50);
        assert_eq!(fields.time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    }

    #[test]
    fn test_today_when_no_preferred_date() {
        let overrides = parse(&ImplementSuggestionDto::default());
        let fields = resolve_training_fields(&overrides, None, date("2024-05-15"));

        assert_eq!(fields.start_date, date("2024-05-15"));
        assert_eq!(fields.end_date, date("2024-05-15"));
    }

    #[test]
    fn test_end_date_falls_back_to_start_override() {
        let dto = ImplementSuggestionDto {
            start_date: Some("2024-07-10".to_string()),
            end_date: Some("   ".to_string()),
            ..Default::default()
        };
        let fields =
            resolve_training_fields(&parse(&dto), Some(date("2024-06-01")), date("2024-05-15"));

        assert_eq!(fields.start_date, date("2024-07-10"));
        assert_eq!(fields.end_date, date("2024-07-10"));
    }

    #[test]
    fn test_overrides_win_over_suggestion_and_defaults() {
        let dto = ImplementSuggestionDto {
            venue: Some("  Training Center  ".to_string()),
            speaker: Some("M. Reyes".to_string()),
            capacity: Some(80),
            start_date: Some("2024-07-10".to_string()),
            end_date: Some("2024-07-12".to_string()),
            time: Some("13:30".to_string()),
        };
        let fields =
            resolve_training_fields(&parse(&dto), Some(date("2024-06-01")), date("2024-05-15"));

        assert_eq!(fields.venue, "Training Center");
        assert_eq!(fields.speaker, "M. Reyes");
        assert_eq!(fields.capacity, 80);
        assert_eq!(fields.start_date, date("2024-07-10"));
        assert_eq!(fields.end_date, date("2024-07-12"));
        assert_eq!(fields.time, NaiveTime::from_hms_opt(13, 30, 0).unwrap());
    }

    #[test]
    fn test_blank_overrides_are_dropped() {
        let dto = ImplementSuggestionDto {
            venue: Some("   ".to_string()),
            speaker: Some(String::new()),
            ..Default::default()
        };
        let overrides = parse(&dto);

        assert_eq!(overrides.venue, None);
        assert_eq!(overrides.speaker, None);
    }

    #[test]
    fn test_unparseable_date_override_is_rejected() {
        let dto = ImplementSuggestionDto {
            start_date: Some("July 10".to_string()),
            ..Default::default()
        };
        assert!(ParsedOverrides::from_dto(&dto).is_err());

        let dto = ImplementSuggestionDto {
            time: Some("1pm".to_string()),
            ..Default::default()
        };
        assert!(ParsedOverrides::from_dto(&dto).is_err());
    }
}
