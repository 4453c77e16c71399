use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::trainings::dtos::{
    CreateTrainingDto, TrainingResponseDto, TrainingWithMetricsDto, UpdateTrainingDto,
};
use crate::features::trainings::models::{Training, TrainingStatus, TrainingWithMetrics};
use crate::shared::ids::generate_code;
use crate::shared::time::parse_time_of_day;

const TRAINING_COLUMNS: &str = "id, training_id, title, topic, date, start_date, end_date, \
     time, venue, speaker, capacity, status, created_at, updated_at";

/// Service for training catalog operations
pub struct TrainingService {
    pool: PgPool,
}

impl TrainingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all trainings, most recent start date first
    pub async fn list(&self) -> Result<Vec<TrainingResponseDto>> {
        let trainings = sqlx::query_as::<_, Training>(&format!(
            "SELECT {TRAINING_COLUMNS} FROM trainings ORDER BY start_date DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list trainings: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(trainings.into_iter().map(|t| t.into()).collect())
    }

    /// List trainings with their registration counts
    pub async fn list_with_metrics(&self) -> Result<Vec<TrainingWithMetricsDto>> {
        let rows = sqlx::query_as::<_, TrainingWithMetrics>(
            r#"
            SELECT t.id, t.training_id, t.title, t.topic, t.date, t.start_date, t.end_date,
                   t.time, t.venue, t.speaker, t.capacity, t.status, t.created_at, t.updated_at,
                   COUNT(DISTINCT tr.id) AS registered
            FROM trainings t
            LEFT JOIN training_registrations tr ON t.id = tr.training_id
            GROUP BY t.id
            ORDER BY t.start_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list trainings with metrics: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|t| t.into()).collect())
    }

    /// Get a training by id
    pub async fn get(&self, id: Uuid) -> Result<TrainingResponseDto> {
        let training = sqlx::query_as::<_, Training>(&format!(
            "SELECT {TRAINING_COLUMNS} FROM trainings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get training: {:?}", e);
            AppError::Database(e)
        })?;

        training
            .map(|t| t.into())
            .ok_or_else(|| AppError::NotFound("Training not found".to_string()))
    }

    /// Create a training, generating a `TRN-` code when none is supplied
    pub async fn create(&self, dto: CreateTrainingDto) -> Result<TrainingResponseDto> {
        let time = parse_time_of_day(&dto.time)
            .ok_or_else(|| AppError::Validation("Time must be HH:MM or HH:MM:SS".to_string()))?;

        let code = dto
            .training_id
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| generate_code("TRN"));

        let training = sqlx::query_as::<_, Training>(&format!(
            r#"
            INSERT INTO trainings (training_id, title, topic, date, start_date, end_date,
                                   time, venue, speaker, capacity, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {TRAINING_COLUMNS}
            "#
        ))
        .bind(&code)
        .bind(&dto.title)
        .bind(&dto.topic)
        .bind(dto.date)
        .bind(dto.start_date)
        .bind(dto.end_date)
        .bind(time)
        .bind(&dto.venue)
        .bind(&dto.speaker)
        .bind(dto.capacity)
        .bind(dto.status.unwrap_or(TrainingStatus::Upcoming))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create training: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Training created: id={}, code={}", training.id, training.training_id);

        Ok(training.into())
    }

    /// Update a training
    pub async fn update(&self, id: Uuid, dto: UpdateTrainingDto) -> Result<TrainingResponseDto> {
        let time = parse_time_of_day(&dto.time)
            .ok_or_else(|| AppError::Validation("Time must be HH:MM or HH:MM:SS".to_string()))?;

        let training = sqlx::query_as::<_, Training>(&format!(
            r#"
            UPDATE trainings
            SET title = $1, topic = $2, date = $3, start_date = $4, end_date = $5, time = $6,
                venue = $7, speaker = $8, capacity = $9, status = $10, updated_at = NOW()
            WHERE id = $11
            RETURNING {TRAINING_COLUMNS}
            "#
        ))
        .bind(&dto.title)
        .bind(&dto.topic)
        .bind(dto.date)
        .bind(dto.start_date)
        .bind(dto.end_date)
        .bind(time)
        .bind(&dto.venue)
        .bind(&dto.speaker)
        .bind(dto.capacity)
        .bind(dto.status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update training: {:?}", e);
            AppError::Database(e)
        })?;

        training
            .map(|t| t.into())
            .ok_or_else(|| AppError::NotFound("Training not found".to_string()))
    }

    /// Delete a training; registrations and attendance cascade
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM trainings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete training: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Training not found".to_string()));
        }

        Ok(())
    }
}
