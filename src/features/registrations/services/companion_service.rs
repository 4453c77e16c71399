use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::registrations::dtos::{
    CompanionListItemDto, CompanionResponseDto, CreateCompanionDto,
};
use crate::features::registrations::models::{CompanionRegistration, CompanionWithContext};

const COMPANION_CONTEXT_QUERY: &str = r#"
    SELECT cr.id, cr.training_id, cr.officer_id, cr.companion_name, cr.companion_email,
           cr.companion_phone, cr.companion_position, cr.registered_at,
           p.first_name, p.middle_name, p.last_name,
           t.title AS training_title
    FROM companion_registrations cr
    JOIN profiles p ON cr.officer_id = p.id
    JOIN trainings t ON cr.training_id = t.id
"#;

/// Service for companion registrations outside the enrollment transaction
pub struct CompanionService {
    pool: PgPool,
}

impl CompanionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all companion registrations with officer and training names
    pub async fn list(&self) -> Result<Vec<CompanionListItemDto>> {
        let rows = sqlx::query_as::<_, CompanionWithContext>(&format!(
            "{COMPANION_CONTEXT_QUERY} ORDER BY cr.registered_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list companion registrations: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|c| c.into()).collect())
    }

    /// List companions registered for one training
    pub async fn list_by_training(&self, training_id: Uuid) -> Result<Vec<CompanionListItemDto>> {
        let rows = sqlx::query_as::<_, CompanionWithContext>(&format!(
            "{COMPANION_CONTEXT_QUERY} WHERE cr.training_id = $1 ORDER BY cr.registered_at DESC"
        ))
        .bind(training_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list companions for training: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|c| c.into()).collect())
    }

    /// Register a single companion.
    ///
    /// No uniqueness constraint applies; resubmitting creates a new row.
    pub async fn create(&self, dto: CreateCompanionDto) -> Result<CompanionResponseDto> {
        let companion = sqlx::query_as::<_, CompanionRegistration>(
            r#"
            INSERT INTO companion_registrations
                (training_id, officer_id, companion_name, companion_email,
                 companion_phone, companion_position)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, training_id, officer_id, companion_name, companion_email,
                      companion_phone, companion_position, registered_at
            "#,
        )
        .bind(dto.training_id)
        .bind(dto.officer_id)
        .bind(&dto.companion_name)
        .bind(&dto.companion_email)
        .bind(&dto.companion_phone)
        .bind(&dto.companion_position)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create companion registration: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(companion.into())
    }
}
