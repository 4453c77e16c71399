use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::registrations::dtos::{
    CreateRegistrationDto, EnrollWithCompanionsDto, EnrollmentResultDto,
    OfficerRegistrationOutcome, RegistrationListItemDto, RegistrationResponseDto,
    TrainingRosterEntryDto,
};
use crate::features::registrations::models::{
    RegistrationWithContext, RosterEntry, TrainingRegistration,
};

/// Service for training registrations, including the enrollment transaction
pub struct RegistrationService {
    pool: PgPool,
}

impl RegistrationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all registrations with officer and training names
    pub async fn list(&self) -> Result<Vec<RegistrationListItemDto>> {
        let rows = sqlx::query_as::<_, RegistrationWithContext>(
            r#"
            SELECT tr.id, tr.training_id, tr.officer_id, tr.registered_at,
                   p.first_name, p.middle_name, p.last_name,
                   t.title AS training_title
            FROM training_registrations tr
            JOIN profiles p ON tr.officer_id = p.id
            JOIN trainings t ON tr.training_id = t.id
            ORDER BY tr.registered_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list registrations: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// List the roster of one training
    pub async fn list_by_training(&self, training_id: Uuid) -> Result<Vec<TrainingRosterEntryDto>> {
        let rows = sqlx::query_as::<_, RosterEntry>(
            r#"
            SELECT tr.id, tr.training_id, tr.officer_id, tr.registered_at,
                   p.first_name, p.middle_name, p.last_name,
                   p.username, p.position, p.cooperative
            FROM training_registrations tr
            JOIN profiles p ON tr.officer_id = p.id
            WHERE tr.training_id = $1
            ORDER BY tr.registered_at
            "#,
        )
        .bind(training_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list training roster: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Register an officer for a training.
    ///
    /// Idempotent: a duplicate `(training_id, officer_id)` pair is a no-op and
    /// the result reports `AlreadyRegistered` instead of the new row.
    pub async fn register(
        &self,
        dto: CreateRegistrationDto,
    ) -> Result<(OfficerRegistrationOutcome, Option<RegistrationResponseDto>)> {
        let registration = sqlx::query_as::<_, TrainingRegistration>(
            r#"
            INSERT INTO training_registrations (training_id, officer_id)
            VALUES ($1, $2)
            ON CONFLICT (training_id, officer_id) DO NOTHING
            RETURNING id, training_id, officer_id, registered_at
            "#,
        )
        .bind(dto.training_id)
        .bind(dto.officer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create registration: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(match registration {
            Some(r) => (
                OfficerRegistrationOutcome::Created,
                Some(RegistrationResponseDto {
                    id: r.id,
                    training_id: r.training_id,
                    officer_id: r.officer_id,
                    registered_at: r.registered_at,
                }),
            ),
            None => (OfficerRegistrationOutcome::AlreadyRegistered, None),
        })
    }

    /// Enroll an officer together with their companions in one transaction.
    ///
    /// The officer insert is idempotent (`ON CONFLICT DO NOTHING`); companion
    /// inserts run sequentially against the same connection. Any failure rolls
    /// back the whole enrollment, so a partial companion list is never
    /// persisted. The transaction rolls back on drop when an insert fails.
    pub async fn enroll_with_companions(
        &self,
        dto: EnrollWithCompanionsDto,
    ) -> Result<EnrollmentResultDto> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin enrollment transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let inserted: Option<(Uuid,)> = sqlx::query_as(
            r#"
            INSERT INTO training_registrations (training_id, officer_id)
            VALUES ($1, $2)
            ON CONFLICT (training_id, officer_id) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(dto.training_id)
        .bind(dto.officer_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to register officer during enrollment: {:?}", e);
            AppError::Database(e)
        })?;

        for companion in &dto.companions {
            sqlx::query(
                r#"
                INSERT INTO companion_registrations
                    (training_id, officer_id, companion_name, companion_email,
                     companion_phone, companion_position)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(dto.training_id)
            .bind(dto.officer_id)
            .bind(&companion.name)
            .bind(&companion.email)
            .bind(&companion.phone)
            .bind(&companion.position)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to register companion during enrollment: {:?}", e);
                AppError::Database(e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit enrollment transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let outcome = if inserted.is_some() {
            OfficerRegistrationOutcome::Created
        } else {
            OfficerRegistrationOutcome::AlreadyRegistered
        };

        tracing::info!(
            "Enrollment committed: training={}, officer={}, outcome={:?}, companions={}",
            dto.training_id,
            dto.officer_id,
            outcome,
            dto.companions.len()
        );

        Ok(EnrollmentResultDto {
            officer_registration: outcome,
            companions_registered: dto.companions.len() as i64,
        })
    }
}
