use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::cooperatives::dtos::{
    CooperativeResponseDto, CreateCooperativeDto, UpdateCooperativeDto,
    UpdateCooperativeStatusDto,
};
use crate::features::cooperatives::models::{Cooperative, CooperativeStatus, CooperativeSummary};
use crate::shared::ids::generate_code;

const COOPERATIVE_COLUMNS: &str = "id, coop_id, name, coop_type, address, city, province, \
     region, registration_number, cda_registration_date, tin, contact_person, contact_email, \
     contact_phone, submitted_documents, status, review_notes, reviewed_by, reviewed_at, \
     created_at, updated_at";

/// Service for cooperative registrations
pub struct CooperativeService {
    pool: PgPool,
}

impl CooperativeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List cooperatives, optionally filtered by status
    pub async fn list(
        &self,
        status: Option<CooperativeStatus>,
    ) -> Result<Vec<CooperativeResponseDto>> {
        let cooperatives = match status {
            Some(status) => {
                sqlx::query_as::<_, Cooperative>(&format!(
                    "SELECT {COOPERATIVE_COLUMNS} FROM cooperatives WHERE status = $1 \
                     ORDER BY created_at DESC"
                ))
                .bind(status)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Cooperative>(&format!(
                    "SELECT {COOPERATIVE_COLUMNS} FROM cooperatives ORDER BY created_at DESC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to list cooperatives: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(cooperatives.into_iter().map(|c| c.into()).collect())
    }

    /// Status counts over all cooperatives
    pub async fn summary(&self) -> Result<CooperativeSummary> {
        sqlx::query_as::<_, CooperativeSummary>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'approved') AS approved,
                COUNT(*) FILTER (WHERE status = 'pending') AS pending,
                COUNT(*) FILTER (WHERE status = 'rejected') AS rejected,
                COUNT(*) FILTER (WHERE status = 'needs_resubmission') AS needs_resubmission
            FROM cooperatives
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch cooperative summary: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Get a cooperative by id
    pub async fn get(&self, id: Uuid) -> Result<CooperativeResponseDto> {
        let cooperative = sqlx::query_as::<_, Cooperative>(&format!(
            "SELECT {COOPERATIVE_COLUMNS} FROM cooperatives WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch cooperative: {:?}", e);
            AppError::Database(e)
        })?;

        cooperative
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound("Cooperative not found".to_string()))
    }

    /// Register a new cooperative with a generated COOP- code
    pub async fn create(&self, dto: CreateCooperativeDto) -> Result<CooperativeResponseDto> {
        let coop_id = generate_code("COOP");

        let cooperative = sqlx::query_as::<_, Cooperative>(&format!(
            r#"
            INSERT INTO cooperatives (coop_id, name, coop_type, address, city, province, region,
                registration_number, cda_registration_date, tin, contact_person, contact_email,
                contact_phone, submitted_documents, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, 'pending')
            RETURNING {COOPERATIVE_COLUMNS}
            "#
        ))
        .bind(&coop_id)
        .bind(&dto.name)
        .bind(&dto.coop_type)
        .bind(&dto.address)
        .bind(&dto.city)
        .bind(&dto.province)
        .bind(&dto.region)
        .bind(&dto.registration_number)
        .bind(dto.cda_registration_date)
        .bind(&dto.tin)
        .bind(&dto.contact_person)
        .bind(&dto.contact_email)
        .bind(&dto.contact_phone)
        .bind(
            dto.submitted_documents
                .unwrap_or_else(|| serde_json::json!([])),
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create cooperative: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Cooperative registered: id={}, code={}", cooperative.id, coop_id);

        Ok(cooperative.into())
    }

    /// Replace a cooperative's details
    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateCooperativeDto,
    ) -> Result<CooperativeResponseDto> {
        let cooperative = sqlx::query_as::<_, Cooperative>(&format!(
            r#"
            UPDATE cooperatives SET
                name = $1, coop_type = $2, address = $3, city = $4, province = $5, region = $6,
                registration_number = $7, cda_registration_date = $8, tin = $9,
                contact_person = $10, contact_email = $11, contact_phone = $12,
                submitted_documents = $13, updated_at = NOW()
            WHERE id = $14
            RETURNING {COOPERATIVE_COLUMNS}
            "#
        ))
        .bind(&dto.name)
        .bind(&dto.coop_type)
        .bind(&dto.address)
        .bind(&dto.city)
        .bind(&dto.province)
        .bind(&dto.region)
        .bind(&dto.registration_number)
        .bind(dto.cda_registration_date)
        .bind(&dto.tin)
        .bind(&dto.contact_person)
        .bind(&dto.contact_email)
        .bind(&dto.contact_phone)
        .bind(
            dto.submitted_documents
                .unwrap_or_else(|| serde_json::json!([])),
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update cooperative: {:?}", e);
            AppError::Database(e)
        })?;

        cooperative
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound("Cooperative not found".to_string()))
    }

    /// Record a review decision on a cooperative
    pub async fn update_status(
        &self,
        id: Uuid,
        dto: UpdateCooperativeStatusDto,
    ) -> Result<CooperativeResponseDto> {
        let cooperative = sqlx::query_as::<_, Cooperative>(&format!(
            r#"
            UPDATE cooperatives SET
                status = $1, review_notes = $2, reviewed_by = $3, reviewed_at = NOW(),
                updated_at = NOW()
            WHERE id = $4
            RETURNING {COOPERATIVE_COLUMNS}
            "#
        ))
        .bind(dto.status)
        .bind(&dto.review_notes)
        .bind(&dto.reviewed_by)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update cooperative status: {:?}", e);
            AppError::Database(e)
        })?;

        cooperative
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound("Cooperative not found".to_string()))
    }

    /// Delete a cooperative
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM cooperatives WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete cooperative: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Cooperative not found".to_string()));
        }

        tracing::info!("Cooperative deleted: id={}", id);
        Ok(())
    }
}
