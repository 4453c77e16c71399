use chrono::{Datelike, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::compliance::dtos::{
    ComplianceResponseDto, ComplianceWithCooperativeDto, CreateComplianceDto, UpdateComplianceDto,
    UpdateComplianceStatusDto,
};
use crate::features::compliance::models::{
    ComplianceRecord, ComplianceStatus, ComplianceSummary, ComplianceWithCooperative,
};

const COMPLIANCE_COLUMNS: &str = "id, cooperative_id, requirement_type, requirement_name, \
     description, due_date, submitted_date, year, documents, status, reviewer_notes, \
     reviewed_by, reviewed_at, created_at, updated_at";

const COMPLIANCE_JOINED_COLUMNS: &str = "cr.id, cr.cooperative_id, cr.requirement_type, \
     cr.requirement_name, cr.description, cr.due_date, cr.submitted_date, cr.year, \
     cr.documents, cr.status, cr.reviewer_notes, cr.reviewed_by, cr.reviewed_at, \
     cr.created_at, cr.updated_at, c.name AS cooperative_name, c.coop_id";

/// Filters for the compliance list endpoint
#[derive(Debug, Default, Clone, Copy)]
pub struct ComplianceFilter {
    pub status: Option<ComplianceStatus>,
    pub cooperative_id: Option<Uuid>,
    pub year: Option<i32>,
}

/// Service for compliance records
pub struct ComplianceService {
    pool: PgPool,
}

impl ComplianceService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List compliance records with cooperative context, earliest due first
    pub async fn list(&self, filter: ComplianceFilter) -> Result<Vec<ComplianceWithCooperativeDto>> {
        let mut query = format!(
            "SELECT {COMPLIANCE_JOINED_COLUMNS} FROM compliance_records cr \
             LEFT JOIN cooperatives c ON cr.cooperative_id = c.id WHERE 1=1"
        );
        let mut param = 0;
        if filter.status.is_some() {
            param += 1;
            query.push_str(&format!(" AND cr.status = ${param}"));
        }
        if filter.cooperative_id.is_some() {
            param += 1;
            query.push_str(&format!(" AND cr.cooperative_id = ${param}"));
        }
        if filter.year.is_some() {
            param += 1;
            query.push_str(&format!(" AND cr.year = ${param}"));
        }
        query.push_str(" ORDER BY cr.due_date ASC");

        let mut q = sqlx::query_as::<_, ComplianceWithCooperative>(&query);
        if let Some(status) = filter.status {
            q = q.bind(status);
        }
        if let Some(cooperative_id) = filter.cooperative_id {
            q = q.bind(cooperative_id);
        }
        if let Some(year) = filter.year {
            q = q.bind(year);
        }

        let records = q.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to list compliance records: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(records.into_iter().map(|r| r.into()).collect())
    }

    /// Status counts over all compliance records
    pub async fn summary(&self) -> Result<ComplianceSummary> {
        sqlx::query_as::<_, ComplianceSummary>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'compliant') AS compliant,
                COUNT(*) FILTER (WHERE status = 'pending') AS pending,
                COUNT(*) FILTER (WHERE status = 'non_compliant') AS non_compliant,
                COUNT(*) FILTER (WHERE status = 'overdue') AS overdue,
                COUNT(*) FILTER (WHERE due_date < CURRENT_DATE
                                 AND status NOT IN ('compliant', 'submitted')) AS past_due
            FROM compliance_records
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch compliance summary: {:?}", e);
            AppError::Database(e)
        })
    }

    /// List a cooperative's compliance records, earliest due first
    pub async fn list_by_cooperative(
        &self,
        cooperative_id: Uuid,
    ) -> Result<Vec<ComplianceWithCooperativeDto>> {
        let records = sqlx::query_as::<_, ComplianceWithCooperative>(&format!(
            "SELECT {COMPLIANCE_JOINED_COLUMNS} FROM compliance_records cr \
             LEFT JOIN cooperatives c ON cr.cooperative_id = c.id \
             WHERE cr.cooperative_id = $1 ORDER BY cr.due_date ASC"
        ))
        .bind(cooperative_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list cooperative compliance: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(records.into_iter().map(|r| r.into()).collect())
    }

    /// Get a compliance record by id, with cooperative context
    pub async fn get(&self, id: Uuid) -> Result<ComplianceWithCooperativeDto> {
        let record = sqlx::query_as::<_, ComplianceWithCooperative>(&format!(
            "SELECT {COMPLIANCE_JOINED_COLUMNS} FROM compliance_records cr \
             LEFT JOIN cooperatives c ON cr.cooperative_id = c.id WHERE cr.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch compliance record: {:?}", e);
            AppError::Database(e)
        })?;

        record
            .map(|r| r.into())
            .ok_or_else(|| AppError::NotFound("Compliance record not found".to_string()))
    }

    /// Create a compliance requirement; the year defaults to the current year
    pub async fn create(&self, dto: CreateComplianceDto) -> Result<ComplianceResponseDto> {
        let year = dto.year.unwrap_or_else(|| Utc::now().year());

        let record = sqlx::query_as::<_, ComplianceRecord>(&format!(
            r#"
            INSERT INTO compliance_records (cooperative_id, requirement_type, requirement_name,
                description, due_date, year, documents, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending')
            RETURNING {COMPLIANCE_COLUMNS}
            "#
        ))
        .bind(dto.cooperative_id)
        .bind(&dto.requirement_type)
        .bind(&dto.requirement_name)
        .bind(&dto.description)
        .bind(dto.due_date)
        .bind(year)
        .bind(dto.documents.unwrap_or_else(|| serde_json::json!([])))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create compliance record: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Compliance record created: id={}", record.id);

        Ok(record.into())
    }

    /// Replace a compliance record's details
    pub async fn update(&self, id: Uuid, dto: UpdateComplianceDto) -> Result<ComplianceResponseDto> {
        let record = sqlx::query_as::<_, ComplianceRecord>(&format!(
            r#"
            UPDATE compliance_records SET
                requirement_type = $1, requirement_name = $2, description = $3, due_date = $4,
                submitted_date = $5, year = $6, documents = $7, updated_at = NOW()
            WHERE id = $8
            RETURNING {COMPLIANCE_COLUMNS}
            "#
        ))
        .bind(&dto.requirement_type)
        .bind(&dto.requirement_name)
        .bind(&dto.description)
        .bind(dto.due_date)
        .bind(dto.submitted_date)
        .bind(dto.year)
        .bind(dto.documents.unwrap_or_else(|| serde_json::json!([])))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update compliance record: {:?}", e);
            AppError::Database(e)
        })?;

        record
            .map(|r| r.into())
            .ok_or_else(|| AppError::NotFound("Compliance record not found".to_string()))
    }

    /// Record a status decision on a compliance record
    pub async fn update_status(
        &self,
        id: Uuid,
        dto: UpdateComplianceStatusDto,
    ) -> Result<ComplianceResponseDto> {
        let record = sqlx::query_as::<_, ComplianceRecord>(&format!(
            r#"
            UPDATE compliance_records SET
                status = $1, reviewer_notes = $2, reviewed_by = $3, reviewed_at = NOW(),
                submitted_date = $4, updated_at = NOW()
            WHERE id = $5
            RETURNING {COMPLIANCE_COLUMNS}
            "#
        ))
        .bind(dto.status)
        .bind(&dto.reviewer_notes)
        .bind(&dto.reviewed_by)
        .bind(dto.submitted_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update compliance status: {:?}", e);
            AppError::Database(e)
        })?;

        record
            .map(|r| r.into())
            .ok_or_else(|| AppError::NotFound("Compliance record not found".to_string()))
    }

    /// Delete a compliance record
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM compliance_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete compliance record: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Compliance record not found".to_string()));
        }

        tracing::info!("Compliance record deleted: id={}", id);
        Ok(())
    }
}
