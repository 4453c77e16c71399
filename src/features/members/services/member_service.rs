use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::members::dtos::{
    CreateMemberDto, MemberResponseDto, MemberWithCooperativeDto, UpdateMemberDto,
    UpdateMemberStatusDto,
};
use crate::features::members::models::{Member, MemberStatus, MemberSummary, MemberWithCooperative};
use crate::shared::ids::generate_code;

const MEMBER_COLUMNS: &str = "id, member_id, cooperative_id, first_name, middle_name, \
     last_name, suffix, date_of_birth, gender, civil_status, address, city, province, email, \
     phone, occupation, tin, photo_url, documents, status, review_notes, reviewed_by, \
     reviewed_at, membership_date, created_at, updated_at";

const MEMBER_JOINED_COLUMNS: &str = "m.id, m.member_id, m.cooperative_id, m.first_name, \
     m.middle_name, m.last_name, m.suffix, m.date_of_birth, m.gender, m.civil_status, \
     m.address, m.city, m.province, m.email, m.phone, m.occupation, m.tin, m.photo_url, \
     m.documents, m.status, m.review_notes, m.reviewed_by, m.reviewed_at, m.membership_date, \
     m.created_at, m.updated_at, c.name AS cooperative_name";

/// Service for cooperative member applications
pub struct MemberService {
    pool: PgPool,
}

impl MemberService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List members with cooperative names, optionally filtered by status
    /// and/or cooperative
    pub async fn list(
        &self,
        status: Option<MemberStatus>,
        cooperative_id: Option<Uuid>,
    ) -> Result<Vec<MemberWithCooperativeDto>> {
        let mut query = format!(
            "SELECT {MEMBER_JOINED_COLUMNS} FROM members m \
             LEFT JOIN cooperatives c ON m.cooperative_id = c.id WHERE 1=1"
        );
        if status.is_some() {
            query.push_str(" AND m.status = $1");
        }
        if cooperative_id.is_some() {
            query.push_str(if status.is_some() {
                " AND m.cooperative_id = $2"
            } else {
                " AND m.cooperative_id = $1"
            });
        }
        query.push_str(" ORDER BY m.created_at DESC");

        let mut q = sqlx::query_as::<_, MemberWithCooperative>(&query);
        if let Some(status) = status {
            q = q.bind(status);
        }
        if let Some(cooperative_id) = cooperative_id {
            q = q.bind(cooperative_id);
        }

        let members = q.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to list members: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(members.into_iter().map(|m| m.into()).collect())
    }

    /// Status counts over all members
    pub async fn summary(&self) -> Result<MemberSummary> {
        sqlx::query_as::<_, MemberSummary>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'approved') AS approved,
                COUNT(*) FILTER (WHERE status = 'pending') AS pending,
                COUNT(*) FILTER (WHERE status = 'rejected') AS rejected
            FROM members
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch member summary: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Get a member by id, with the cooperative name
    pub async fn get(&self, id: Uuid) -> Result<MemberWithCooperativeDto> {
        let member = sqlx::query_as::<_, MemberWithCooperative>(&format!(
            "SELECT {MEMBER_JOINED_COLUMNS} FROM members m \
             LEFT JOIN cooperatives c ON m.cooperative_id = c.id WHERE m.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch member: {:?}", e);
            AppError::Database(e)
        })?;

        member
            .map(|m| m.into())
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))
    }

    /// Enroll a new member with a generated MBR- code
    pub async fn create(&self, dto: CreateMemberDto) -> Result<MemberResponseDto> {
        let member_id = generate_code("MBR");

        let member = sqlx::query_as::<_, Member>(&format!(
            r#"
            INSERT INTO members (member_id, cooperative_id, first_name, middle_name, last_name,
                suffix, date_of_birth, gender, civil_status, address, city, province, email,
                phone, occupation, tin, photo_url, documents, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                    $17, $18, 'pending')
            RETURNING {MEMBER_COLUMNS}
            "#
        ))
        .bind(&member_id)
        .bind(dto.cooperative_id)
        .bind(&dto.first_name)
        .bind(&dto.middle_name)
        .bind(&dto.last_name)
        .bind(&dto.suffix)
        .bind(dto.date_of_birth)
        .bind(&dto.gender)
        .bind(&dto.civil_status)
        .bind(&dto.address)
        .bind(&dto.city)
        .bind(&dto.province)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.occupation)
        .bind(&dto.tin)
        .bind(&dto.photo_url)
        .bind(dto.documents.unwrap_or_else(|| serde_json::json!([])))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create member: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Member enrolled: id={}, code={}", member.id, member_id);

        Ok(member.into())
    }

    /// Replace a member's details
    pub async fn update(&self, id: Uuid, dto: UpdateMemberDto) -> Result<MemberResponseDto> {
        let member = sqlx::query_as::<_, Member>(&format!(
            r#"
            UPDATE members SET
                cooperative_id = $1, first_name = $2, middle_name = $3, last_name = $4,
                suffix = $5, date_of_birth = $6, gender = $7, civil_status = $8, address = $9,
                city = $10, province = $11, email = $12, phone = $13, occupation = $14,
                tin = $15, photo_url = $16, documents = $17, updated_at = NOW()
            WHERE id = $18
            RETURNING {MEMBER_COLUMNS}
            "#
        ))
        .bind(dto.cooperative_id)
        .bind(&dto.first_name)
        .bind(&dto.middle_name)
        .bind(&dto.last_name)
        .bind(&dto.suffix)
        .bind(dto.date_of_birth)
        .bind(&dto.gender)
        .bind(&dto.civil_status)
        .bind(&dto.address)
        .bind(&dto.city)
        .bind(&dto.province)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.occupation)
        .bind(&dto.tin)
        .bind(&dto.photo_url)
        .bind(dto.documents.unwrap_or_else(|| serde_json::json!([])))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update member: {:?}", e);
            AppError::Database(e)
        })?;

        member
            .map(|m| m.into())
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))
    }

    /// Record a review decision on a member application.
    ///
    /// Approval stamps the membership date (supplied or today); any other
    /// decision clears it.
    pub async fn update_status(
        &self,
        id: Uuid,
        dto: UpdateMemberStatusDto,
    ) -> Result<MemberResponseDto> {
        let membership_date = match dto.status {
            MemberStatus::Approved => {
                Some(dto.membership_date.unwrap_or_else(|| Utc::now().date_naive()))
            }
            _ => None,
        };

        let member = sqlx::query_as::<_, Member>(&format!(
            r#"
            UPDATE members SET
                status = $1, review_notes = $2, reviewed_by = $3, reviewed_at = NOW(),
                membership_date = $4, updated_at = NOW()
            WHERE id = $5
            RETURNING {MEMBER_COLUMNS}
            "#
        ))
        .bind(dto.status)
        .bind(&dto.review_notes)
        .bind(&dto.reviewed_by)
        .bind(membership_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update member status: {:?}", e);
            AppError::Database(e)
        })?;

        member
            .map(|m| m.into())
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))
    }

    /// Delete a member
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete member: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Member not found".to_string()));
        }

        tracing::info!("Member deleted: id={}", id);
        Ok(())
    }
}
