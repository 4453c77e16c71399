use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::attendance::dtos::{
    AttendanceListItemDto, AttendanceResponseDto, OfficerAttendanceDto, RecordAttendanceDto,
};
use crate::features::attendance::models::{
    Attendance, AttendanceWithContext, OfficerAttendanceRow,
};
use crate::shared::time::check_in_time_of_day;

// History is ordered by when attendance was recorded, not by training date.
const OFFICER_HISTORY_QUERY: &str = r#"
    SELECT a.id, a.officer_id, a.training_id, a.recorded_by, a.method,
           a.check_in_time, a.recorded_at,
           t.title, t.topic, t.date, t.venue
    FROM attendance a
    JOIN trainings t ON a.training_id = t.id
    WHERE a.officer_id = $1
    ORDER BY a.recorded_at DESC
"#;

/// Service for attendance records
pub struct AttendanceService {
    pool: PgPool,
}

impl AttendanceService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all attendance records with officer and training names
    pub async fn list(&self) -> Result<Vec<AttendanceListItemDto>> {
        let rows = sqlx::query_as::<_, AttendanceWithContext>(
            r#"
            SELECT a.id, a.officer_id, a.training_id, a.recorded_by, a.method,
                   a.check_in_time, a.recorded_at,
                   p.first_name, p.middle_name, p.last_name,
                   t.title AS training_title
            FROM attendance a
            JOIN profiles p ON a.officer_id = p.id
            JOIN trainings t ON a.training_id = t.id
            ORDER BY a.recorded_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list attendance: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|a| a.into()).collect())
    }

    /// List an officer's attendance history with training details
    pub async fn list_by_officer(&self, officer_id: Uuid) -> Result<Vec<OfficerAttendanceDto>> {
        let rows = sqlx::query_as::<_, OfficerAttendanceRow>(OFFICER_HISTORY_QUERY)
            .bind(officer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list attendance for officer: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(|a| a.into()).collect())
    }

    /// Record attendance for an officer at a training.
    ///
    /// Upsert on (officer, training): re-recording replaces the method and
    /// check-in time and refreshes the recorded-at timestamp.
    pub async fn record(&self, dto: RecordAttendanceDto) -> Result<AttendanceResponseDto> {
        let check_in_time = dto
            .check_in_time
            .as_deref()
            .and_then(check_in_time_of_day);

        let attendance = sqlx::query_as::<_, Attendance>(
            r#"
            INSERT INTO attendance (officer_id, training_id, recorded_by, method, check_in_time)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (officer_id, training_id) DO UPDATE
            SET recorded_by = EXCLUDED.recorded_by,
                method = EXCLUDED.method,
                check_in_time = EXCLUDED.check_in_time,
                recorded_at = NOW()
            RETURNING id, officer_id, training_id, recorded_by, method, check_in_time, recorded_at
            "#,
        )
        .bind(dto.officer_id)
        .bind(dto.training_id)
        .bind(dto.recorded_by)
        .bind(dto.method.as_deref().unwrap_or("manual"))
        .bind(check_in_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to record attendance: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Attendance recorded: officer={}, training={}",
            attendance.officer_id,
            attendance.training_id
        );

        Ok(AttendanceResponseDto {
            id: attendance.id,
            officer_id: attendance.officer_id,
            training_id: attendance.training_id,
            recorded_by: attendance.recorded_by,
            method: attendance.method,
            check_in_time: attendance.check_in_time,
            recorded_at: attendance.recorded_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_officer_history_ordered_by_recorded_at() {
        let order_by = OFFICER_HISTORY_QUERY
            .rfind("ORDER BY")
            .map(|i| OFFICER_HISTORY_QUERY[i..].trim())
            .unwrap();
        assert_eq!(order_by, "ORDER BY a.recorded_at DESC");
    }
}
