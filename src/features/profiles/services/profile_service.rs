use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::profiles::dtos::ProfileResponseDto;
use crate::features::profiles::models::Profile;

const PROFILE_COLUMNS: &str = "id, username, first_name, middle_name, last_name, position, \
     cooperative, email, role, created_at, updated_at";

/// Service for officer profile lookups
pub struct ProfileService {
    pool: PgPool,
}

impl ProfileService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all profiles ordered by last then first name
    pub async fn list(&self) -> Result<Vec<ProfileResponseDto>> {
        let profiles = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY last_name, first_name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list profiles: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(profiles.into_iter().map(|p| p.into()).collect())
    }

    /// Get a profile by id
    pub async fn get(&self, id: Uuid) -> Result<ProfileResponseDto> {
        let profile = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get profile: {:?}", e);
            AppError::Database(e)
        })?;

        profile
            .map(|p| p.into())
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }
}
