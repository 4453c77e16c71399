use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::cooperatives::dtos::CooperativeResponseDto;

/// Review status of a cooperative registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "cooperative_status", rename_all = "snake_case")]
pub enum CooperativeStatus {
    Pending,
    Approved,
    Rejected,
    NeedsResubmission,
}

impl std::fmt::Display for CooperativeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CooperativeStatus::Pending => write!(f, "pending"),
            CooperativeStatus::Approved => write!(f, "approved"),
            CooperativeStatus::Rejected => write!(f, "rejected"),
            CooperativeStatus::NeedsResubmission => write!(f, "needs_resubmission"),
        }
    }
}

/// Database model for a cooperative
#[derive(Debug, Clone, FromRow)]
pub struct Cooperative {
    pub id: Uuid,
    pub coop_id: String,
    pub name: String,
    pub coop_type: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub region: Option<String>,
    pub registration_number: Option<String>,
    pub cda_registration_date: Option<NaiveDate>,
    pub tin: Option<String>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub submitted_documents: serde_json::Value,
    pub status: CooperativeStatus,
    pub review_notes: Option<String>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Status counts over all cooperatives
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct CooperativeSummary {
    pub total: i64,
    pub approved: i64,
    pub pending: i64,
    pub rejected: i64,
    pub needs_resubmission: i64,
}

impl From<Cooperative> for CooperativeResponseDto {
    fn from(c: Cooperative) -> Self {
        Self {
            id: c.id,
            coop_id: c.coop_id,
            name: c.name,
            coop_type: c.coop_type,
            address: c.address,
            city: c.city,
            province: c.province,
            region: c.region,
            registration_number: c.registration_number,
            cda_registration_date: c.cda_registration_date,
            tin: c.tin,
            contact_person: c.contact_person,
            contact_email: c.contact_email,
            contact_phone: c.contact_phone,
            submitted_documents: c.submitted_documents,
            status: c.status,
            review_notes: c.review_notes,
            reviewed_by: c.reviewed_by,
            reviewed_at: c.reviewed_at,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::TypeInfo;

    #[test]
    fn test_status_maps_to_database_enum() {
        let info = <CooperativeStatus as sqlx::Type<sqlx::Postgres>>::type_info();
        assert_eq!(info.name(), "cooperative_status");
    }

    #[test]
    fn test_status_serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&CooperativeStatus::NeedsResubmission).unwrap(),
            "\"needs_resubmission\""
        );
        assert_eq!(
            serde_json::from_str::<CooperativeStatus>("\"approved\"").unwrap(),
            CooperativeStatus::Approved
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(CooperativeStatus::Pending.to_string(), "pending");
        assert_eq!(
            CooperativeStatus::NeedsResubmission.to_string(),
            "needs_resubmission"
        );
    }
}
