use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::compliance::dtos::{
    ComplianceResponseDto, ComplianceWithCooperativeDto,
};

/// Status of a compliance requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "compliance_status", rename_all = "snake_case")]
pub enum ComplianceStatus {
    Pending,
    Submitted,
    Compliant,
    NonCompliant,
    Overdue,
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceStatus::Pending => write!(f, "pending"),
            ComplianceStatus::Submitted => write!(f, "submitted"),
            ComplianceStatus::Compliant => write!(f, "compliant"),
            ComplianceStatus::NonCompliant => write!(f, "non_compliant"),
            ComplianceStatus::Overdue => write!(f, "overdue"),
        }
    }
}

/// Database model for a compliance record
#[derive(Debug, Clone, FromRow)]
pub struct ComplianceRecord {
    pub id: Uuid,
    pub cooperative_id: Uuid,
    pub requirement_type: Option<String>,
    pub requirement_name: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub submitted_date: Option<NaiveDate>,
    pub year: i32,
    pub documents: serde_json::Value,
    pub status: ComplianceStatus,
    pub reviewer_notes: Option<String>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compliance record joined with the cooperative's name and code
#[derive(Debug, Clone, FromRow)]
pub struct ComplianceWithCooperative {
    #[sqlx(flatten)]
    pub record: ComplianceRecord,
    pub cooperative_name: Option<String>,
    pub coop_id: Option<String>,
}

/// Status counts over all compliance records.
///
/// `past_due` counts records past their due date that are neither compliant
/// nor submitted, regardless of whether they have been marked overdue yet.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct ComplianceSummary {
    pub total: i64,
    pub compliant: i64,
    pub pending: i64,
    pub non_compliant: i64,
    pub overdue: i64,
    pub past_due: i64,
}

impl From<ComplianceRecord> for ComplianceResponseDto {
    fn from(r: ComplianceRecord) -> Self {
        Self {
            id: r.id,
            cooperative_id: r.cooperative_id,
            requirement_type: r.requirement_type,
            requirement_name: r.requirement_name,
            description: r.description,
            due_date: r.due_date,
            submitted_date: r.submitted_date,
            year: r.year,
            documents: r.documents,
            status: r.status,
            reviewer_notes: r.reviewer_notes,
            reviewed_by: r.reviewed_by,
            reviewed_at: r.reviewed_at,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<ComplianceWithCooperative> for ComplianceWithCooperativeDto {
    fn from(r: ComplianceWithCooperative) -> Self {
        Self {
            record: r.record.into(),
            cooperative_name: r.cooperative_name,
            coop_id: r.coop_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::TypeInfo;

    #[test]
    fn test_status_maps_to_database_enum() {
        let info = <ComplianceStatus as sqlx::Type<sqlx::Postgres>>::type_info();
        assert_eq!(info.name(), "compliance_status");
    }

    #[test]
    fn test_status_serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&ComplianceStatus::NonCompliant).unwrap(),
            "\"non_compliant\""
        );
        assert_eq!(
            serde_json::from_str::<ComplianceStatus>("\"overdue\"").unwrap(),
            ComplianceStatus::Overdue
        );
    }
}
