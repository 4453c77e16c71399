use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::members::dtos::{MemberResponseDto, MemberWithCooperativeDto};

/// Review status of a member application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "member_status", rename_all = "lowercase")]
pub enum MemberStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberStatus::Pending => write!(f, "pending"),
            MemberStatus::Approved => write!(f, "approved"),
            MemberStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Database model for a cooperative member
#[derive(Debug, Clone, FromRow)]
pub struct Member {
    pub id: Uuid,
    pub member_id: String,
    pub cooperative_id: Uuid,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub suffix: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub civil_status: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub occupation: Option<String>,
    pub tin: Option<String>,
    pub photo_url: Option<String>,
    pub documents: serde_json::Value,
    pub status: MemberStatus,
    pub review_notes: Option<String>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub membership_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Member joined with the owning cooperative's name
#[derive(Debug, Clone, FromRow)]
pub struct MemberWithCooperative {
    #[sqlx(flatten)]
    pub member: Member,
    pub cooperative_name: Option<String>,
}

/// Status counts over all members
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct MemberSummary {
    pub total: i64,
    pub approved: i64,
    pub pending: i64,
    pub rejected: i64,
}

impl From<Member> for MemberResponseDto {
    fn from(m: Member) -> Self {
        Self {
            id: m.id,
            member_id: m.member_id,
            cooperative_id: m.cooperative_id,
            first_name: m.first_name,
            middle_name: m.middle_name,
            last_name: m.last_name,
            suffix: m.suffix,
            date_of_birth: m.date_of_birth,
            gender: m.gender,
            civil_status: m.civil_status,
            address: m.address,
            city: m.city,
            province: m.province,
            email: m.email,
            phone: m.phone,
            occupation: m.occupation,
            tin: m.tin,
            photo_url: m.photo_url,
            documents: m.documents,
            status: m.status,
            review_notes: m.review_notes,
            reviewed_by: m.reviewed_by,
            reviewed_at: m.reviewed_at,
            membership_date: m.membership_date,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<MemberWithCooperative> for MemberWithCooperativeDto {
    fn from(m: MemberWithCooperative) -> Self {
        Self {
            member: m.member.into(),
            cooperative_name: m.cooperative_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::TypeInfo;

    #[test]
    fn test_status_maps_to_database_enum() {
        let info = <MemberStatus as sqlx::Type<sqlx::Postgres>>::type_info();
        assert_eq!(info.name(), "member_status");
    }

    #[test]
    fn test_status_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&MemberStatus::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(
            serde_json::from_str::<MemberStatus>("\"rejected\"").unwrap(),
            MemberStatus::Rejected
        );
    }
}
