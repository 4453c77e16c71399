use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request DTO for recording attendance.
///
/// `check_in_time` accepts an RFC 3339 timestamp or a bare `HH:MM[:SS]` time;
/// unparseable values are stored as no check-in time rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordAttendanceDto {
    pub officer_id: Uuid,
    pub training_id: Uuid,
    pub recorded_by: Option<Uuid>,

    /// Defaults to `manual` when omitted
    #[validate(length(max = 50, message = "Method must not exceed 50 characters"))]
    pub method: Option<String>,

    pub check_in_time: Option<String>,
}

/// Response DTO for an attendance record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceResponseDto {
    pub id: Uuid,
    pub officer_id: Uuid,
    pub training_id: Uuid,
    pub recorded_by: Option<Uuid>,
    pub method: String,
    pub check_in_time: Option<NaiveTime>,
    pub recorded_at: DateTime<Utc>,
}

/// Attendance record with officer and training names
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceListItemDto {
    pub id: Uuid,
    pub officer_id: Uuid,
    pub training_id: Uuid,
    pub recorded_by: Option<Uuid>,
    pub method: String,
    pub check_in_time: Option<NaiveTime>,
    pub recorded_at: DateTime<Utc>,
    pub officer_name: String,
    pub training_title: String,
}

/// Attendance record with training details, for an officer's history
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OfficerAttendanceDto {
    pub id: Uuid,
    pub officer_id: Uuid,
    pub training_id: Uuid,
    pub recorded_by: Option<Uuid>,
    pub method: String,
    pub check_in_time: Option<NaiveTime>,
    pub recorded_at: DateTime<Utc>,
    pub title: String,
    pub topic: Option<String>,
    pub date: NaiveDate,
    pub venue: String,
}
