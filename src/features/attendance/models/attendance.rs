use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::attendance::dtos::{AttendanceListItemDto, OfficerAttendanceDto};
use crate::shared::names::display_name;

/// Database model for an attendance record
#[derive(Debug, Clone, FromRow)]
pub struct Attendance {
    pub id: Uuid,
    pub officer_id: Uuid,
    pub training_id: Uuid,
    pub recorded_by: Option<Uuid>,
    pub method: String,
    pub check_in_time: Option<NaiveTime>,
    pub recorded_at: DateTime<Utc>,
}

/// Attendance joined with officer and training names, for the admin list
#[derive(Debug, Clone, FromRow)]
pub struct AttendanceWithContext {
    #[sqlx(flatten)]
    pub attendance: Attendance,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub training_title: String,
}

/// Attendance joined with training details, for an officer's history
#[derive(Debug, Clone, FromRow)]
pub struct OfficerAttendanceRow {
    #[sqlx(flatten)]
    pub attendance: Attendance,
    pub title: String,
    pub topic: Option<String>,
    pub date: NaiveDate,
    pub venue: String,
}

impl From<AttendanceWithContext> for AttendanceListItemDto {
    fn from(a: AttendanceWithContext) -> Self {
        Self {
            id: a.attendance.id,
            officer_id: a.attendance.officer_id,
            training_id: a.attendance.training_id,
            recorded_by: a.attendance.recorded_by,
            method: a.attendance.method,
            check_in_time: a.attendance.check_in_time,
            recorded_at: a.attendance.recorded_at,
            officer_name: display_name(&a.first_name, a.middle_name.as_deref(), &a.last_name),
            training_title: a.training_title,
        }
    }
}

impl From<OfficerAttendanceRow> for OfficerAttendanceDto {
    fn from(a: OfficerAttendanceRow) -> Self {
        Self {
            id: a.attendance.id,
            officer_id: a.attendance.officer_id,
            training_id: a.attendance.training_id,
            recorded_by: a.attendance.recorded_by,
            method: a.attendance.method,
            check_in_time: a.attendance.check_in_time,
            recorded_at: a.attendance.recorded_at,
            title: a.title,
            topic: a.topic,
            date: a.date,
            venue: a.venue,
        }
    }
}
