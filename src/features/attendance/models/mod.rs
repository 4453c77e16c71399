mod attendance;

pub use attendance::{Attendance, AttendanceWithContext, OfficerAttendanceRow};
