mod attendance_dto;

pub use attendance_dto::{
    AttendanceListItemDto, AttendanceResponseDto, OfficerAttendanceDto, RecordAttendanceDto,
};
