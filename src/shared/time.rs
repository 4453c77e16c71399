use chrono::{DateTime, NaiveTime};

/// Parse a time-of-day string in either `HH:MM` or `HH:MM:SS` form
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

/// Coerce a check-in timestamp into a time-of-day value.
///
/// Accepts an RFC 3339 timestamp (the clock time is taken in the sender's
/// offset) or a bare time-of-day string. Unparseable input yields `None`, and
/// the attendance row is stored without a check-in time.
pub fn check_in_time_of_day(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.time());
    }

    parse_time_of_day(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!(
            parse_time_of_day("09:00"),
            NaiveTime::from_hms_opt(9, 0, 0)
        );
        assert_eq!(
            parse_time_of_day("14:30:15"),
            NaiveTime::from_hms_opt(14, 30, 15)
        );
        assert_eq!(parse_time_of_day("25:00"), None);
        assert_eq!(parse_time_of_day("soon"), None);
    }

    #[test]
    fn test_check_in_from_rfc3339() {
        assert_eq!(
            check_in_time_of_day("2024-06-01T08:45:30+08:00"),
            NaiveTime::from_hms_opt(8, 45, 30)
        );
        assert_eq!(
            check_in_time_of_day("2024-06-01T23:05:00Z"),
            NaiveTime::from_hms_opt(23, 5, 0)
        );
    }

    #[test]
    fn test_check_in_from_bare_time() {
        assert_eq!(
            check_in_time_of_day("07:15:00"),
            NaiveTime::from_hms_opt(7, 15, 0)
        );
    }

    #[test]
    fn test_check_in_unparseable_is_none() {
        assert_eq!(check_in_time_of_day(""), None);
        assert_eq!(check_in_time_of_day("yesterday"), None);
        assert_eq!(check_in_time_of_day("2024-13-99T99:99:99Z"), None);
    }
}
