use chrono::Utc;

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Encode a non-negative integer in uppercase base36
fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::new();
    while value > 0 {
        buf.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();

    // Digits are ASCII
    String::from_utf8(buf).unwrap()
}

/// Generate a human-readable record code such as `TRN-MBCDEF12` from the
/// current unix timestamp in milliseconds.
///
/// Codes generated within the same millisecond collide; the unique constraint
/// on the code column is what ultimately rejects a duplicate.
pub fn generate_code(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    format!("{}-{}", prefix, to_base36(millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base36_zero() {
        assert_eq!(to_base36(0), "0");
    }

    #[test]
    fn test_base36_known_values() {
        assert_eq!(to_base36(35), "Z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1234567890), "KF12OI");
    }

    #[test]
    fn test_generate_code_format() {
        let code = generate_code("TRN");
        assert!(code.starts_with("TRN-"));
        let suffix = &code["TRN-".len()..];
        assert!(!suffix.is_empty());
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_generate_code_matches_validation_regex() {
        for prefix in ["TRN", "COOP", "MBR"] {
            let code = generate_code(prefix);
            assert!(crate::shared::validation::RECORD_CODE_REGEX.is_match(&code));
        }
    }
}
