use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for record codes (training/cooperative/member codes)
    /// Uppercase alphabetic prefix, hyphen, base36 suffix
    /// - Valid: "TRN-MBCDEF12", "COOP-1A2B3C", "MBR-0"
    /// - Invalid: "trn-abc", "TRN_", "TRN-", "-ABC"
    pub static ref RECORD_CODE_REGEX: Regex =
        Regex::new(r"^[A-Z]{2,8}-[0-9A-Z]+$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_code_regex_valid() {
        assert!(RECORD_CODE_REGEX.is_match("TRN-MBCDEF12"));
        assert!(RECORD_CODE_REGEX.is_match("COOP-1A2B3C"));
        assert!(RECORD_CODE_REGEX.is_match("MBR-0"));
    }

    #[test]
    fn test_record_code_regex_invalid() {
        assert!(!RECORD_CODE_REGEX.is_match("trn-abc")); // lowercase
        assert!(!RECORD_CODE_REGEX.is_match("TRN-")); // empty suffix
        assert!(!RECORD_CODE_REGEX.is_match("-ABC")); // missing prefix
        assert!(!RECORD_CODE_REGEX.is_match("TRN_ABC")); // underscore
        assert!(!RECORD_CODE_REGEX.is_match("")); // empty
    }
}
