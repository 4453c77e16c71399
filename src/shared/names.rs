/// Compose an officer or member display name from its parts, skipping blank
/// middle names and collapsing surrounding whitespace.
pub fn display_name(first: &str, middle: Option<&str>, last: &str) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(3);

    let first = first.trim();
    if !first.is_empty() {
        parts.push(first);
    }
    if let Some(middle) = middle {
        let middle = middle.trim();
        if !middle.is_empty() {
            parts.push(middle);
        }
    }
    let last = last.trim();
    if !last.is_empty() {
        parts.push(last);
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_full() {
        assert_eq!(
            display_name("Maria", Some("Clara"), "Santos"),
            "Maria Clara Santos"
        );
    }

    #[test]
    fn test_display_name_no_middle() {
        assert_eq!(display_name("Juan", None, "Dela Cruz"), "Juan Dela Cruz");
        assert_eq!(display_name("Juan", Some(""), "Dela Cruz"), "Juan Dela Cruz");
        assert_eq!(
            display_name("Juan", Some("   "), "Dela Cruz"),
            "Juan Dela Cruz"
        );
    }

    #[test]
    fn test_display_name_trims_parts() {
        assert_eq!(display_name(" Ana ", Some(" B. "), " Reyes "), "Ana B. Reyes");
    }
}
