//! String utilities for the domain layer.

/// True when the text is empty or only whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Collapse an argument to a one-line preview of at most `max_len` bytes.
///
/// Newlines and runs of whitespace become single spaces; truncation always
/// lands on a UTF-8 character boundary and is marked with `...`.
pub fn preview(s: &str, max_len: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.len() <= max_len {
        return flat;
    }

    let mut end = max_len.saturating_sub(3).min(flat.len());
    while end > 0 && !flat.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &flat[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \n\t "));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_preview_flattens_whitespace() {
        assert_eq!(preview("Schools\n  should\tadopt AI", 80), "Schools should adopt AI");
    }

    #[test]
    fn test_preview_truncates_ascii() {
        assert_eq!(preview("hello world", 8), "hello...");
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        // "é" is two bytes; cutting at byte 4 would split it
        assert_eq!(preview("caféteria", 7), "caf...");
    }
}
