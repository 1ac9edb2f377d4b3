use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string to a display width, appending "..." when shortened.
/// Width-aware so accented translations and wide glyphs line up in lists.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(1);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_no_truncation() {
        assert_eq!(truncate_to_width("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_with_truncation() {
        let result = truncate_to_width("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert!(result.width() <= 20);
    }

    #[test]
    fn test_truncate_exact_width() {
        assert_eq!(truncate_to_width("Exactly twenty chars", 20), "Exactly twenty chars");
    }

    #[test]
    fn test_truncate_empty() {
        assert_eq!(truncate_to_width("", 20), "");
    }

    #[test]
    fn test_truncate_accented_text() {
        // "liberté" is 7 columns wide even though it is 8 bytes.
        assert_eq!(truncate_to_width("liberté", 7), "liberté");
        assert_eq!(truncate_to_width("liberté surveillée", 10), "liberté...");
    }
}
