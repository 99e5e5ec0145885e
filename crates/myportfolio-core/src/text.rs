//! Text helpers shared by the page and sitemap renderers.

/// Escape the five HTML-significant characters.
///
/// The output is safe inside element content and inside single- or
/// double-quoted attribute values. It is also valid XML character data.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Collapse whitespace and cut `s` to at most `max_chars` characters.
///
/// Runs of whitespace become a single space and the ends are trimmed. When the
/// cleaned text is longer than `max_chars`, it keeps `max_chars - 1` characters
/// and appends `…`, so the result is exactly `max_chars` characters long.
pub fn summarize(s: &str, max_chars: usize) -> String {
    let clean = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if clean.chars().count() <= max_chars {
        return clean;
    }

    let mut out: String = clean.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- escape_html() tests --

    #[test]
    fn escape_all_five_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn escape_script_tag() {
        let escaped = escape_html("<script>alert(1)</script>");
        assert!(!escaped.contains('<'));
        assert_eq!(escaped, "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn escape_ampersand_first() {
        // Already-escaped input is escaped again, not passed through.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn escape_plain_and_unicode_untouched() {
        assert_eq!(escape_html("café ☕"), "café ☕");
        assert_eq!(escape_html(""), "");
    }

    // -- summarize() tests --

    #[test]
    fn summarize_collapses_whitespace() {
        assert_eq!(summarize("  hello \n\t  world  ", 160), "hello world");
    }

    #[test]
    fn summarize_exact_limit_unchanged() {
        let s = "a".repeat(160);
        assert_eq!(summarize(&s, 160), s);
    }

    #[test]
    fn summarize_over_limit_cut_with_ellipsis() {
        let s = "b".repeat(161);
        let out = summarize(&s, 160);
        assert_eq!(out.chars().count(), 160);
        assert!(out.ends_with('…'));
        assert_eq!(out.trim_end_matches('…'), "b".repeat(159));
    }

    #[test]
    fn summarize_counts_chars_not_bytes() {
        let s = "é".repeat(200);
        let out = summarize(&s, 160);
        assert_eq!(out.chars().count(), 160);
        assert_eq!(out.matches('…').count(), 1);
    }

    #[test]
    fn summarize_limit_applies_after_collapsing() {
        // 238 chars raw, 159 once the double spaces collapse.
        let s = vec!["x"; 80].join("  ");
        let out = summarize(&s, 160);
        assert_eq!(out, vec!["x"; 80].join(" "));
    }

    #[test]
    fn summarize_empty() {
        assert_eq!(summarize("   ", 160), "");
    }
}
