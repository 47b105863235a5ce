//! Small HTML helpers shared by the section renderers.

/// Gallery descriptions are cut to this many characters.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Escape text for use in element content and quoted attributes.
pub fn html_escape(s: &str) -> String {
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

/// Cut text to `max_chars` characters, appending `...` when something was removed.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((idx, _)) => format!("{}...", text[..idx].trim_end()),
    }
}

/// Render free text as escaped paragraphs, split on blank lines.
pub fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", html_escape(p).replace('\n', "<br>")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only allow link targets that cannot run script.
pub fn safe_url(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_lowercase();
    if lower.starts_with("javascript:") || lower.starts_with("data:") || lower.starts_with("vbscript:") {
        return None;
    }
    Some(html_escape(trimmed))
}

/// Wrap cards into grid rows of `columns` cards.
pub fn grid_rows(cards: &[String], columns: usize) -> String {
    cards
        .chunks(columns.max(1))
        .map(|row| format!("<div class=\"grid-row\">\n{}\n</div>", row.join("\n")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 100), "short");
        let long = "a".repeat(150);
        let cut = truncate_chars(&long, 100);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate_chars(&"b".repeat(100), 100), "b".repeat(100));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "é".repeat(120);
        let cut = truncate_chars(&text, 100);
        assert_eq!(cut, format!("{}...", "é".repeat(100)));
    }

    #[test]
    fn test_paragraphs() {
        let html = paragraphs("First line\nsame paragraph\n\nSecond <one>");
        assert_eq!(html, "<p>First line<br>same paragraph</p>\n<p>Second &lt;one&gt;</p>");
        assert_eq!(paragraphs("   "), "");
    }

    #[test]
    fn test_safe_url() {
        assert_eq!(safe_url("https://x.dev/?a=1&b=2").as_deref(), Some("https://x.dev/?a=1&amp;b=2"));
        assert_eq!(safe_url("JavaScript:alert(1)"), None);
        assert_eq!(safe_url(""), None);
    }

    #[test]
    fn test_grid_rows_chunks_by_three() {
        let cards: Vec<String> = (1..=7).map(|i| format!("<div>{i}</div>")).collect();
        let html = grid_rows(&cards, 3);
        assert_eq!(html.matches("class=\"grid-row\"").count(), 3);
        assert!(grid_rows(&[], 3).is_empty());
    }
}
