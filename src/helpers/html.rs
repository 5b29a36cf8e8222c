//! HTML helper functions

/// Escape HTML special characters, for both text and attribute values
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape an optional value, rendering absence as an empty string
pub fn escape_or_empty(value: Option<&str>) -> String {
    value.map(html_escape).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_or_empty() {
        assert_eq!(escape_or_empty(None), "");
        assert_eq!(escape_or_empty(Some("a<b")), "a&lt;b");
    }
}
