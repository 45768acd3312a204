//! HTML sanitizing for free-text fields leaving the API.

/// Strips scripts, event handlers and other unsafe markup from user supplied text.
///
/// Ammonia serializes text nodes with `&` escaped; it is turned back into a plain `&` since
/// the result goes out as JSON, not HTML.
pub fn clean_text(value: &str) -> String {
    ammonia::clean(value).replace("&amp;", "&")
}

pub fn clean_optional(value: Option<&str>) -> Option<String> {
    value.map(clean_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_script_tags() {
        let cleaned = clean_text("Naughty <script>alert(\"xss\");</script>trip");

        assert_eq!(cleaned, "Naughty trip");
    }

    #[test]
    fn drops_event_handler_attributes() {
        let cleaned = clean_text(r#"Bad image <img src="https://url.to.file.which/does-not.exist" onerror="alert(document.cookie);">"#);

        assert!(!cleaned.contains("onerror"));
        assert!(cleaned.contains("does-not.exist"));
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(clean_text("Sunny Mediterranean"), "Sunny Mediterranean");
        assert_eq!(clean_optional(None), None);
    }

    #[test]
    fn keeps_ampersand_unescaped() {
        assert_eq!(clean_text("Tom & Jerry"), "Tom & Jerry");
        assert_eq!(clean_text("Fish & <b>Chips</b>"), "Fish & <b>Chips</b>");
    }
}
