use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

const XML_ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use xlsxchart::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &XML_ENTITIES)
}

/// Returns true when `s` contains nothing that needs escaping.
#[inline]
pub fn is_xml_safe(s: &str) -> bool {
    !XML_ESCAPER.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_formula_with_quoted_sheet() {
        assert_eq!(
            escape_xml("'Q&A Data'!$A$1:$A$5"),
            "&apos;Q&amp;A Data&apos;!$A$1:$A$5"
        );
    }

    #[test]
    fn test_is_xml_safe() {
        assert!(is_xml_safe("Sheet1!$A$1:$A$5"));
        assert!(!is_xml_safe("Budget <$M>"));
    }
}
