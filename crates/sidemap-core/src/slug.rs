//! Doc-id (slug) utilities.
//!
//! Doc references in a sidebar manifest are slash-separated slugs like
//! `essentials/first_request` or `concepts/modifiers/family`. These
//! functions check well-formedness and generate slugs from free text.
//! Whether a slug resolves to an actual document is the content store's
//! concern, not ours.

/// Check whether a string is a well-formed doc slug.
///
/// A valid slug is non-empty, contains no whitespace, and has no leading,
/// trailing, or doubled `/` (every segment is non-empty).
///
/// # Examples
///
/// ```
/// use sidemap_core::slug::is_valid_slug;
///
/// assert!(is_valid_slug("whats_new"));
/// assert!(is_valid_slug("essentials/first_request"));
/// assert!(is_valid_slug("concepts/modifiers/family"));
///
/// assert!(!is_valid_slug(""));
/// assert!(!is_valid_slug("/leading"));
/// assert!(!is_valid_slug("trailing/"));
/// assert!(!is_valid_slug("doubled//segment"));
/// assert!(!is_valid_slug("has space"));
/// ```
pub fn is_valid_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.chars().any(char::is_whitespace) {
        return false;
    }
    slug.split('/').all(|segment| !segment.is_empty())
}

/// Normalize free text into a slug segment.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Collapses whitespace runs into single hyphens
///
/// Existing `/` separators are preserved, so multi-segment input stays
/// multi-segment.
///
/// # Examples
///
/// ```
/// use sidemap_core::slug::normalize_slug;
///
/// assert_eq!(normalize_slug("Getting Started"), "getting-started");
/// assert_eq!(normalize_slug("  Mixed   Case  "), "mixed-case");
/// assert_eq!(normalize_slug("Guides/Testing Basics"), "guides/testing-basics");
/// ```
pub fn normalize_slug(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .split('/')
        .map(|segment| segment.split_whitespace().collect::<Vec<&str>>().join("-"))
        .collect::<Vec<String>>()
        .join("/")
}

/// Iterate over the segments of a slug.
///
/// # Examples
///
/// ```
/// use sidemap_core::slug::slug_segments;
///
/// let segments: Vec<&str> = slug_segments("concepts/modifiers/family").collect();
/// assert_eq!(segments, vec!["concepts", "modifiers", "family"]);
/// ```
pub fn slug_segments(slug: &str) -> impl Iterator<Item = &str> {
    slug.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // is_valid_slug tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_valid_single_segment() {
        assert!(is_valid_slug("whats_new"));
        assert!(is_valid_slug("3.0_migration"));
    }

    #[test]
    fn test_valid_nested_segments() {
        assert!(is_valid_slug("introduction/why_riverpod"));
        assert!(is_valid_slug("concepts/modifiers/auto_dispose"));
    }

    #[test]
    fn test_invalid_empty() {
        assert!(!is_valid_slug(""));
    }

    #[test]
    fn test_invalid_leading_slash() {
        assert!(!is_valid_slug("/essentials/faq"));
    }

    #[test]
    fn test_invalid_trailing_slash() {
        assert!(!is_valid_slug("essentials/faq/"));
    }

    #[test]
    fn test_invalid_empty_segment() {
        assert!(!is_valid_slug("essentials//faq"));
    }

    #[test]
    fn test_invalid_whitespace() {
        assert!(!is_valid_slug("essentials/first request"));
        assert!(!is_valid_slug(" padded"));
        assert!(!is_valid_slug("tab\tseparated"));
    }

    // -------------------------------------------------------------------------
    // normalize_slug tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_normalize_simple() {
        assert_eq!(normalize_slug("faq"), "faq");
    }

    #[test]
    fn test_normalize_spaces() {
        assert_eq!(normalize_slug("Getting Started"), "getting-started");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_slug("  Mixed   Case  "), "mixed-case");
    }

    #[test]
    fn test_normalize_preserves_segments() {
        assert_eq!(
            normalize_slug("Guides/Testing Basics"),
            "guides/testing-basics"
        );
    }

    #[test]
    fn test_normalize_uppercase() {
        assert_eq!(normalize_slug("UPPERCASE"), "uppercase");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_slug(""), "");
        assert_eq!(normalize_slug("   "), "");
    }

    #[test]
    fn test_normalize_result_is_valid() {
        assert!(is_valid_slug(&normalize_slug("Getting Started")));
        assert!(is_valid_slug(&normalize_slug("Guides/Testing Basics")));
    }

    // -------------------------------------------------------------------------
    // slug_segments tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_segments_single() {
        let segments: Vec<&str> = slug_segments("faq").collect();
        assert_eq!(segments, vec!["faq"]);
    }

    #[test]
    fn test_segments_nested() {
        let segments: Vec<&str> = slug_segments("a/b/c").collect();
        assert_eq!(segments, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_segments_empty() {
        assert_eq!(slug_segments("").count(), 0);
    }
}
