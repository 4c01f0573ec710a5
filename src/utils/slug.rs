//! Problem identifier derivation

/// Derive a URL-friendly problem identifier from a title
///
/// Lowercases the title, strips everything that is not ASCII alphanumeric or
/// whitespace, then collapses whitespace runs to single hyphens. Returns an
/// empty string when the title contains no usable characters; callers must
/// reject that case.
pub fn slugify(title: &str) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(slugify("Two Sum!!"), "two-sum");
    }

    #[test]
    fn test_collapses_and_trims_whitespace() {
        assert_eq!(slugify("  A  B  "), "a-b");
        assert_eq!(slugify("Longest\tCommon   Subsequence"), "longest-common-subsequence");
    }

    #[test]
    fn test_keeps_digits() {
        assert_eq!(slugify("3Sum Closest"), "3sum-closest");
    }

    #[test]
    fn test_no_usable_characters_yields_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("   "), "");
    }
}
