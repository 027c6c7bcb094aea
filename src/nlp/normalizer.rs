//! Document normalization applied before linguistic annotation.

/// Characters replaced by a single space before annotation.
const STRIPPED: [char; 11] = ['.', ',', '!', '-', '?', '/', '=', '<', '>', ')', '('];

/// Replace every occurrence of the fixed punctuation set with a space.
///
/// No case folding and no whitespace collapsing; the annotator sees the text
/// otherwise unchanged.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .map(|c| if STRIPPED.contains(&c) { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_set() {
        assert_eq!(normalize("The quick brown fox."), "The quick brown fox ");
        assert_eq!(normalize("a-b/c=d"), "a b c d");
        assert_eq!(normalize("(hello, world!)"), " hello  world  ");
    }

    #[test]
    fn test_preserves_case_and_whitespace() {
        assert_eq!(normalize("Hello   World"), "Hello   World");
        assert_eq!(normalize("UPPER lower"), "UPPER lower");
    }

    #[test]
    fn test_untouched_characters() {
        // Apostrophes, colons and semicolons are not in the stripped set.
        assert_eq!(normalize("don't; see: this"), "don't; see: this");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
    }
}
