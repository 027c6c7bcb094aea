//! Candidate and document token filters.
//!
//! Two tiers of filtering over annotated tokens:
//!
//! - the *candidate* filter selects graph nodes (optionally restricted by
//!   part-of-speech),
//! - the *document token* filter selects the general token stream used for
//!   frequency counts and bigram construction (a superset of candidates).
//!
//! A token failing any rule is an ordinary rejection, never an error; a bad
//! token can never abort ingestion.

use crate::types::{AnnotatedToken, ExtractorConfig};

/// Applies the selection rules from an [`ExtractorConfig`].
#[derive(Debug, Clone)]
pub struct TokenFilter<'a> {
    config: &'a ExtractorConfig,
}

impl<'a> TokenFilter<'a> {
    pub fn new(config: &'a ExtractorConfig) -> Self {
        Self { config }
    }

    /// Rules shared by both tiers: no punctuation, lemma longer than one
    /// character, lemma not a stopword.
    fn passes_base_rules(&self, token: &AnnotatedToken) -> bool {
        !token.is_punct
            && token.lemma.chars().count() > 1
            && !self.config.stopwords.is_stopword(&token.lemma)
    }

    /// Evaluate a token as a keyword candidate.
    ///
    /// Returns the lemma on acceptance. When the config restricts tags, a
    /// token with a tag outside the allowed set is rejected.
    pub fn candidate<'t>(&self, token: &'t AnnotatedToken) -> Option<&'t str> {
        if !self.passes_base_rules(token) {
            return None;
        }
        if let Some(tags) = &self.config.allowed_tags {
            if !tags.contains(&token.pos) {
                return None;
            }
        }
        Some(&token.lemma)
    }

    /// Evaluate a token for the general document token stream.
    ///
    /// Same rules as [`TokenFilter::candidate`] minus the tag restriction.
    pub fn doc_token<'t>(&self, token: &'t AnnotatedToken) -> Option<&'t str> {
        if self.passes_base_rules(token) {
            Some(&token.lemma)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::types::PosTag;

    fn config_with_stopwords(words: &[&str]) -> ExtractorConfig {
        ExtractorConfig::new().with_stopwords(StopwordFilter::from_list(words))
    }

    #[test]
    fn test_rejects_punctuation() {
        let cfg = config_with_stopwords(&[]);
        let filter = TokenFilter::new(&cfg);
        let tok = AnnotatedToken::new(";", ";", PosTag::Punctuation);

        assert_eq!(filter.candidate(&tok), None);
        assert_eq!(filter.doc_token(&tok), None);
    }

    #[test]
    fn test_rejects_short_lemmas() {
        let cfg = config_with_stopwords(&[]);
        let filter = TokenFilter::new(&cfg);

        let one_char = AnnotatedToken::new("a", "a", PosTag::Other);
        assert_eq!(filter.candidate(&one_char), None);
        assert_eq!(filter.doc_token(&one_char), None);

        let two_chars = AnnotatedToken::new("ox", "ox", PosTag::Other);
        assert_eq!(filter.candidate(&two_chars), Some("ox"));
    }

    #[test]
    fn test_rejects_stopwords_via_lemma() {
        let cfg = config_with_stopwords(&["the"]);
        let filter = TokenFilter::new(&cfg);

        // Surface form differs; the lemma is what gets tested.
        let tok = AnnotatedToken::new("THE", "the", PosTag::Determiner);
        assert_eq!(filter.candidate(&tok), None);
        assert_eq!(filter.doc_token(&tok), None);
    }

    #[test]
    fn test_tag_restriction_only_affects_candidates() {
        let cfg = config_with_stopwords(&[]).with_allowed_tags([PosTag::Noun]);
        let filter = TokenFilter::new(&cfg);

        let verb = AnnotatedToken::new("jumps", "jump", PosTag::Verb);
        assert_eq!(filter.candidate(&verb), None);
        assert_eq!(filter.doc_token(&verb), Some("jump"));

        let noun = AnnotatedToken::new("fox", "fox", PosTag::Noun);
        assert_eq!(filter.candidate(&noun), Some("fox"));
    }

    #[test]
    fn test_no_tag_restriction_accepts_any_pos() {
        let cfg = config_with_stopwords(&[]);
        let filter = TokenFilter::new(&cfg);

        let verb = AnnotatedToken::new("jumps", "jump", PosTag::Verb);
        assert_eq!(filter.candidate(&verb), Some("jump"));
    }

    #[test]
    fn test_multibyte_length_counts_chars() {
        let cfg = config_with_stopwords(&[]);
        let filter = TokenFilter::new(&cfg);

        // Two chars, four bytes: must pass the length rule.
        let tok = AnnotatedToken::new("héé", "éé", PosTag::Other);
        assert_eq!(filter.doc_token(&tok), Some("éé"));
    }
}
