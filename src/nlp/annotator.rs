//! Linguistic annotation seam.
//!
//! Tokenization, POS tagging, and lemmatization are external capabilities.
//! The engine only depends on the [`Annotator`] trait; callers wire in a real
//! annotator (spaCy bridge, UDPipe, an in-process tagger) at the boundary.
//!
//! A minimal [`BasicAnnotator`] is included so the crate works out of the box
//! for English-ish text: whitespace tokenization, lowercase lemmas with
//! plural stripping, no real POS tagging.

use crate::types::{AnnotatedToken, PosTag};

/// Produces annotated tokens from a normalized document.
pub trait Annotator {
    /// Annotate a normalized text string.
    ///
    /// Tokens must appear in document order. The engine never calls this
    /// concurrently; implementations may hold mutable caches behind interior
    /// mutability if they need them.
    fn annotate(&self, text: &str) -> Vec<AnnotatedToken>;
}

impl<A: Annotator + ?Sized> Annotator for &A {
    fn annotate(&self, text: &str) -> Vec<AnnotatedToken> {
        (**self).annotate(text)
    }
}

impl<A: Annotator + ?Sized> Annotator for Box<A> {
    fn annotate(&self, text: &str) -> Vec<AnnotatedToken> {
        (**self).annotate(text)
    }
}

/// Fallback annotator with no linguistic model.
///
/// Splits on Unicode whitespace, lowercases the surface form as the lemma,
/// and strips regular English plural suffixes. Every non-punctuation token is
/// tagged [`PosTag::Other`], so POS-restricted extraction requires a real
/// annotator.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicAnnotator;

impl BasicAnnotator {
    pub fn new() -> Self {
        Self
    }

    fn lemma_of(word: &str) -> String {
        let lower = word.to_lowercase();
        if let Some(stem) = lower.strip_suffix("ies") {
            if stem.len() >= 2 {
                return format!("{stem}y");
            }
        }
        if let Some(stem) = lower.strip_suffix("sses") {
            return format!("{stem}ss");
        }
        if lower.ends_with('s')
            && !lower.ends_with("ss")
            && !lower.ends_with("us")
            && !lower.ends_with("is")
            && lower.len() > 3
        {
            return lower[..lower.len() - 1].to_string();
        }
        lower
    }
}

impl Annotator for BasicAnnotator {
    fn annotate(&self, text: &str) -> Vec<AnnotatedToken> {
        text.split_whitespace()
            .map(|word| {
                let is_punct = word.chars().all(|c| !c.is_alphanumeric());
                let pos = if is_punct {
                    PosTag::Punctuation
                } else {
                    PosTag::Other
                };
                let lemma = if is_punct {
                    word.to_string()
                } else {
                    Self::lemma_of(word)
                };
                AnnotatedToken {
                    text: word.to_string(),
                    lemma,
                    pos,
                    is_punct,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_annotation() {
        let tokens = BasicAnnotator::new().annotate("The quick foxes");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].lemma, "the");
        assert_eq!(tokens[1].lemma, "quick");
        assert_eq!(tokens[2].lemma, "foxe"); // naive stemmer, not a real lemmatizer
        assert!(tokens.iter().all(|t| !t.is_punct));
    }

    #[test]
    fn test_plural_stripping() {
        assert_eq!(BasicAnnotator::lemma_of("jumps"), "jump");
        assert_eq!(BasicAnnotator::lemma_of("stories"), "story");
        assert_eq!(BasicAnnotator::lemma_of("classes"), "class");
        assert_eq!(BasicAnnotator::lemma_of("glass"), "glass");
        assert_eq!(BasicAnnotator::lemma_of("basis"), "basis");
        assert_eq!(BasicAnnotator::lemma_of("gas"), "gas");
    }

    #[test]
    fn test_punctuation_detection() {
        let tokens = BasicAnnotator::new().annotate("hello ; world");

        assert!(!tokens[0].is_punct);
        assert!(tokens[1].is_punct);
        assert_eq!(tokens[1].pos, PosTag::Punctuation);
        assert!(!tokens[2].is_punct);
    }

    #[test]
    fn test_empty_text() {
        assert!(BasicAnnotator::new().annotate("   ").is_empty());
    }

    #[test]
    fn test_trait_object() {
        let annotator: Box<dyn Annotator> = Box::new(BasicAnnotator::new());
        let tokens = annotator.annotate("one two");
        assert_eq!(tokens.len(), 2);
    }
}
