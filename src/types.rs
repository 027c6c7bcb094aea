//! Core types shared across the extraction pipeline.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::nlp::stopwords::StopwordFilter;

/// Coarse part-of-speech tag, following the Universal POS tag set.
///
/// External annotators emit tag strings; [`PosTag::parse`] maps the common
/// spellings (spaCy / Universal Dependencies) onto this enum. Unknown tags
/// become [`PosTag::Other`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Number,
    Conjunction,
    Particle,
    Interjection,
    Punctuation,
    Symbol,
    Other,
}

impl PosTag {
    /// Parse a tag string from an external annotator.
    pub fn parse(tag: &str) -> Self {
        match tag.to_uppercase().as_str() {
            "NOUN" | "NN" | "NNS" => PosTag::Noun,
            "PROPN" | "NNP" | "NNPS" => PosTag::ProperNoun,
            "VERB" | "AUX" | "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => PosTag::Verb,
            "ADJ" | "JJ" | "JJR" | "JJS" => PosTag::Adjective,
            "ADV" | "RB" | "RBR" | "RBS" => PosTag::Adverb,
            "PRON" | "PRP" => PosTag::Pronoun,
            "DET" | "DT" => PosTag::Determiner,
            "ADP" | "IN" => PosTag::Adposition,
            "NUM" | "CD" => PosTag::Number,
            "CONJ" | "CCONJ" | "SCONJ" | "CC" => PosTag::Conjunction,
            "PART" | "RP" => PosTag::Particle,
            "INTJ" | "UH" => PosTag::Interjection,
            "PUNCT" => PosTag::Punctuation,
            "SYM" => PosTag::Symbol,
            _ => PosTag::Other,
        }
    }
}

/// A token as produced by the linguistic annotation collaborator.
///
/// Ephemeral: consumed during ingestion, never retained by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedToken {
    /// Surface text as it appeared in the (normalized) document.
    pub text: String,
    /// Canonical base form.
    pub lemma: String,
    /// Coarse part-of-speech tag.
    pub pos: PosTag,
    /// Whether the annotator classified this token as punctuation.
    pub is_punct: bool,
}

impl AnnotatedToken {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            is_punct: pos == PosTag::Punctuation,
        }
    }

    /// Mark the token as punctuation.
    pub fn punct(mut self) -> Self {
        self.is_punct = true;
        self
    }
}

/// Configuration for candidate selection.
///
/// Defaults to the standard English stopword list and no part-of-speech
/// restriction.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Stopword filter applied to both candidate and document tokens.
    pub stopwords: StopwordFilter,
    /// If set, candidates are restricted to these tags. Document tokens are
    /// never tag-restricted.
    pub allowed_tags: Option<FxHashSet<PosTag>>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            stopwords: StopwordFilter::english(),
            allowed_tags: None,
        }
    }
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stopword filter.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Restrict candidates to the given part-of-speech tags.
    pub fn with_allowed_tags(mut self, tags: impl IntoIterator<Item = PosTag>) -> Self {
        self.allowed_tags = Some(tags.into_iter().collect());
        self
    }
}

/// A ranked keyword: lemma plus the score assigned by a ranking method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    pub lemma: String,
    pub score: f64,
}

impl RankEntry {
    pub fn new(lemma: impl Into<String>, score: f64) -> Self {
        Self {
            lemma: lemma.into(),
            score,
        }
    }
}

/// Candidate and document counts observable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub num_candidates: usize,
    pub num_docs: usize,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Number of Keyword Candidates {}", self.num_candidates)?;
        write!(f, "Number of Documents {}", self.num_docs)
    }
}
