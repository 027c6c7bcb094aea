//! Error types for portfolio keyword extraction.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors surfaced by construction and ranking operations.
///
/// Filter-level rejections are never errors: a token that fails a filter rule
/// is simply not a candidate. These variants cover the cases where a ranking
/// computation is mathematically undefined or a caller names a node that is
/// not in the graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// Harmonic ranking needs at least one edge and one document; otherwise
    /// every normalization denominator is zero.
    #[error("degenerate graph: {reason}")]
    DegenerateGraph { reason: &'static str },

    /// RAKE ranking divides degree by raw frequency; a zero count would
    /// produce an infinite score.
    #[error("candidate {lemma:?} has zero frequency")]
    ZeroFrequency { lemma: String },

    /// Neighbor lookup or removal named a node absent from the graph.
    #[error("node {lemma:?} not found in graph")]
    NodeNotFound { lemma: String },
}

impl ExtractError {
    pub(crate) fn degenerate(reason: &'static str) -> Self {
        Self::DegenerateGraph { reason }
    }

    pub(crate) fn not_found(lemma: impl Into<String>) -> Self {
        Self::NodeNotFound {
            lemma: lemma.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExtractError::degenerate("graph has no edges");
        assert_eq!(err.to_string(), "degenerate graph: graph has no edges");

        let err = ExtractError::not_found("fox");
        assert_eq!(err.to_string(), "node \"fox\" not found in graph");

        let err = ExtractError::ZeroFrequency {
            lemma: "ghost".into(),
        };
        assert_eq!(err.to_string(), "candidate \"ghost\" has zero frequency");
    }
}
