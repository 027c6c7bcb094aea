//! portfolio-rank: graph-based keyword extraction over document portfolios.
//!
//! Given a collection of raw text documents, this crate identifies keyword
//! candidates (filtered by stopwords and, optionally, part-of-speech), builds
//! an undirected co-occurrence graph over adjacent candidates, and ranks the
//! nodes by three scoring schemes:
//!
//! - **Harmonic**: harmonic mean of normalized degree, incident edge weight,
//!   and document coverage
//! - **PageRank**: weighted PageRank over the co-occurrence graph
//! - **RAKE ratio**: degree divided by raw frequency
//!
//! Linguistic annotation (tokenization, POS tagging, lemmatization) sits
//! behind the [`Annotator`] trait; a model-free [`BasicAnnotator`] is
//! included for plain English text.
//!
//! # Example
//!
//! ```
//! use portfolio_rank::{ExtractorConfig, KeywordPortfolio, StopwordFilter};
//! use portfolio_rank::nlp::annotator::BasicAnnotator;
//!
//! let config = ExtractorConfig::new()
//!     .with_stopwords(StopwordFilter::from_list(["the", "over"]));
//! let engine = KeywordPortfolio::with_config(
//!     &["The quick brown fox.", "The quick fox jumps."],
//!     config,
//!     BasicAnnotator::new(),
//! );
//!
//! assert_eq!(engine.num_docs(), 2);
//! let ranked = engine.rank_harmonic().unwrap();
//! assert_eq!(ranked.len(), engine.num_candidates());
//! ```

pub mod engine;
pub mod error;
pub mod freq;
pub mod graph;
pub mod ingest;
pub mod metrics;
pub mod nlp;
pub mod pagerank;
pub mod types;

pub use engine::KeywordPortfolio;
pub use error::{ExtractError, Result};
pub use freq::{Bigram, BigramModel, FreqDist};
pub use graph::cooc::CoocGraph;
pub use ingest::{DocumentIngestor, IngestResult};
pub use nlp::annotator::{Annotator, BasicAnnotator};
pub use nlp::stopwords::StopwordFilter;
pub use pagerank::{PageRank, PageRankResult};
pub use types::{AnnotatedToken, ExtractorConfig, PosTag, RankEntry, Summary};
