//! Natural language processing components
//!
//! This module provides document normalization, the annotation seam,
//! stopword filtering, and candidate selection.

pub mod annotator;
pub mod filter;
pub mod normalizer;
pub mod stopwords;
