//! Graph construction and representation
//!
//! This module provides the mutable co-occurrence graph and its CSR
//! projection used by PageRank.

pub mod cooc;
pub mod csr;
