//! Graph construction and representation
//!
//! Sentence similarity graphs are built incrementally with [`builder`] and
//! frozen into [`csr`] form for ranking.

pub mod builder;
pub mod csr;
