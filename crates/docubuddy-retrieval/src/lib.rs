//! # DocuBuddy Retrieval
//!
//! Splits a flat policy document into `Title:`-delimited sections and picks
//! the one whose title line is most similar to the employee's question.
//! Deliberately simple: the corpus is a single small file that is re-read and
//! re-scored on every request, so there is no index and no cross-request
//! state.

pub mod chunker;
pub mod document;
pub mod similarity;

pub use chunker::{MATCH_THRESHOLD, QueryResult, Section, retrieve, split_sections};
pub use document::DocumentSource;
pub use similarity::{SequenceRatio, Similarity};
