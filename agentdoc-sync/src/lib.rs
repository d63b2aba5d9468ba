//! # agentdoc-sync
//!
//! Writes rendered role documents to disk.
//!
//! Call [`pipeline::run`] to regenerate every document into an output
//! directory, or [`diff_catalog`] to preview what a run would change.

pub mod diff;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use diff::{diff_catalog, FileDiff};
pub use error::SyncError;
pub use pipeline::{GenerateOptions, GenerateReport};
pub use writer::{write_document, WriteResult};
