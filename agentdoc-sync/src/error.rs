//! Error types for agentdoc-sync.

use std::path::PathBuf;

use thiserror::Error;

use agentdoc_core::CatalogError;

/// All errors that can arise from generating documents.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error loading the role catalog.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `--only` named a role that is not in the catalog.
    #[error("unknown role '{id}'")]
    UnknownRole { id: String },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
