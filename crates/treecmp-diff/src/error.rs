//! Error types for the diff crate.

use std::path::PathBuf;

use treecmp_index::IndexError;

/// Errors that can occur during diff operations.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A root could not be scanned.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// A file could not be re-read for line comparison.
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
