//! Error types for the index crate.

use std::path::PathBuf;

/// Errors that can occur while fingerprinting files or building inventories.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// The root directory does not exist.
    #[error("directory {0:?} does not exist")]
    RootNotFound(PathBuf),

    /// The root exists but is not a directory.
    #[error("{0:?} is not a directory")]
    NotADirectory(PathBuf),

    /// A file or directory could not be read.
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IndexError {
    /// Whether this error concerns the root argument itself.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::RootNotFound(_) | Self::NotADirectory(_))
    }
}

/// Convenience alias for index results.
pub type IndexResult<T> = Result<T, IndexError>;
