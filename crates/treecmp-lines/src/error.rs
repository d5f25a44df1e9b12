//! Error types for the lines crate.

use std::path::PathBuf;

/// Errors raised while building or loading ignore rules.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A rule pattern is not a valid regular expression.
    #[error("invalid pattern for rule {name:?}: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    /// The rules file could not be read.
    #[error("failed to read rules file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rules file is not valid TOML for a rules configuration.
    #[error("invalid rules configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Convenience alias for rule results.
pub type RuleResult<T> = Result<T, RuleError>;
