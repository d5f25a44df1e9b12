use std::fmt;

use serde::Serialize;

/// An entry left out of a result because it could not be read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScanWarning {
    /// The offending path, as reported by the walker or reader.
    pub path: String,
    /// The underlying cause.
    pub message: String,
}

impl ScanWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}
