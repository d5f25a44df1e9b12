//! Per-file fingerprinting.
//!
//! Text files hash their sorted, filtered, normalized lines, so a fingerprint
//! does not change when lines are reordered. Binary files hash their raw bytes.

use std::path::Path;

use tracing::debug;
use treecmp_crypto::ContentHasher;
use treecmp_lines::{ComparableLines, LinePipeline};
use treecmp_types::Fingerprint;

use crate::error::{IndexError, IndexResult};

/// Fingerprint already-extracted comparable lines.
///
/// Text lines are fed to the hash in sorted order, each preceded by its
/// byte length as a little-endian `u64`, so a split or joined line never
/// hashes like the original.
pub fn fingerprint_lines(lines: &ComparableLines<'_>) -> Fingerprint {
    match lines {
        ComparableLines::Binary(raw) => Fingerprint::binary(ContentHasher::BINARY.hash(raw)),
        ComparableLines::Text(_) => {
            let mut writer = ContentHasher::TEXT.writer();
            for line in lines.sorted() {
                writer
                    .update(&(line.len() as u64).to_le_bytes())
                    .update(line);
            }
            Fingerprint::text(writer.finalize())
        }
    }
}

/// Reduces files to fingerprints using a shared [`LinePipeline`].
#[derive(Clone, Debug, Default)]
pub struct Fingerprinter {
    pipeline: LinePipeline,
}

impl Fingerprinter {
    pub fn new(pipeline: LinePipeline) -> Self {
        Self { pipeline }
    }

    /// The pipeline used to classify and filter lines.
    pub fn pipeline(&self) -> &LinePipeline {
        &self.pipeline
    }

    /// Fingerprint in-memory content.
    pub fn fingerprint_bytes(&self, content: &[u8]) -> Fingerprint {
        fingerprint_lines(&self.pipeline.comparable_lines(content))
    }

    /// Read and fingerprint a file. Read failures are returned, not logged.
    pub fn fingerprint_file(&self, path: &Path) -> IndexResult<Fingerprint> {
        let content = std::fs::read(path).map_err(|source| IndexError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let fingerprint = self.fingerprint_bytes(&content);
        debug!(path = %path.display(), %fingerprint, bytes = content.len(), "fingerprinted file");
        Ok(fingerprint)
    }
}
