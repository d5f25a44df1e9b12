//! Diff engine for treecmp.
//!
//! Classifies every path of two directory trees as added, removed, unchanged,
//! or modified, and explains modifications as line multiset differences.
//! Fingerprint equality is the fast path; only mismatched fingerprints are
//! re-read and diffed line by line.
//!
//! # Key Types
//!
//! - [`TreeDiffer`] / [`TreeDiffResult`] -- Tree-level classification
//! - [`LineMultisetDiff`] -- Per-file line presence and count differences
//! - [`compare_directories`] -- Validate roots, build inventories, diff them

pub mod error;
pub mod line_diff;
pub mod tree_diff;

pub use error::{DiffError, DiffResult};
pub use line_diff::{diff_contents, diff_files, diff_multisets, LineMultisetDiff};
pub use tree_diff::{compare_directories, TreeDiffResult, TreeDiffer};
