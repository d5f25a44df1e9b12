//! Tree-level diff: classify every path of two inventories.
//!
//! Paths present in both trees are compared by fingerprint first. Only a
//! fingerprint mismatch re-reads the two files for a line multiset diff, and
//! only a non-empty multiset diff makes a path "modified".

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};
use treecmp_index::{ensure_directory, Fingerprinter, Inventory, InventoryBuilder, ScanWarning};
use treecmp_lines::{LinePipeline, RuleSet};

use crate::error::{DiffError, DiffResult};
use crate::line_diff::{diff_files, LineMultisetDiff};

/// The result of comparing two directory trees.
///
/// All collections iterate in sorted path order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeDiffResult {
    /// Paths only in the second tree.
    pub added: BTreeSet<String>,
    /// Paths only in the first tree.
    pub removed: BTreeSet<String>,
    /// Paths in both trees whose line multisets differ.
    pub modified: BTreeMap<String, LineMultisetDiff>,
    /// Paths in both trees with no substantive difference.
    pub common: BTreeSet<String>,
    /// Paths in both inventories that could not be re-read for comparison.
    pub skipped: BTreeSet<String>,
    /// Every per-entry problem met while scanning or comparing.
    pub warnings: Vec<ScanWarning>,
}

impl TreeDiffResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing was added, removed, or modified.
    pub fn is_identical(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    /// Number of classified paths across all categories.
    pub fn total_paths(&self) -> usize {
        self.added.len()
            + self.removed.len()
            + self.modified.len()
            + self.common.len()
            + self.skipped.len()
    }
}

/// Compares two inventories, re-reading files only when fingerprints differ.
#[derive(Clone, Debug, Default)]
pub struct TreeDiffer {
    pipeline: LinePipeline,
}

impl TreeDiffer {
    /// The pipeline must be the one the inventories were fingerprinted with.
    pub fn new(pipeline: LinePipeline) -> Self {
        Self { pipeline }
    }

    pub fn diff(&self, first: &Inventory, second: &Inventory) -> TreeDiffResult {
        let mut result = TreeDiffResult::new();
        result.warnings.extend_from_slice(first.warnings());
        result.warnings.extend_from_slice(second.warnings());

        for (path, fingerprint) in first.iter() {
            let Some(other) = second.get(path) else {
                result.removed.insert(path.clone());
                continue;
            };

            if fingerprint == other {
                result.common.insert(path.clone());
                continue;
            }

            match diff_files(&self.pipeline, &first.resolve(path), &second.resolve(path)) {
                Ok(Some(diff)) => {
                    debug!(%path, lines = diff.len(), "file modified");
                    result.modified.insert(path.clone(), diff);
                }
                Ok(None) => {
                    debug!(%path, "fingerprints differ but line multisets match");
                    result.common.insert(path.clone());
                }
                Err(e) => {
                    let location = match &e {
                        DiffError::Read { path, .. } => path.display().to_string(),
                        DiffError::Index(_) => path.clone(),
                    };
                    warn!(%path, error = %e, "skipping file that could not be compared");
                    result.warnings.push(ScanWarning::new(location, e.to_string()));
                    result.skipped.insert(path.clone());
                }
            }
        }

        for path in second.paths() {
            if !first.contains(path) {
                result.added.insert(path.clone());
            }
        }

        info!(
            added = result.added.len(),
            removed = result.removed.len(),
            modified = result.modified.len(),
            common = result.common.len(),
            warnings = result.warnings.len(),
            "trees compared"
        );
        result
    }
}

/// Compare the trees under `first` and `second` using `rules`.
///
/// Both roots are validated before either is scanned; a missing or
/// non-directory root is the only error. Unreadable entries are reported in
/// [`TreeDiffResult::warnings`].
pub fn compare_directories(
    first: &Path,
    second: &Path,
    rules: Arc<RuleSet>,
) -> DiffResult<TreeDiffResult> {
    ensure_directory(first)?;
    ensure_directory(second)?;

    let pipeline = LinePipeline::new(rules);
    let builder = InventoryBuilder::new(Fingerprinter::new(pipeline.clone()));
    let first_inventory = builder.build(first)?;
    let second_inventory = builder.build(second)?;

    Ok(TreeDiffer::new(pipeline).diff(&first_inventory, &second_inventory))
}
