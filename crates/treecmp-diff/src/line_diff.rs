//! File-level diff: compare two files as multisets of normalized lines.
//!
//! Line order is irrelevant. A line that exists on one side only is reported
//! with its count; a line on both sides with different counts is reported
//! with both counts.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use treecmp_lines::{LineMultiset, LinePipeline};

use crate::error::{DiffError, DiffResult};

/// Substantive differences between two files' line multisets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineMultisetDiff {
    /// Lines present only in the first file, with their counts.
    pub only_in_first: BTreeMap<Vec<u8>, usize>,
    /// Lines present only in the second file, with their counts.
    pub only_in_second: BTreeMap<Vec<u8>, usize>,
    /// Lines present in both with different counts: `(first, second)`.
    pub count_mismatch: BTreeMap<Vec<u8>, (usize, usize)>,
}

impl LineMultisetDiff {
    /// Returns `true` if no line differs.
    pub fn is_empty(&self) -> bool {
        self.only_in_first.is_empty()
            && self.only_in_second.is_empty()
            && self.count_mismatch.is_empty()
    }

    /// Number of distinct lines that differ in any way.
    pub fn len(&self) -> usize {
        self.only_in_first.len() + self.only_in_second.len() + self.count_mismatch.len()
    }

    /// Lines of the first file not exactly matched by the second.
    pub fn unmatched_first(&self) -> usize {
        self.only_in_first.values().sum::<usize>()
            + self.count_mismatch.values().map(|(a, _)| a).sum::<usize>()
    }

    /// Lines of the second file not exactly matched by the first.
    pub fn unmatched_second(&self) -> usize {
        self.only_in_second.values().sum::<usize>()
            + self.count_mismatch.values().map(|(_, b)| b).sum::<usize>()
    }
}

/// Compare two multisets. `None` means they are equal.
pub fn diff_multisets(first: &LineMultiset, second: &LineMultiset) -> Option<LineMultisetDiff> {
    if first == second {
        return None;
    }

    let mut diff = LineMultisetDiff::default();
    let union: BTreeSet<&Vec<u8>> = first.lines().chain(second.lines()).collect();
    for line in union {
        match (first.count(line), second.count(line)) {
            (a, 0) => {
                diff.only_in_first.insert(line.clone(), a);
            }
            (0, b) => {
                diff.only_in_second.insert(line.clone(), b);
            }
            (a, b) if a != b => {
                diff.count_mismatch.insert(line.clone(), (a, b));
            }
            _ => {}
        }
    }
    Some(diff)
}

/// Compare two in-memory contents through `pipeline`.
///
/// Each side is classified on its own: a binary side contributes its whole
/// content as one line.
pub fn diff_contents(
    pipeline: &LinePipeline,
    first: &[u8],
    second: &[u8],
) -> Option<LineMultisetDiff> {
    diff_multisets(&pipeline.multiset(first), &pipeline.multiset(second))
}

/// Read and compare two files. `Ok(None)` means no substantive difference.
pub fn diff_files(
    pipeline: &LinePipeline,
    first: &Path,
    second: &Path,
) -> DiffResult<Option<LineMultisetDiff>> {
    let a = read(first)?;
    let b = read(second)?;
    Ok(diff_contents(pipeline, &a, &b))
}

fn read(path: &Path) -> DiffResult<Vec<u8>> {
    std::fs::read(path).map_err(|source| DiffError::Read {
        path: path.to_path_buf(),
        source,
    })
}
