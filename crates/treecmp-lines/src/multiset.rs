use std::collections::btree_map;
use std::collections::BTreeMap;

/// Normalized line -> number of occurrences.
///
/// Backed by a `BTreeMap`, so iteration is in byte-lexicographic line order.
/// Counts are always non-zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineMultiset {
    counts: BTreeMap<Vec<u8>, usize>,
}

impl LineMultiset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `line`.
    pub fn insert(&mut self, line: impl Into<Vec<u8>>) {
        *self.counts.entry(line.into()).or_insert(0) += 1;
    }

    /// Occurrences of `line` (zero if absent).
    pub fn count(&self, line: &[u8]) -> usize {
        self.counts.get(line).copied().unwrap_or(0)
    }

    pub fn contains(&self, line: &[u8]) -> bool {
        self.counts.contains_key(line)
    }

    /// Number of distinct lines.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of lines, counting repeats.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Vec<u8>, usize> {
        self.counts.iter()
    }

    pub fn lines(&self) -> btree_map::Keys<'_, Vec<u8>, usize> {
        self.counts.keys()
    }
}

impl<L: Into<Vec<u8>>> FromIterator<L> for LineMultiset {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        let mut set = Self::new();
        for line in iter {
            set.insert(line);
        }
        set
    }
}

impl<'a> IntoIterator for &'a LineMultiset {
    type Item = (&'a Vec<u8>, &'a usize);
    type IntoIter = btree_map::Iter<'a, Vec<u8>, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
