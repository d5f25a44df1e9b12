//! The [`Inventory`]: relative path -> fingerprint for one tree.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use treecmp_types::Fingerprint;

use crate::warning::ScanWarning;

/// Every readable regular file under one root, keyed by forward-slash
/// relative path.
///
/// Entries that could not be read are absent from the map and listed in
/// [`Inventory::warnings`] instead. Keys are lossy for non-UTF-8 names, so
/// the on-disk location of each walked file is kept alongside.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    root: PathBuf,
    entries: BTreeMap<String, Fingerprint>,
    locations: BTreeMap<String, PathBuf>,
    warnings: Vec<ScanWarning>,
}

impl Inventory {
    /// Create an empty inventory for `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: BTreeMap::new(),
            locations: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    /// The directory this inventory was built from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Record (or replace) the fingerprint of `path`. The file is assumed to
    /// live at the location spelled by `path` under the root.
    pub fn insert(&mut self, path: impl Into<String>, fingerprint: Fingerprint) {
        let path = path.into();
        self.locations.remove(&path);
        self.entries.insert(path, fingerprint);
    }

    /// Record the fingerprint of `path`, read from `location` on disk.
    pub fn insert_file(
        &mut self,
        path: impl Into<String>,
        location: impl Into<PathBuf>,
        fingerprint: Fingerprint,
    ) {
        let path = path.into();
        self.locations.insert(path.clone(), location.into());
        self.entries.insert(path, fingerprint);
    }

    pub fn push_warning(&mut self, warning: ScanWarning) {
        self.warnings.push(warning);
    }

    pub fn get(&self, path: &str) -> Option<&Fingerprint> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of fingerprinted files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Relative paths in sorted order.
    pub fn paths(&self) -> btree_map::Keys<'_, String, Fingerprint> {
        self.entries.keys()
    }

    /// `(path, fingerprint)` pairs in sorted path order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Fingerprint> {
        self.entries.iter()
    }

    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }

    /// On-disk location of a relative path under this inventory's root.
    pub fn resolve(&self, path: &str) -> PathBuf {
        match self.locations.get(path) {
            Some(location) => location.clone(),
            None => path.split('/').fold(self.root.clone(), |acc, part| acc.join(part)),
        }
    }
}
