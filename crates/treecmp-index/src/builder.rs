//! Recursive inventory building.

use std::path::Path;

use tracing::{debug, info, warn};
use treecmp_types::relative_path;
use walkdir::WalkDir;

use crate::error::{IndexError, IndexResult};
use crate::fingerprint::Fingerprinter;
use crate::inventory::Inventory;
use crate::warning::ScanWarning;

/// Check that `root` exists and is a directory.
pub fn ensure_directory(root: &Path) -> IndexResult<()> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(IndexError::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(IndexError::RootNotFound(root.to_path_buf()))
        }
        Err(source) => Err(IndexError::Read {
            path: root.to_path_buf(),
            source,
        }),
    }
}

/// Walks a directory tree and fingerprints each regular file.
///
/// Symbolic links are neither followed nor recorded. Directories and special
/// files are not recorded. Unreadable entries are skipped with a warning.
#[derive(Clone, Debug, Default)]
pub struct InventoryBuilder {
    fingerprinter: Fingerprinter,
}

impl InventoryBuilder {
    pub fn new(fingerprinter: Fingerprinter) -> Self {
        Self { fingerprinter }
    }

    pub fn fingerprinter(&self) -> &Fingerprinter {
        &self.fingerprinter
    }

    /// Build the inventory of `root`.
    ///
    /// Only a missing or non-directory root is an error.
    pub fn build(&self, root: &Path) -> IndexResult<Inventory> {
        ensure_directory(root)?;
        let mut inventory = Inventory::new(root);

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| root.display().to_string());
                    warn!(%path, error = %e, "skipping unreadable entry");
                    inventory.push_warning(ScanWarning::new(path, e.to_string()));
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_symlink() {
                debug!(path = %entry.path().display(), "skipping symlink");
                continue;
            }
            if !file_type.is_file() {
                continue;
            }

            self.record_file(&mut inventory, root, entry.path());
        }

        info!(
            root = %root.display(),
            files = inventory.len(),
            warnings = inventory.warnings().len(),
            "inventory built"
        );
        Ok(inventory)
    }

    /// Fingerprint one regular file into `inventory`, or record why it was
    /// left out.
    fn record_file(&self, inventory: &mut Inventory, root: &Path, path: &Path) {
        let rel = match relative_path(root, path) {
            Ok(rel) => rel,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping entry");
                inventory.push_warning(ScanWarning::new(path.display().to_string(), e.to_string()));
                return;
            }
        };

        if inventory.contains(&rel) {
            warn!(path = %path.display(), key = %rel, "skipping entry with colliding name");
            inventory.push_warning(ScanWarning::new(
                path.display().to_string(),
                format!("name collides with another entry as {rel:?}"),
            ));
            return;
        }

        match self.fingerprinter.fingerprint_file(path) {
            Ok(fingerprint) => inventory.insert_file(rel, path, fingerprint),
            Err(e) => {
                let path = path.display().to_string();
                warn!(%path, error = %e, "skipping unreadable file");
                inventory.push_warning(ScanWarning::new(path, e.to_string()));
            }
        }
    }
}
