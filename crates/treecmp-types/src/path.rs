//! Root-relative path keys.
//!
//! Inventories are keyed by a path string that is independent of the host
//! OS: components are joined with `/` regardless of the platform separator.

use std::path::{Component, Path};

use crate::error::TypeError;

/// Compute the forward-slash-normalized path of `path` relative to `root`.
///
/// Non-UTF-8 file names are converted lossily.
pub fn relative_path(root: &Path, path: &Path) -> Result<String, TypeError> {
    let rel = path
        .strip_prefix(root)
        .map_err(|_| TypeError::OutsideRoot {
            path: path.display().to_string(),
            root: root.display().to_string(),
        })?;

    let parts: Vec<_> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();

    Ok(parts.join("/"))
}
