//! Tree inventory for treecmp.
//!
//! Walks a directory tree, fingerprints every regular file, and collects the
//! result into an [`Inventory`] keyed by root-relative path. Per-file failures
//! become [`ScanWarning`]s instead of aborting the walk.
//!
//! # Key Types
//!
//! - [`Fingerprinter`] -- Reduces one file to a [`treecmp_types::Fingerprint`]
//! - [`InventoryBuilder`] -- Recursive walker producing an [`Inventory`]
//! - [`Inventory`] -- Sorted relative path -> fingerprint map plus warnings
//! - [`ScanWarning`] -- A skipped entry and the reason it was skipped

pub mod builder;
pub mod error;
pub mod fingerprint;
pub mod inventory;
pub mod warning;

pub use builder::{ensure_directory, InventoryBuilder};
pub use error::{IndexError, IndexResult};
pub use fingerprint::{fingerprint_lines, Fingerprinter};
pub use inventory::Inventory;
pub use warning::ScanWarning;
