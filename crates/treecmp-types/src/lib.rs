//! Foundation types for treecmp.
//!
//! Every other treecmp crate depends on `treecmp-types`. The types here carry
//! no I/O and no hashing logic of their own.
//!
//! # Key Types
//!
//! - [`Digest128`] -- 128-bit content digest, hex-encoded for display and serde
//! - [`Fingerprint`] -- A digest tagged with the [`ContentKind`] that produced it
//! - [`ContentKind`] -- Whether a file was fingerprinted as text or binary
//! - [`relative_path`] -- Root-relative, forward-slash path normalization

pub mod error;
pub mod fingerprint;
pub mod path;

pub use error::TypeError;
pub use fingerprint::{ContentKind, Digest128, Fingerprint};
pub use path::relative_path;
