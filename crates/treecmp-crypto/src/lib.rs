//! Content hashing for treecmp.
//!
//! Provides domain-separated BLAKE3 hashing truncated to 128 bits. Digests
//! are used for equality checks only; nothing here is used for security.

pub mod hasher;

pub use hasher::{ContentHasher, DigestWriter};
