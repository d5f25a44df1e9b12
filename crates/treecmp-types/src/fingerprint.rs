use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Width of a [`Digest128`] in bytes.
pub const DIGEST_LEN: usize = 16;

/// A 128-bit content digest.
///
/// Digests are compared for equality only; the value has no structural
/// meaning. Serialized as a 32-character lowercase hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest128([u8; DIGEST_LEN]);

impl Digest128 {
    /// Create a digest from a pre-computed hash.
    pub const fn from_hash(hash: [u8; DIGEST_LEN]) -> Self {
        Self(hash)
    }

    /// The raw 16-byte digest.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != DIGEST_LEN {
            return Err(TypeError::InvalidLength {
                expected: DIGEST_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; DIGEST_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Digest128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest128({})", self.short_hex())
    }
}

impl fmt::Display for Digest128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; DIGEST_LEN]> for Digest128 {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Digest128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest128 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// How a file's content was interpreted when it was fingerprinted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// The whole file decoded as UTF-8; compared line by line.
    Text,
    /// The file failed UTF-8 decoding; compared as one opaque blob.
    Binary,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Binary => "binary",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file's comparable summary: a digest plus the mode that computed it.
///
/// Two fingerprints are equal only if both the kind and the digest match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint {
    pub kind: ContentKind,
    pub digest: Digest128,
}

impl Fingerprint {
    pub fn new(kind: ContentKind, digest: Digest128) -> Self {
        Self { kind, digest }
    }

    pub fn text(digest: Digest128) -> Self {
        Self::new(ContentKind::Text, digest)
    }

    pub fn binary(digest: Digest128) -> Self {
        Self::new(ContentKind::Binary, digest)
    }

    pub fn is_text(&self) -> bool {
        self.kind == ContentKind::Text
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn digest(b: u8) -> Digest128 {
        Digest128::from_hash([b; DIGEST_LEN])
    }

    #[test]
    fn hex_is_32_chars() {
        assert_eq!(digest(7).to_hex().len(), 32);
        assert_eq!(digest(7).short_hex().len(), 8);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        let err = Digest128::from_hex("abcd").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 16,
                actual: 2
            }
        );
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert!(matches!(
            Digest128::from_hex("zz"),
            Err(TypeError::InvalidHex(_))
        ));
    }

    #[test]
    fn kind_participates_in_equality() {
        assert_ne!(Fingerprint::text(digest(1)), Fingerprint::binary(digest(1)));
        assert_eq!(Fingerprint::text(digest(1)), Fingerprint::text(digest(1)));
    }

    #[test]
    fn display_includes_kind() {
        let fp = Fingerprint::binary(digest(0));
        assert_eq!(fp.to_string(), format!("binary:{}", "0".repeat(32)));
    }

    #[test]
    fn serde_uses_hex_string() {
        let fp = Fingerprint::text(digest(0xab));
        let json = serde_json::to_value(fp).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["digest"], "ab".repeat(16));
        let parsed: Fingerprint = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, fp);
    }

    proptest! {
        #[test]
        fn hex_parse_inverts_display(bytes in any::<[u8; 16]>()) {
            let d = Digest128::from_hash(bytes);
            prop_assert_eq!(Digest128::from_hex(&d.to_string()).unwrap(), d);
        }
    }
}
