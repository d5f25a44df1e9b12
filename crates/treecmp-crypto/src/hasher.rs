use treecmp_types::fingerprint::DIGEST_LEN;
use treecmp_types::Digest128;

/// Domain-separated BLAKE3 content hasher producing 128-bit digests.
///
/// Each hasher carries a domain tag (e.g., `"treecmp-text-v1"`) that is
/// prepended to every hash computation, so a text fingerprint and a binary
/// fingerprint over identical bytes never coincide.
pub struct ContentHasher {
    domain: &'static str,
}

impl ContentHasher {
    /// Hasher for text-mode fingerprints (sorted normalized lines).
    pub const TEXT: Self = Self {
        domain: "treecmp-text-v1",
    };
    /// Hasher for binary-mode fingerprints (raw file bytes).
    pub const BINARY: Self = Self {
        domain: "treecmp-binary-v1",
    };
    /// Hasher for single lines shown in reports.
    pub const LINE: Self = Self {
        domain: "treecmp-line-v1",
    };

    /// Create a hasher with a custom domain tag.
    pub const fn new(domain: &'static str) -> Self {
        Self { domain }
    }

    /// Hash raw bytes with domain separation.
    pub fn hash(&self, data: &[u8]) -> Digest128 {
        let mut writer = self.writer();
        writer.update(data);
        writer.finalize()
    }

    /// Start an incremental hash. Feeding chunks through the writer yields
    /// the same digest as hashing their concatenation.
    pub fn writer(&self) -> DigestWriter {
        let mut inner = blake3::Hasher::new();
        inner.update(self.domain.as_bytes());
        inner.update(b":");
        DigestWriter { inner }
    }

    /// The domain tag used by this hasher.
    pub fn domain(&self) -> &str {
        self.domain
    }
}

/// Running hash started by [`ContentHasher::writer`].
pub struct DigestWriter {
    inner: blake3::Hasher,
}

impl DigestWriter {
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finish and truncate the BLAKE3 output to 128 bits.
    pub fn finalize(&self) -> Digest128 {
        let full = self.inner.finalize();
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&full.as_bytes()[..DIGEST_LEN]);
        Digest128::from_hash(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        let data = b"hello world";
        assert_eq!(ContentHasher::TEXT.hash(data), ContentHasher::TEXT.hash(data));
    }

    #[test]
    fn different_domains_produce_different_hashes() {
        let data = b"same content";
        let text = ContentHasher::TEXT.hash(data);
        let binary = ContentHasher::BINARY.hash(data);
        let line = ContentHasher::LINE.hash(data);
        assert_ne!(text, binary);
        assert_ne!(text, line);
        assert_ne!(binary, line);
    }

    #[test]
    fn incremental_matches_one_shot() {
        let mut writer = ContentHasher::TEXT.writer();
        writer.update(b"alpha").update(b"beta");
        assert_eq!(writer.finalize(), ContentHasher::TEXT.hash(b"alphabeta"));
    }

    #[test]
    fn custom_domain() {
        let hasher = ContentHasher::new("my-custom-domain-v1");
        assert_eq!(hasher.domain(), "my-custom-domain-v1");
        assert_ne!(hasher.hash(b"data"), ContentHasher::BINARY.hash(b"data"));
    }

    #[test]
    fn digest_is_blake3_prefix() {
        let mut expected = blake3::Hasher::new();
        expected.update(b"treecmp-binary-v1:payload");
        let full = expected.finalize();
        let digest = ContentHasher::BINARY.hash(b"payload");
        assert_eq!(&digest.as_bytes()[..], &full.as_bytes()[..16]);
    }
}
