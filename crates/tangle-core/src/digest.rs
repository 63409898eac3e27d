//! Pluggable one-way digest functions.
//!
//! The engine treats the digest as an injected capability: any deterministic
//! function with negligible collision probability works. The specific
//! algorithm is outside the engine's contract — swapping it changes every
//! output hash but none of the equality relations between them.
//!
//! Shipped implementations render as `<algo>:<lowercase hex>` so a hash is
//! self-describing about how it was produced and two digest algorithms can
//! never collide with each other.

use std::fmt::Write as _;

use sha2::Digest as _;

// ---------------------------------------------------------------------------
// Digest trait
// ---------------------------------------------------------------------------

/// A one-way digest over a byte pre-image.
///
/// Implementations must be pure and deterministic: same input bytes, same
/// output string, across calls and across processes.
pub trait Digest {
    /// Digest `input` to a hash string.
    fn digest(&self, input: &[u8]) -> String;
}

/// Any plain function over the pre-image is a digest. Handy for tests that
/// want a transparent "digest" to inspect the joined pre-image directly.
impl<F> Digest for F
where
    F: Fn(&[u8]) -> String,
{
    fn digest(&self, input: &[u8]) -> String {
        self(input)
    }
}

// ---------------------------------------------------------------------------
// Shipped implementations
// ---------------------------------------------------------------------------

/// BLAKE3 digest, rendered as `blake3:<64 hex chars>`. The default choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Digest;

impl Digest for Blake3Digest {
    fn digest(&self, input: &[u8]) -> String {
        format!("blake3:{}", blake3::hash(input).to_hex())
    }
}

/// SHA-256 digest, rendered as `sha256:<64 hex chars>`.
///
/// For callers whose surrounding tooling standardizes on SHA-2.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digest;

impl Digest for Sha256Digest {
    fn digest(&self, input: &[u8]) -> String {
        let hash = sha2::Sha256::digest(input);
        let mut out = String::with_capacity(7 + hash.len() * 2);
        out.push_str("sha256:");
        for byte in hash {
            // Writing to a String cannot fail.
            let _ = write!(out, "{byte:02x}");
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blake3_format_and_determinism() {
        let d = Blake3Digest;
        let a = d.digest(b"hello");
        let b = d.digest(b"hello");
        assert_eq!(a, b);
        assert!(a.starts_with("blake3:"), "got: {a}");
        assert_eq!(a.len(), "blake3:".len() + 64);
    }

    #[test]
    fn sha256_format_and_determinism() {
        let d = Sha256Digest;
        let a = d.digest(b"hello");
        assert_eq!(a, d.digest(b"hello"));
        assert!(a.starts_with("sha256:"), "got: {a}");
        assert_eq!(a.len(), "sha256:".len() + 64);
        // Known vector for SHA-256("hello").
        assert_eq!(
            a,
            "sha256:2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn algorithms_never_collide() {
        assert_ne!(Blake3Digest.digest(b"x"), Sha256Digest.digest(b"x"));
    }

    #[test]
    fn distinct_inputs_distinct_outputs() {
        let d = Blake3Digest;
        assert_ne!(d.digest(b"a"), d.digest(b"b"));
        assert_ne!(d.digest(b""), d.digest(b"a"));
    }

    #[test]
    fn closures_are_digests() {
        let identity = |input: &[u8]| String::from_utf8_lossy(input).into_owned();
        assert_eq!(identity.digest(b"pre-image"), "pre-image");
    }
}
