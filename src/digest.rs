//! Digest engine
//!
//! Salted passwords are encoded as UTF-8, hashed with the configured
//! algorithm and the binary digest is rendered as standard padded base64.
//! Hashing and verification both go through [`digest`], so the text
//! encoding can never differ between the two.

use base64::{Engine, engine::general_purpose::STANDARD};
use sha2::Digest;
use std::marker::PhantomData;

/// A cryptographic hash over a byte sequence.
///
/// Implementations must be stateless per call so one instance can serve
/// concurrent callers.
pub trait HashAlgorithm: Send + Sync {
    fn compute_digest(&self, data: &[u8]) -> Vec<u8>;
}

/// Adapts any RustCrypto [`Digest`] implementation.
pub struct RustCryptoDigest<D> {
    _digest: PhantomData<fn() -> D>,
}

impl<D> RustCryptoDigest<D> {
    pub fn new() -> Self {
        Self {
            _digest: PhantomData,
        }
    }
}

impl<D> Default for RustCryptoDigest<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest> HashAlgorithm for RustCryptoDigest<D> {
    fn compute_digest(&self, data: &[u8]) -> Vec<u8> {
        D::digest(data).to_vec()
    }
}

/// SHA-512, the default algorithm.
pub type Sha512Algorithm = RustCryptoDigest<sha2::Sha512>;

pub type Sha256Algorithm = RustCryptoDigest<sha2::Sha256>;

/// Digest `salted_password` and return the base64 text.
pub fn digest(algorithm: &dyn HashAlgorithm, salted_password: &str) -> String {
    let hash = algorithm.compute_digest(salted_password.as_bytes());
    STANDARD.encode(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns its input unchanged, exposing the exact bytes that get hashed.
    struct IdentityAlgorithm;

    impl HashAlgorithm for IdentityAlgorithm {
        fn compute_digest(&self, data: &[u8]) -> Vec<u8> {
            data.to_vec()
        }
    }

    #[test]
    fn test_sha512_empty_input() {
        assert_eq!(
            digest(&Sha512Algorithm::new(), ""),
            "z4PhNX7vuL3xVChQ1m2AB9Yg5AULVxXcg/SpIdNs6c5H0NE8XYXysP+DGNKHfuwvY7kxvUdBeoGlODJ6+SfaPg=="
        );
    }

    #[test]
    fn test_sha512_known_value() {
        assert_eq!(
            digest(&Sha512Algorithm::new(), "aXbYcZ"),
            "Aha/FpzDPy3HQsPTBnG+EVq4uWoXPLRGBiZP8c4RK+GBC/F4X/HOJ/V3DaTz5emNbNZTXLZKzKT+SgB6S90ZRw=="
        );
    }

    #[test]
    fn test_sha256_known_value() {
        assert_eq!(
            digest(&Sha256Algorithm::new(), "hello"),
            "LPJNul+wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ="
        );
    }

    #[test]
    fn test_sha512_output_is_88_chars() {
        let text = digest(&Sha512Algorithm::new(), "anything at all");
        assert_eq!(text.len(), 88);
        assert!(text.ends_with("=="));
    }

    #[test]
    fn test_text_is_encoded_as_utf8() {
        // "ä" is 0xC3 0xA4 in UTF-8.
        assert_eq!(digest(&IdentityAlgorithm, "ä"), "w6Q=");
        // One byte per ASCII character, not four.
        assert_eq!(digest(&IdentityAlgorithm, "ab"), "YWI=");
    }

    #[test]
    fn test_deterministic() {
        let algorithm = Sha512Algorithm::new();
        assert_eq!(
            digest(&algorithm, "pAäBsCsDwEöFrGdH"),
            digest(&algorithm, "pAäBsCsDwEöFrGdH")
        );
    }
}
