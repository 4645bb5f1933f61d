//! Saltyhash - salted password digests
//!
//! A password is interleaved character by character with a random salt of
//! the same length, the result is hashed (SHA-512 unless another
//! [`HashAlgorithm`] is injected) and the digest is returned as base64
//! together with the salt. Verification repeats the pipeline with the
//! stored salt and compares digests.
//!
//! This is a single-pass digest, not a key-derivation function: there is
//! no iteration count or memory hardness.

#![forbid(unsafe_code)]

pub mod digest;
pub mod error;
pub mod hasher;
pub mod interleave;
pub mod record;
pub mod salt;

pub use digest::{HashAlgorithm, RustCryptoDigest, Sha256Algorithm, Sha512Algorithm};
pub use error::{ErrorCategory, ErrorKind, HashingError, Result};
pub use hasher::{HashedPassword, PasswordHasher, PasswordHasherBuilder};
pub use salt::{OsRandomSource, RandomSource, SaltAlphabet, SequenceRandomSource};
