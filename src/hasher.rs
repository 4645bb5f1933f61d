//! Password hashing and verification
//!
//! A [`PasswordHasher`] captures its hash algorithm, salt alphabet and random
//! source at construction and never mutates them, so one instance can be
//! shared freely between threads.

use crate::digest::{HashAlgorithm, Sha512Algorithm, digest};
use crate::error::Result;
use crate::interleave::interleave_unchecked;
use crate::salt::{OsRandomSource, RandomSource, SaltAlphabet, generate_salt};
use subtle::ConstantTimeEq;

/// A digest together with the salt that produced it.
///
/// Both fields must be stored together: the salt cannot be recovered from
/// the digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
    salt: String,
}

impl HashedPassword {
    /// Reassemble a stored pair, e.g. after loading it from two columns.
    pub fn new(hash: impl Into<String>, salt: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            salt: salt.into(),
        }
    }

    /// The base64 digest of the salted password.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn into_parts(self) -> (String, String) {
        (self.hash, self.salt)
    }
}

pub struct PasswordHasher {
    algorithm: Box<dyn HashAlgorithm>,
    alphabet: SaltAlphabet,
    random: Box<dyn RandomSource>,
}

impl PasswordHasher {
    /// SHA-512 over the alphanumeric alphabet, with salts from the OS CSPRNG.
    pub fn new() -> Self {
        Self {
            algorithm: Box::new(Sha512Algorithm::new()),
            alphabet: SaltAlphabet::default(),
            random: Box::new(OsRandomSource),
        }
    }

    pub fn with_algorithm(algorithm: impl HashAlgorithm + 'static) -> Self {
        Self {
            algorithm: Box::new(algorithm),
            ..Self::new()
        }
    }

    pub fn builder() -> PasswordHasherBuilder {
        PasswordHasherBuilder::default()
    }

    pub fn alphabet(&self) -> &SaltAlphabet {
        &self.alphabet
    }

    /// Hash `password` with a fresh salt of the same length.
    ///
    /// # Panics
    ///
    /// Panics if the random source cannot produce entropy.
    pub fn hash_password(&self, password: &str) -> HashedPassword {
        let salt = generate_salt(
            &self.alphabet,
            &*self.random,
            password.chars().count(),
        );
        let salted = interleave_unchecked(password, &salt);
        HashedPassword {
            hash: digest(&*self.algorithm, &salted),
            salt,
        }
    }

    /// Check `password` against a stored digest and salt.
    ///
    /// Any input that cannot match, including a salt whose length differs
    /// from the password's, yields `false`.
    pub fn verify_password(&self, password: &str, hash: &str, salt: &str) -> bool {
        if salt.chars().count() != password.chars().count() {
            return false;
        }
        let salted = interleave_unchecked(password, salt);
        let computed = digest(&*self.algorithm, &salted);
        computed.as_bytes().ct_eq(hash.as_bytes()).into()
    }

    /// Same as [`verify_password`](Self::verify_password) on a stored pair.
    pub fn verify(&self, password: &str, stored: &HashedPassword) -> bool {
        self.verify_password(password, &stored.hash, &stored.salt)
    }

    /// Parse a stored record and verify against it. Unparseable records
    /// never match.
    pub fn verify_record(&self, password: &str, record: &str) -> bool {
        match HashedPassword::from_record(record) {
            Ok(stored) => self.verify(password, &stored),
            Err(_) => false,
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Configures a [`PasswordHasher`]. Unset options take the defaults of
/// [`PasswordHasher::new`].
#[derive(Default)]
pub struct PasswordHasherBuilder {
    algorithm: Option<Box<dyn HashAlgorithm>>,
    alphabet: Option<String>,
    random: Option<Box<dyn RandomSource>>,
}

impl PasswordHasherBuilder {
    pub fn algorithm(mut self, algorithm: impl HashAlgorithm + 'static) -> Self {
        self.algorithm = Some(Box::new(algorithm));
        self
    }

    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    pub fn random_source(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Some(Box::new(random));
        self
    }

    /// Fails if the configured alphabet is empty.
    pub fn build(self) -> Result<PasswordHasher> {
        let alphabet = match self.alphabet {
            Some(alphabet) => SaltAlphabet::new(&alphabet)
                .map_err(|e| e.with_context("invalid password hasher configuration"))?,
            None => SaltAlphabet::default(),
        };
        Ok(PasswordHasher {
            algorithm: self
                .algorithm
                .unwrap_or_else(|| Box::new(Sha512Algorithm::new())),
            alphabet,
            random: self.random.unwrap_or_else(|| Box::new(OsRandomSource)),
        })
    }
}
