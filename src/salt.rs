//! Salt generation
//!
//! A salt is a sequence of characters drawn uniformly from a configured
//! alphabet. The randomness is an injected capability so tests can replay a
//! fixed index sequence instead of consuming OS entropy.

use crate::error::{ErrorCategory, ErrorKind, HashingError, Result};
use rand::Rng;
use rand::rngs::OsRng;
use std::sync::atomic::{AtomicUsize, Ordering};

/// The default salt alphabet: A-Z, a-z, 0-9.
pub const DEFAULT_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Source of uniformly distributed indices.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `[0, bound)`. `bound` is always non-zero.
    fn next_index(&self, bound: usize) -> usize;
}

/// Draws indices from the operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandomSource;

impl RandomSource for OsRandomSource {
    /// # Panics
    ///
    /// Panics if the operating system entropy source fails.
    fn next_index(&self, bound: usize) -> usize {
        OsRng.gen_range(0..bound)
    }
}

/// Replays a fixed list of indices (for testing)
///
/// Indices wrap around at the end of the list and are reduced modulo the
/// requested bound.
#[derive(Debug)]
pub struct SequenceRandomSource {
    indices: Vec<usize>,
    pos: AtomicUsize,
}

impl SequenceRandomSource {
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            pos: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceRandomSource {
    fn next_index(&self, bound: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let pos = self.pos.fetch_add(1, Ordering::Relaxed);
        self.indices[pos % self.indices.len()] % bound
    }
}

/// An ordered, non-empty set of characters salts are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaltAlphabet {
    chars: Vec<char>,
}

impl SaltAlphabet {
    pub fn new(alphabet: &str) -> Result<Self> {
        let chars: Vec<char> = alphabet.chars().collect();
        if chars.is_empty() {
            return Err(HashingError::with_kind(
                ErrorCategory::User,
                ErrorKind::EmptyAlphabet,
                "salt alphabet must contain at least one character",
            ));
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for SaltAlphabet {
    fn default() -> Self {
        Self {
            chars: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

/// Generate `length` salt characters, each sampled over the whole alphabet.
///
/// Indices a source returns outside `[0, alphabet.len())` are reduced modulo
/// the alphabet length.
pub fn generate_salt(alphabet: &SaltAlphabet, random: &dyn RandomSource, length: usize) -> String {
    let chars = alphabet.as_chars();
    (0..length)
        .map(|_| chars[random.next_index(chars.len()) % chars.len()])
        .collect()
}
