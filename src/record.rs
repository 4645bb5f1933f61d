//! Versioned single-string storage of a hashed password
//!
//! The record format is `saltyhash1:{hash}:{salt}`. The base64 digest never
//! contains `:`, so everything after the first separator is the salt,
//! verbatim, even if the salt alphabet itself contains `:`.

use crate::error::{ErrorCategory, ErrorKind, HashingError, Result};
use crate::hasher::HashedPassword;
use base64::{Engine, engine::general_purpose::STANDARD};
use std::fmt;
use std::str::FromStr;

/// Magic prefix for all saltyhash record versions
const MAGIC_PREFIX: &str = "saltyhash";

/// Version 1 magic marker
const V1_MAGIC: &str = "saltyhash1:";

const SEPARATOR: char = ':';

impl HashedPassword {
    pub fn to_record(&self) -> String {
        format!("{}{}{}{}", V1_MAGIC, self.hash(), SEPARATOR, self.salt())
    }

    /// Parse a record produced by [`to_record`](Self::to_record).
    pub fn from_record(record: &str) -> Result<Self> {
        if record.len() < V1_MAGIC.len() {
            return Err(HashingError::with_kind(
                ErrorCategory::User,
                ErrorKind::RecordInvalid,
                "input size smaller than magic marker; likely truncated",
            ));
        }

        if let Some(body) = record.strip_prefix(V1_MAGIC) {
            let (hash, salt) = body.split_once(SEPARATOR).ok_or_else(|| {
                HashingError::with_kind(
                    ErrorCategory::User,
                    ErrorKind::RecordDecode,
                    "record has no separator between hash and salt",
                )
            })?;
            STANDARD.decode(hash).map_err(|e| {
                HashingError::with_kind_and_source(
                    ErrorCategory::User,
                    ErrorKind::RecordDecode,
                    format!("base64 decoding of hash failed: {}", e),
                    e,
                )
            })?;
            Ok(HashedPassword::new(hash, salt))
        } else if record.starts_with(MAGIC_PREFIX) {
            Err(HashingError::with_kind(
                ErrorCategory::User,
                ErrorKind::RecordFromFuture,
                "input claims to be a saltyhash record, but not a version we support",
            ))
        } else {
            Err(HashingError::with_kind(
                ErrorCategory::User,
                ErrorKind::RecordInvalid,
                "input unrecognized as saltyhash record",
            ))
        }
    }
}

impl fmt::Display for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_record())
    }
}

impl FromStr for HashedPassword {
    type Err = HashingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_record(s)
    }
}
