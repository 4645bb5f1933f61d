//! Salted-password construction
//!
//! The salted password alternates characters: `p0 s0 p1 s1 ...`, one salt
//! character after each password character. Its length is twice the
//! password length.

use crate::error::{ErrorCategory, ErrorKind, HashingError, Result};
use zeroize::Zeroizing;

/// Interleave `password` with `salt`.
///
/// Requires at least as many salt characters as password characters; extra
/// salt characters are ignored. Lengths are counted in `char`s.
pub fn interleave(password: &str, salt: &str) -> Result<Zeroizing<String>> {
    let password_len = password.chars().count();
    let salt_len = salt.chars().count();
    if salt_len < password_len {
        return Err(HashingError::with_kind(
            ErrorCategory::User,
            ErrorKind::InvalidArgument,
            format!(
                "salt has {} characters but password has {}; salt must be at least as long",
                salt_len, password_len
            ),
        ));
    }
    Ok(interleave_unchecked(password, salt))
}

/// Pairs up characters until either side runs out. Callers guarantee the
/// salt is long enough.
pub(crate) fn interleave_unchecked(password: &str, salt: &str) -> Zeroizing<String> {
    let mut salted = Zeroizing::new(String::with_capacity(password.len() + salt.len()));
    for (p, s) in password.chars().zip(salt.chars()) {
        salted.push(p);
        salted.push(s);
    }
    salted
}
