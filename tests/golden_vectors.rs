//! Golden test vector validation
//!
//! Each vector pins a password, salt, the interleaved string and the
//! base64 SHA-512 digest of its UTF-8 bytes.

use saltyhash::digest::digest;
use saltyhash::interleave::interleave;
use saltyhash::salt::DEFAULT_ALPHABET;
use saltyhash::{HashedPassword, PasswordHasher, Sha512Algorithm, SequenceRandomSource};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GoldenVector {
    password: String,
    salt: String,
    interleaved: String,
    hash: String,
    comment: String,
}

fn load_golden_vectors() -> Vec<GoldenVector> {
    let json_data = include_str!("../testdata/golden-vectors.json");
    serde_json::from_str(json_data).expect("failed to parse golden vectors")
}

#[test]
fn test_interleave_matches_vectors() {
    for vector in load_golden_vectors() {
        let salted = interleave(&vector.password, &vector.salt).unwrap();
        assert_eq!(salted.as_str(), vector.interleaved, "{}", vector.comment);
    }
}

#[test]
fn test_digest_matches_vectors() {
    let algorithm = Sha512Algorithm::new();
    for vector in load_golden_vectors() {
        assert_eq!(
            digest(&algorithm, &vector.interleaved),
            vector.hash,
            "{}",
            vector.comment
        );
    }
}

#[test]
fn test_verify_accepts_vectors() {
    let hasher = PasswordHasher::new();
    for vector in load_golden_vectors() {
        assert!(
            hasher.verify_password(&vector.password, &vector.hash, &vector.salt),
            "{}",
            vector.comment
        );

        let stored = HashedPassword::new(vector.hash.as_str(), vector.salt.as_str());
        assert!(
            hasher.verify_record(&vector.password, &stored.to_record()),
            "{}",
            vector.comment
        );
    }
}

#[test]
fn test_verify_rejects_altered_vectors() {
    let hasher = PasswordHasher::new();
    for vector in load_golden_vectors() {
        let altered = format!("{}!", vector.password);
        assert!(
            !hasher.verify_password(&altered, &vector.hash, &vector.salt),
            "{}",
            vector.comment
        );
    }
}

/// Replaying each vector's salt through the random source reproduces the
/// exact stored hash.
#[test]
fn test_hash_password_reproduces_vectors() {
    let alphabet: Vec<char> = DEFAULT_ALPHABET.chars().collect();
    for vector in load_golden_vectors() {
        let indices: Vec<usize> = vector
            .salt
            .chars()
            .map(|c| {
                alphabet
                    .iter()
                    .position(|&a| a == c)
                    .expect("golden salts use the default alphabet")
            })
            .collect();

        let hasher = PasswordHasher::builder()
            .random_source(SequenceRandomSource::new(indices))
            .build()
            .unwrap();
        let hashed = hasher.hash_password(&vector.password);

        assert_eq!(hashed.salt(), vector.salt, "{}", vector.comment);
        assert_eq!(hashed.hash(), vector.hash, "{}", vector.comment);
    }
}
