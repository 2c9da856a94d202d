//! Password generation, hashing and verification.
//!
//! Generated credentials are temporary: they are mailed to the retailer once
//! and only their bcrypt hash survives the request. Hashing and verification
//! are CPU-bound (tens of milliseconds at [`HASH_COST`]) and run on the
//! blocking worker pool so they never occupy a request-serving thread.

use anyhow::{Context, Result};
use rand::{rngs::OsRng, RngCore};

/// bcrypt cost factor. One knob for the whole process, never per record.
pub const HASH_COST: u32 = 10;

const PASSWORD_BYTES: usize = 16;

/// Generate a random plaintext credential: 128 bits from the OS CSPRNG,
/// rendered as 32 lowercase hex characters.
#[must_use]
pub fn generate() -> String {
    let mut bytes = [0u8; PASSWORD_BYTES];
    OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Hash a plaintext password with bcrypt.
///
/// # Errors
/// Returns an error if the blocking task is cancelled or bcrypt fails.
pub async fn hash(plain: &str) -> Result<String> {
    let plain = plain.to_string();

    tokio::task::spawn_blocking(move || bcrypt::hash(plain, HASH_COST))
        .await
        .context("password hashing task failed")?
        .context("failed to hash password")
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// bcrypt compares the full digest in constant time; the result does not leak
/// where a mismatch occurred.
///
/// # Errors
/// Returns an error if the stored hash is not a valid bcrypt string.
pub async fn verify(plain: &str, hashed: &str) -> Result<bool> {
    let plain = plain.to_string();
    let hashed = hashed.to_string();

    tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hashed))
        .await
        .context("password verification task failed")?
        .context("failed to verify password")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shape() {
        let password = generate();
        assert_eq!(password.len(), 32);
        assert!(password.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_unique() {
        assert_ne!(generate(), generate());
    }

    #[tokio::test]
    async fn test_hash_and_verify() {
        let password = generate();
        let hashed = hash(&password).await.unwrap();

        assert_ne!(hashed, password);
        assert!(hashed.starts_with("$2"));
        assert!(verify(&password, &hashed).await.unwrap());
        assert!(!verify("not-the-password", &hashed).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_rejects_garbage_hash() {
        assert!(verify("whatever", "not-a-bcrypt-hash").await.is_err());
    }
}
