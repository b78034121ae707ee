use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::OpsError;

/// Hash a plaintext password into an argon2 PHC string with a fresh salt.
pub fn hash_password(plain: &str) -> Result<String, OpsError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)?
        .to_string();
    Ok(hash)
}

/// Check a plaintext password against a stored PHC string. Malformed stored
/// hashes count as a mismatch rather than an error.
pub fn verify_password(plain: &str, phc: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(phc) else {
        return false;
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("adminpass").unwrap();
        assert!(verify_password("adminpass", &hash));
        assert!(!verify_password("wrongpass", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("adminpass").unwrap();
        let b = hash_password("adminpass").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_stored_hash_is_a_mismatch() {
        assert!(!verify_password("adminpass", "not-a-phc-string"));
        assert!(!verify_password("adminpass", ""));
    }
}
