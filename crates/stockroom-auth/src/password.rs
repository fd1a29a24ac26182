//! Argon2id password hashing and verification.
//!
//! Both directions prepend the same optional pepper, so a directory built
//! with [`hash_password`] must be checked with the pepper it was built
//! with. Hashing uses the argon2 crate defaults (19 MiB, 2 iterations,
//! parallelism 1) and a random 16-byte salt.

use std::borrow::Cow;

use argon2::password_hash::{self, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

use crate::error::AuthError;

fn peppered<'a>(password: &'a str, pepper: Option<&str>) -> Cow<'a, str> {
    match pepper {
        Some(p) => Cow::Owned(format!("{p}{password}")),
        None => Cow::Borrowed(password),
    }
}

/// Hash `password` into a PHC string.
pub fn hash_password(password: &str, pepper: Option<&str>) -> Result<String, AuthError> {
    let salt_bytes: [u8; 16] = rand::random();
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AuthError::Crypto(format!("salt: {e}")))?;
    hash_with_salt(password, pepper, &salt)
}

fn hash_with_salt(
    password: &str,
    pepper: Option<&str>,
    salt: &SaltString,
) -> Result<String, AuthError> {
    Argon2::default()
        .hash_password(peppered(password, pepper).as_bytes(), salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Crypto(format!("hash: {e}")))
}

/// Check `password` against a stored PHC string.
///
/// A mismatch is `Ok(false)`; only an unparseable hash is an error.
pub fn verify_password(password: &str, hash: &str, pepper: Option<&str>) -> Result<bool, AuthError> {
    let stored =
        PasswordHash::new(hash).map_err(|e| AuthError::Crypto(format!("stored hash: {e}")))?;

    match Argon2::default().verify_password(peppered(password, pepper).as_bytes(), &stored) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Crypto(format!("verify: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_hash(password: &str, pepper: Option<&str>) -> String {
        let salt = SaltString::encode_b64(b"fixed-test-salt!").unwrap();
        hash_with_salt(password, pepper, &salt).unwrap()
    }

    #[test]
    fn correct_password_matches() {
        let hash = fixed_hash("keeper123", None);
        assert!(verify_password("keeper123", &hash, None).unwrap());
    }

    #[test]
    fn wrong_password_does_not_match() {
        let hash = fixed_hash("keeper123", None);
        assert!(!verify_password("keeper124", &hash, None).unwrap());
    }

    #[test]
    fn pepper_is_applied_on_both_sides() {
        let hash = hash_password("manager123", Some("pepper!")).unwrap();
        assert!(verify_password("manager123", &hash, Some("pepper!")).unwrap());
        assert!(!verify_password("manager123", &hash, None).unwrap());
    }

    #[test]
    fn random_salts_differ() {
        let a = hash_password("same", None).unwrap();
        let b = hash_password("same", None).unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2id$"));
    }

    #[test]
    fn malformed_hash_returns_error() {
        assert!(matches!(
            verify_password("pw", "not-a-hash", None),
            Err(AuthError::Crypto(_))
        ));
    }
}
