//! Credential normalization, policy checks and password hashing.

use crate::auth::{AuthError, AuthResult};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Trims and lowercases an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Returns whether a normalized email has a plausible `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_strong_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_CHARS
}

/// Argon2id PHC string for `password` with a fresh random salt.
pub fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Checks `password` against a stored PHC string.
pub fn verify_password(password: &str, hash: &str) -> AuthResult<()> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::{hash_password, is_strong_enough, is_valid_email, normalize_email, verify_password};
    use crate::auth::AuthError;

    #[test]
    fn email_is_normalized_and_validated() {
        let normalized = normalize_email("  Seer@Example.COM ");
        assert_eq!(normalized, "seer@example.com");
        assert!(is_valid_email(&normalized));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("two words@example.com"));
    }

    #[test]
    fn password_policy_requires_six_characters() {
        assert!(!is_strong_enough("12345"));
        assert!(is_strong_enough("123456"));
    }

    #[test]
    fn hashes_are_salted_argon2id_and_verify() {
        let first = hash_password("moonlight").unwrap();
        let second = hash_password("moonlight").unwrap();
        assert!(first.starts_with("$argon2id$"));
        assert_ne!(first, second);
        assert!(verify_password("moonlight", &first).is_ok());
        assert!(matches!(
            verify_password("sunlight", &first),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            verify_password("moonlight", "not-a-phc-string"),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
