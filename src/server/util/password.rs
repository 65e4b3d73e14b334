use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

/// Hashes a password with argon2 and a fresh random salt.
///
/// # Arguments
/// - `password` - Plaintext password to hash
///
/// # Returns
/// - `Ok(String)` - PHC-format hash string for storage
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC hash string.
///
/// A malformed stored hash is treated as a verification failure rather than
/// an internal error so login responses stay uniform.
///
/// # Arguments
/// - `password` - Plaintext password from the login request
/// - `stored_hash` - PHC hash string from the database
///
/// # Returns
/// - `bool` - Whether the password matches
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
