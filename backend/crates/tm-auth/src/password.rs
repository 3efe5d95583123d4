//! Argon2id password hashing with a random salt per hash.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::password_hash::{PasswordHash, SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use error_location::ErrorLocation;

/// Well-formed hash with the default cost parameters that no known password
/// produces. Verified against when a login names an unknown account.
pub const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$lcekbbnIcpGKpIc5FT2BDg$lebf6oXEpgHsHeMN4HzMOe1WQENwUP8dYkO5kYttM60";

/// Hash a password into a PHC string
#[track_caller]
pub fn hash_password(plain: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// False for a wrong password and for a hash that cannot be parsed
pub fn verify_password(plain: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}

/// Spend the cost of one verify, so a missing account takes as long to
/// reject as a wrong password
pub fn verify_dummy(plain: &str) {
    let _ = verify_password(plain, DUMMY_HASH);
}
