use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use std::sync::OnceLock;

const MEMORY_KIB: u32 = 64 * 1024;
const ITERATIONS: u32 = 3;
const LANES: u32 = 4;

/// Argon2id hashing for account passwords.
pub struct PasswordManager;

static ENGINE: OnceLock<Argon2> = OnceLock::new();
static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

impl PasswordManager {
    fn engine() -> &'static Argon2<'static> {
        ENGINE.get_or_init(|| {
            let params = Params::new(MEMORY_KIB, ITERATIONS, LANES, None).unwrap_or_default();
            Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        })
    }

    /// Returns a PHC string suitable for the `users.password_hash` column.
    pub fn hash_password(password: &str) -> Result<String, Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::engine().hash_password(password.as_bytes(), &salt)?;

        Ok(hash.to_string())
    }

    /// `Ok(false)` for a wrong password, `Err` only when `stored_hash` is unusable.
    pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
        let parsed_hash = PasswordHash::new(stored_hash)?;

        match Self::engine().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Spends the cost of one verification against a throwaway hash, so an
    /// unknown account takes as long to reject as a wrong password.
    pub fn verify_dummy(password: &str) {
        let hash = DUMMY_HASH.get_or_init(|| Self::hash_password("breadit-dummy-password").ok());
        if let Some(hash) = hash {
            let _ = Self::verify_password(password, hash);
        }
    }
}
