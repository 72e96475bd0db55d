//! Password hashing with bcrypt.

use crate::server::error::Error;

/// bcrypt cost factor used in production.
pub const DEFAULT_HASH_COST: u32 = 14;

/// Hashes and verifies passwords with bcrypt.
///
/// Both operations run on tokio's blocking thread pool; a single hash at the production cost
/// takes on the order of a second of CPU time.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Creates a hasher that hashes with the given bcrypt `cost`.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// The bcrypt cost new hashes are created with.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hashes `password` with a fresh random salt.
    ///
    /// # Returns
    /// - `Ok(String)` - bcrypt hash in modular crypt format
    /// - `Err(Error::BcryptError)` - Invalid cost
    /// - `Err(Error::JoinError)` - The hashing task panicked
    pub async fn hash(&self, password: String) -> Result<String, Error> {
        let cost = self.cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;

        Ok(hash)
    }

    /// Checks `password` against a stored bcrypt `hash`.
    ///
    /// The comparison is constant time with respect to the hash contents.
    ///
    /// # Returns
    /// - `Ok(true)` - Password matches
    /// - `Ok(false)` - Password does not match
    /// - `Err(Error::BcryptError)` - `hash` is not a valid bcrypt hash
    pub async fn verify(&self, password: String, hash: String) -> Result<bool, Error> {
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;

        Ok(matches)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_COST)
    }
}
