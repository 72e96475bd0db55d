//! Constants shared across tests.

/// bcrypt cost used by test fixtures and test application state.
///
/// The minimum cost keeps hashing fast; production uses a far higher cost.
pub const TEST_HASH_COST: u32 = 4; // bcrypt::MIN_COST (private in the bcrypt crate)

/// Plaintext password given to users created by fixtures unless a test picks its own.
pub static TEST_PASSWORD: &str = "correct horse battery staple";
