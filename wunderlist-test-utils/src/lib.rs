//! Shared test harness for the Wunderlist workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and fixtures a test
//! needs, and `build()` turns that declaration into a [`TestContext`] holding an in-memory SQLite
//! database and an in-memory session.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_HASH_COST, TEST_PASSWORD},
        TestBuilder, TestContext, TestError,
    };
}
