//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns an
//! in-memory SQLite database and a session backed by an in-memory store, which together stand
//! in for Postgres and Valkey during tests.

use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_HASH_COST, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_user_tables().build().await?;
///
/// // Access fixtures helpers
/// let user = test.user().insert_user("alice", "secret1").await?;
/// test.todo().insert_todo(user.id, "buy milk", false).await?;
///
/// // Build application state for handlers
/// let state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for test authentication flows
    pub session: Session,
    /// Store backing `session`, shared so further sessions can be opened against it
    pub session_store: Arc<MemoryStore>,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it and a
    /// password hashing cost.
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main wunderlist crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, u32)>,
    {
        T::from((self.db.clone(), TEST_HASH_COST))
    }

    /// Open a fresh, empty session against the same store as [`TestContext::session`].
    ///
    /// Useful for simulating a second client that has never logged in.
    pub fn new_session(&self) -> Session {
        Session::new(None, self.session_store.clone(), None)
    }
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let session_store = Arc::new(MemoryStore::default());
        let session = Session::new(None, session_store.clone(), None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            session,
            session_store,
        })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
