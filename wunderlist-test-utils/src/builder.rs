//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and fixture
/// rows. Methods can be chained together and finalized with `build()`.
#[derive(Default)]
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,

    // Database fixtures to insert
    users: Vec<(String, String)>, // (username, password)
    todos: Vec<(i32, String, bool)>, // (user_id, title, completed)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the `users` and `todos` tables to the test database.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wunderlist_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), wunderlist_test_utils::TestError> {
    /// // Users without todos, so todo lookups fail
    /// let test = TestBuilder::new().with_table(User).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with a bcrypt-hashed password.
    ///
    /// Users receive ids in insertion order starting at 1.
    pub fn with_user(mut self, username: &str, password: &str) -> Self {
        self.users.push((username.to_string(), password.to_string()));
        self
    }

    /// Insert a todo item owned by `user_id`.
    pub fn with_todo(mut self, user_id: i32, title: &str, completed: bool) -> Self {
        self.todos.push((user_id, title.to_string(), completed));
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued table creations first, then users, then todos.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with all tables and fixtures in place
    /// - `Err(TestError)` - Table creation, hashing or insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_user_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Todo),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for (username, password) in self.users {
            setup.user().insert_user(&username, &password).await?;
        }

        for (user_id, title, completed) in self.todos {
            setup.todo().insert_todo(user_id, &title, completed).await?;
        }

        Ok(setup)
    }
}
