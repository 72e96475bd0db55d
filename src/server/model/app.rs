use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{todo::TodoRepository, user::UserRepository, TodoStore, UserStore},
    service::password::PasswordHasher,
};

/// State shared by every handler.
///
/// Collaborators are held behind their store traits so handlers never depend on how users and
/// todos are persisted.
#[derive(Clone)]
pub struct AppState {
    /// User account persistence
    pub users: Arc<dyn UserStore>,
    /// Read access to todo lists
    pub todos: Arc<dyn TodoStore>,
    /// Password hashing and verification
    pub hasher: PasswordHasher,
}

impl AppState {
    /// Creates application state from explicit collaborators.
    pub fn new(
        users: Arc<dyn UserStore>,
        todos: Arc<dyn TodoStore>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            users,
            todos,
            hasher,
        }
    }

    /// Creates application state backed by the SeaORM repositories.
    pub fn from_database(db: DatabaseConnection, hasher: PasswordHasher) -> Self {
        Self::new(
            Arc::new(UserRepository::new(db.clone())),
            Arc::new(TodoRepository::new(db)),
            hasher,
        )
    }
}

/// Builds state from a database connection and a bcrypt cost.
///
/// Lets test harnesses construct `AppState` without depending on this crate.
impl From<(DatabaseConnection, u32)> for AppState {
    fn from((db, hash_cost): (DatabaseConnection, u32)) -> Self {
        Self::from_database(db, PasswordHasher::new(hash_cost))
    }
}
