//! Data access layer.
//!
//! Handlers reach persistence only through the [`UserStore`] and [`TodoStore`] traits. The
//! SeaORM repositories in the submodules are the production implementations; tests may swap
//! in their own.

pub mod todo;
pub mod user;

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::server::model::db::{TodoModel, UserModel};

/// Criteria for looking up a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCriteria {
    /// Match on primary key
    Id(i32),
    /// Match on the unique username
    Username(String),
}

/// Fields required to create a user. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub username: String,
    pub password_hash: String,
}

/// Changes applied by a profile update.
///
/// `username` is always written; the password is only replaced when a new hash is given.
#[derive(Debug, Clone)]
pub struct UserRecordChanges {
    pub username: String,
    pub password_hash: Option<String>,
}

/// Persistence for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns every user.
    async fn get_all(&self) -> Result<Vec<UserModel>, DbErr>;

    /// Returns the user matching `criteria`, if any.
    async fn find_by(&self, criteria: UserCriteria) -> Result<Option<UserModel>, DbErr>;

    /// Creates a user and returns the stored row.
    ///
    /// Fails if the username is already taken.
    async fn insert(&self, new_user: NewUserRecord) -> Result<UserModel, DbErr>;

    /// Applies `changes` to the user with `user_id`.
    ///
    /// Returns `Ok(None)` if there is no such user.
    async fn update_by_id(
        &self,
        user_id: i32,
        changes: UserRecordChanges,
    ) -> Result<Option<UserModel>, DbErr>;

    /// Deletes the user with `user_id`, returning the number of rows removed.
    async fn delete_by_id(&self, user_id: i32) -> Result<u64, DbErr>;
}

/// Read access to the todo lists owned by users.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Returns the items owned by `user_id`, oldest first.
    async fn list_for_user(&self, user_id: i32) -> Result<Vec<TodoModel>, DbErr>;
}
