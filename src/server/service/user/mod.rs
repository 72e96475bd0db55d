//! User service layer.
//!
//! This module contains the account workflows that combine the user store with password
//! hashing: registration, credential checks during login, and profile updates.


use crate::server::{
    data::{NewUserRecord, UserCriteria, UserRecordChanges, UserStore},
    error::Error,
    model::db::UserModel,
    service::password::PasswordHasher,
};

/// Service for managing user account operations.
pub struct UserService<'a> {
    users: &'a dyn UserStore,
    hasher: &'a PasswordHasher,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `users` - Store holding user accounts
    /// - `hasher` - Password hasher used for new and changed passwords
    pub fn new(users: &'a dyn UserStore, hasher: &'a PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// Checks whether an account already uses `username`.
    pub async fn is_username_taken(&self, username: &str) -> Result<bool, Error> {
        let existing = self
            .users
            .find_by(UserCriteria::Username(username.to_string()))
            .await?;

        Ok(existing.is_some())
    }

    /// Registers a new user, storing only a bcrypt hash of their password.
    ///
    /// Username availability is the caller's concern; a username taken between that check and
    /// this insert is rejected by the store's unique index.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The stored user
    /// - `Err(Error::BcryptError)` - Hashing failed
    /// - `Err(Error::DbErr)` - Insert failed, including a username conflict
    pub async fn register(&self, username: String, password: String) -> Result<UserModel, Error> {
        let password_hash = self.hasher.hash(password).await?;

        let user = self
            .users
            .insert(NewUserRecord {
                username,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "Registered new user");

        Ok(user)
    }

    /// Checks a username and password pair.
    ///
    /// An unknown username and a wrong password both produce `Ok(None)` so callers cannot tell
    /// them apart.
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - Credentials are valid
    /// - `Ok(None)` - Unknown user or wrong password
    /// - `Err(Error)` - Lookup or hash verification failed
    pub async fn authenticate(
        &self,
        username: String,
        password: String,
    ) -> Result<Option<UserModel>, Error> {
        let Some(user) = self
            .users
            .find_by(UserCriteria::Username(username))
            .await?
        else {
            return Ok(None);
        };

        if self.hasher.verify(password, user.password.clone()).await? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// Updates a user's username and, when given, their password.
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - The updated user
    /// - `Ok(None)` - No user with `user_id`
    /// - `Err(Error)` - Hashing or the update failed
    pub async fn update(
        &self,
        user_id: i32,
        username: String,
        password: Option<String>,
    ) -> Result<Option<UserModel>, Error> {
        let password_hash = match password {
            Some(password) => Some(self.hasher.hash(password).await?),
            None => None,
        };

        let user = self
            .users
            .update_by_id(
                user_id,
                UserRecordChanges {
                    username,
                    password_hash,
                },
            )
            .await?;

        Ok(user)
    }
}
