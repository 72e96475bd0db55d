//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so signatures don't need to reach into the `entity` crate.

/// Type alias for the user account database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `username` - Unique login name
/// - `password` - bcrypt hash of the user's password
/// - `created_at` - Timestamp when the account was registered
pub type UserModel = entity::user::Model;

/// Type alias for the todo item database model.
///
/// # Fields (from `entity::todo::Model`)
/// - `id` - Primary key, unique item identifier
/// - `user_id` - Foreign key to the owning user
/// - `title` - Item text
/// - `completed` - Whether the item has been checked off
/// - `created_at` - Timestamp when the item was created
pub type TodoModel = entity::todo::Model;
