//! Test fixture modules for database row creation.
//!
//! - `user` - User accounts with bcrypt-hashed passwords
//! - `todo` - Todo items owned by users

pub mod todo;
pub mod user;
