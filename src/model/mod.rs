//! Data transfer objects shared by the API and its clients.

pub mod api;
pub mod todo;
pub mod user;
