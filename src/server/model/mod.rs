//! Server application models and type definitions.
//!
//! This module contains the application state shared by all handlers, database model type
//! aliases, and the session data stored for logged in users.

pub mod app;
pub mod db;
pub mod session;
