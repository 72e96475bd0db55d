//! Server application core modules.
//!
//! This module contains all server-side functionality for the Wunderlist user account API:
//! HTTP routing, request gates, session handling, password hashing and the data access layer
//! backing user accounts and their todo lists.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
