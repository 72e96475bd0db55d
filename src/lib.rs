//! Wunderlist user account API.
//!
//! `model` holds the JSON shapes exchanged with clients; `server` holds everything that runs
//! behind the HTTP listener.

pub mod model;
pub mod server;
