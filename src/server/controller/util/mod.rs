//! Extractors and middleware shared by the controllers.
//!
//! - [`body`] reads credential bodies leniently
//! - [`gate`] validates registration and update bodies before a handler runs
//! - [`user_id`] parses the `{id}` path segment
//! - [`restricted`] rejects requests without a logged in user

pub mod body;
pub mod gate;
pub mod restricted;
pub mod user_id;
