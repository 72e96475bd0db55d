//! Business logic services.
//!
//! Services sit between controllers and the data layer. They own the steps that are more than a
//! single store call, such as hashing a password before it is persisted or verifying one during
//! login.

pub mod password;
pub mod user;
