//! SeaORM entities for the Wunderlist database.

pub mod prelude;

pub mod todo;
pub mod user;
