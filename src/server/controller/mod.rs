//! HTTP controller endpoints for the Wunderlist web API.
//!
//! This module contains the Axum handlers mounted under `/api/users`: registration and session
//! management in [`auth`], and the protected account and todo list endpoints in [`user`].
//! Request validation lives in extractors under [`util`] so handlers only see well formed input.

pub mod auth;
pub mod user;
pub mod util;
