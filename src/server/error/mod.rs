//! Error types for the Wunderlist server application.
//!
//! This module provides the error handling system for the API. Client mistakes (validation,
//! conflicts, failed authentication) have their own domain enums, while failures of the store,
//! session or password hasher are wrapped together with the [`Operation`] they interrupted so
//! the response can carry that operation's status code and message. All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for their definitions.

pub mod auth;
pub mod config;
pub mod operation;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub use operation::Operation;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, user::UserError},
};

/// Main error type for the Wunderlist server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (no session, bad credentials)
/// - User errors (missing fields, taken username, nothing to delete)
/// - Operation failures (any collaborator error scoped to the request that hit it)
/// - External library errors (database, sessions, bcrypt, blocking tasks, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (no user in session, bad credentials).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request validation or conflict error.
    #[error(transparent)]
    UserError(#[from] UserError),
    /// A collaborator failed while serving `operation`.
    #[error("{operation}: {source}")]
    Failed {
        /// The operation that was interrupted
        operation: Operation,
        /// The collaborator error
        #[source]
        source: Box<Error>,
    },
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Password hashing or verification error.
    #[error(transparent)]
    BcryptError(#[from] bcrypt::BcryptError),
    /// A blocking hashing task panicked or was cancelled.
    #[error(transparent)]
    JoinError(#[from] tokio::task::JoinError),
    /// Listener or connection I/O error.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Scopes a collaborator error to the operation it interrupted.
    ///
    /// Meant for `map_err`:
    ///
    /// ```ignore
    /// let users = state.users.get_all().await.map_err(Error::during(Operation::ListUsers))?;
    /// ```
    ///
    /// Errors that already carry their own response (auth, user and operation errors) pass
    /// through unchanged.
    pub fn during<E>(operation: Operation) -> impl FnOnce(E) -> Error
    where
        E: Into<Error>,
    {
        move |err| match err.into() {
            err @ (Error::AuthError(_) | Error::UserError(_) | Error::Failed { .. }) => err,
            err => Error::Failed {
                operation,
                source: Box::new(err),
            },
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400/401 - For user and authentication errors
/// - The operation's own status - For collaborator failures, with the raw detail in `error`
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::Failed { operation, source } => {
                tracing::error!(operation = ?operation, "{}", source);

                (
                    operation.failure_status(),
                    Json(ErrorDto::with_error(
                        operation.failure_message(),
                        source.to_string(),
                    )),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
