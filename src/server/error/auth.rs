use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// A protected route was requested without a user in session
    #[error("You must be logged in to access this resource")]
    NotLoggedIn,
    /// Login with an unknown username or a wrong password
    #[error("Invalid Credentials")]
    InvalidCredentials,
    /// Logout requested without a user in session
    #[error("Cannot logout. Not currently logged in")]
    NoActiveSession,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        // Every variant is a 401; the message never says which credential was wrong
        (StatusCode::UNAUTHORIZED, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
