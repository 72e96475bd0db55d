use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("username and password fields required")]
    MissingCredentials,
    #[error("username already in use")]
    UsernameTaken(String),
    #[error("username field required to make changes (even if it is not changed)")]
    MissingUsername,
    #[error("User not found or already deleted at specified id")]
    NotFound,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingCredentials | Self::MissingUsername => StatusCode::UNAUTHORIZED,
            Self::UsernameTaken(username) => {
                tracing::debug!(username = %username, "Rejected registration for taken username");

                StatusCode::BAD_REQUEST
            }
            Self::NotFound => StatusCode::UNAUTHORIZED,
        };

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
