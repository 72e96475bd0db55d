use std::fmt;

use axum::http::StatusCode;

/// A user account operation, used to scope collaborator failures.
///
/// Each operation answers failures of the store, the session or the hasher with its own fixed
/// status code and message. The codes mirror the API's established contract, including 501
/// for most failed reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `GET /api/users`
    ListUsers,
    /// `GET /api/users/{id}`
    GetUser,
    /// `POST /api/users/register`, including the username availability check
    Register,
    /// `POST /api/users/login`
    Login,
    /// `GET /api/users/logout`
    Logout,
    /// `DELETE /api/users/{id}`
    DeleteUser,
    /// `PUT /api/users/{id}`
    UpdateUser,
    /// `GET /api/users/{id}/myList`
    GetTodoList,
}

impl Operation {
    /// Status code returned when this operation's collaborator fails
    pub fn failure_status(self) -> StatusCode {
        match self {
            Self::ListUsers
            | Self::GetUser
            | Self::Register
            | Self::DeleteUser
            | Self::GetTodoList => StatusCode::NOT_IMPLEMENTED,
            Self::Login | Self::UpdateUser => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Logout => StatusCode::BAD_REQUEST,
        }
    }

    /// Client-facing message returned when this operation's collaborator fails
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::ListUsers => "could not retrieve users",
            Self::GetUser => "could not retrieve user at specified id",
            Self::Register => "could not add user",
            Self::Login => "failed to sign in",
            Self::Logout => "could not logout",
            Self::DeleteUser => "could not delete user",
            Self::UpdateUser => "could not update user info",
            Self::GetTodoList => "could not retrieve Wunderlist items",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}
