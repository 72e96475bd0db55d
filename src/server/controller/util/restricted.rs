use axum::{extract::Request, middleware::Next, response::Response};
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::user::SessionUser,
};

/// Middleware guarding routes that require a logged in user.
///
/// Passes the request on when the session holds a user. Otherwise responds 401, or 500 if the
/// session couldn't be read.
pub async fn require_user(
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, Error> {
    let Some(user) = SessionUser::get(&session).await? else {
        return Err(AuthError::NotLoggedIn.into());
    };

    tracing::trace!(user_id = %user.id, "Session user passed authentication gate");

    Ok(next.run(request).await)
}
