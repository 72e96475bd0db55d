use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::{error::Error, model::db::UserModel};

pub const SESSION_USER_KEY: &str = "wunderlist:user";

/// Snapshot of the logged in user kept in session.
///
/// Written on login and read by the authentication gate. The password hash is never part of
/// the snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionUser {
    pub id: i32,
    pub username: String,
}

impl SessionUser {
    /// Insert user into session
    pub async fn insert(session: &Session, user: &UserModel) -> Result<(), Error> {
        session
            .insert(
                SESSION_USER_KEY,
                SessionUser {
                    id: user.id,
                    username: user.username.clone(),
                },
            )
            .await?;

        Ok(())
    }

    /// Get user from session
    pub async fn get(session: &Session) -> Result<Option<SessionUser>, Error> {
        Ok(session.get::<SessionUser>(SESSION_USER_KEY).await?)
    }
}
