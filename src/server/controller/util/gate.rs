use axum::extract::{FromRequest, Request};

use crate::server::{
    controller::util::body::Credentials,
    error::{user::UserError, Error, Operation},
    model::app::AppState,
    service::user::UserService,
};

/// Registration body that passed the registration gate.
///
/// Extraction fails with 401 when the username or password is absent and with 400 when the
/// username already belongs to an account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl FromRequest<AppState> for NewUser {
    type Rejection = Error;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let Credentials(credentials) = match Credentials::from_request(req, state).await {
            Ok(credentials) => credentials,
            Err(never) => match never {},
        };

        let (Some(username), Some(password)) = (credentials.username, credentials.password)
        else {
            return Err(UserError::MissingCredentials.into());
        };

        let user_service = UserService::new(state.users.as_ref(), &state.hasher);
        if user_service
            .is_username_taken(&username)
            .await
            .map_err(Error::during(Operation::Register))?
        {
            return Err(UserError::UsernameTaken(username).into());
        }

        Ok(Self { username, password })
    }
}

/// Profile update body that passed the update gate.
///
/// Every update must name the resulting username, even when it doesn't change. Extraction fails
/// with 401 otherwise.
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub username: String,
    pub password: Option<String>,
}

impl<S> FromRequest<S> for UserChanges
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Credentials(credentials) = match Credentials::from_request(req, state).await {
            Ok(credentials) => credentials,
            Err(never) => match never {},
        };

        let Some(username) = credentials.username else {
            return Err(UserError::MissingUsername.into());
        };

        Ok(Self {
            username,
            password: credentials.password,
        })
    }
}
