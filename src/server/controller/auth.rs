use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CredentialsDto, UserDto},
    },
    server::{
        controller::util::{body::Credentials, gate::NewUser},
        error::{auth::AuthError, Error, Operation},
        model::{app::AppState, session::user::SessionUser},
        service::user::UserService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new user account
///
/// The password is stored as a bcrypt hash. Registration does not log the user in.
///
/// # Responses
/// - 201 (Created): The new user
/// - 400 (Bad Request): The username is already in use
/// - 401 (Unauthorized): The username or password field is missing
/// - 501 (Not Implemented): The user could not be stored
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Username already in use", body = ErrorDto),
        (status = 401, description = "Username or password missing", body = ErrorDto),
        (status = 501, description = "User could not be added", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    new_user: NewUser,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(state.users.as_ref(), &state.hasher)
        .register(new_user.username, new_user.password)
        .await
        .map_err(Error::during(Operation::Register))?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// Log in with a username and password
///
/// Stores the user in session on success; later requests carrying the session cookie pass the
/// authentication gate.
///
/// # Responses
/// - 201 (Created): Logged in, with a welcome message
/// - 401 (Unauthorized): Unknown username, wrong password or missing field
/// - 500 (Internal Server Error): Credentials could not be checked or the session not written
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 201, description = "Logged in", body = MessageDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Failed to sign in", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Credentials(credentials): Credentials,
) -> Result<impl IntoResponse, Error> {
    let (Some(username), Some(password)) = (credentials.username, credentials.password) else {
        return Err(AuthError::InvalidCredentials.into());
    };

    let Some(user) = UserService::new(state.users.as_ref(), &state.hasher)
        .authenticate(username, password)
        .await
        .map_err(Error::during(Operation::Login))?
    else {
        return Err(AuthError::InvalidCredentials.into());
    };

    SessionUser::insert(&session, &user)
        .await
        .map_err(Error::during(Operation::Login))?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new(format!("Welcome {}!", user.username))),
    ))
}

/// Log out by destroying the session
///
/// # Responses
/// - 200 (OK): Logged out
/// - 400 (Bad Request): The session could not be destroyed
/// - 401 (Unauthorized): No user is logged in
#[utoipa::path(
    get,
    path = "/api/users/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 400, description = "Could not logout", body = ErrorDto),
        (status = 401, description = "Not currently logged in", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let Some(user) = SessionUser::get(&session)
        .await
        .map_err(Error::during(Operation::Logout))?
    else {
        return Err(AuthError::NoActiveSession.into());
    };

    session
        .flush()
        .await
        .map_err(Error::during(Operation::Logout))?;

    tracing::info!(user_id = %user.id, "User logged out");

    Ok((StatusCode::OK, Json(MessageDto::new("Logout success"))))
}
