use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        todo::TodoDto,
        user::{CredentialsDto, UserDto},
    },
    server::{
        controller::util::{gate::UserChanges, user_id::UserIdParam},
        data::UserCriteria,
        error::{user::UserError, Error, Operation},
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// List every user account
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 201, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 501, description = "Users could not be retrieved", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = state
        .users
        .get_all()
        .await
        .map_err(Error::during(Operation::ListUsers))?;

    let user_dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok((StatusCode::CREATED, Json(user_dtos)))
}

/// Get a user account by ID
///
/// Responds with `null` when no user has the ID.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 201, description = "The user, or null if not found", body = Option<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 501, description = "User could not be retrieved", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserIdParam(user_id): UserIdParam,
) -> Result<impl IntoResponse, Error> {
    let user = match user_id {
        Some(user_id) => state
            .users
            .find_by(UserCriteria::Id(user_id))
            .await
            .map_err(Error::during(Operation::GetUser))?,
        None => None,
    };

    Ok((StatusCode::CREATED, Json(user.map(UserDto::from))))
}

/// Delete a user account by ID
///
/// The user's todo list is deleted with it. Responds with the number of deleted users.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 201, description = "Number of deleted users", body = u64),
        (status = 401, description = "Not logged in, or no user at the ID", body = ErrorDto),
        (status = 501, description = "User could not be deleted", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdParam(user_id): UserIdParam,
) -> Result<impl IntoResponse, Error> {
    let deleted = match user_id {
        Some(user_id) => state
            .users
            .delete_by_id(user_id)
            .await
            .map_err(Error::during(Operation::DeleteUser))?,
        None => 0,
    };

    if deleted == 0 {
        tracing::debug!(user_id = ?user_id, "No user deleted at requested ID");

        return Err(UserError::NotFound.into());
    }

    tracing::info!(user_id = ?user_id, "Deleted user");

    Ok((StatusCode::CREATED, Json(deleted)))
}

/// Update a user's username and optionally their password
///
/// The body must always carry the resulting username. Responds with `null` when no user has
/// the ID.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = String, Path, description = "User ID")),
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "The updated user, or null if not found", body = Option<UserDto>),
        (status = 401, description = "Not logged in, or username missing", body = ErrorDto),
        (status = 500, description = "User could not be updated", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    UserIdParam(user_id): UserIdParam,
    changes: UserChanges,
) -> Result<impl IntoResponse, Error> {
    let user = match user_id {
        Some(user_id) => UserService::new(state.users.as_ref(), &state.hasher)
            .update(user_id, changes.username, changes.password)
            .await
            .map_err(Error::during(Operation::UpdateUser))?,
        None => None,
    };

    Ok((StatusCode::OK, Json(user.map(UserDto::from))))
}

/// Get the todo list owned by a user
///
/// Responds with an empty list when the user has no items or doesn't exist.
#[utoipa::path(
    get,
    path = "/api/users/{id}/myList",
    tag = USER_TAG,
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 201, description = "The user's todo items", body = Vec<TodoDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 501, description = "Todo items could not be retrieved", body = ErrorDto)
    ),
)]
pub async fn get_user_todos(
    State(state): State<AppState>,
    UserIdParam(user_id): UserIdParam,
) -> Result<impl IntoResponse, Error> {
    let todos = match user_id {
        Some(user_id) => state
            .todos
            .list_for_user(user_id)
            .await
            .map_err(Error::during(Operation::GetTodoList))?,
        None => Vec::new(),
    };

    let todo_dtos: Vec<TodoDto> = todos.into_iter().map(TodoDto::from).collect();

    Ok((StatusCode::CREATED, Json(todo_dtos)))
}
