//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{middleware, routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, util::restricted::require_user},
    model::app::AppState,
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Registration and session routes are public. Every other route sits behind the
/// [`require_user`] gate, which rejects requests without a logged in user before the handler
/// runs.
///
/// # Registered Endpoints
/// - `POST /api/users/register` - Create an account
/// - `POST /api/users/login` - Log in and start a session
/// - `GET /api/users/logout` - Destroy the current session
/// - `GET /api/users` - List users, also served with a trailing slash (login required)
/// - `GET /api/users/{id}` - Get a user (login required)
/// - `PUT /api/users/{id}` - Update a user (login required)
/// - `DELETE /api/users/{id}` - Delete a user (login required)
/// - `GET /api/users/{id}/myList` - Get a user's todo list (login required)
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>`. Sessions are read through `tower_sessions::Session`, so the
/// caller must layer a `SessionManagerLayer` on top.
///
/// # Example
/// ```ignore
/// let app_state = AppState::from_database(db, PasswordHasher::default());
/// let router = routes().with_state(app_state).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Wunderlist", description = "Wunderlist API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Registration and session routes"),
        (name = controller::user::USER_TAG, description = "User account routes, login required"),
    ))]
    struct ApiDoc;

    let (public_routes, mut api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .split_for_parts();

    let (restricted_routes, restricted_api) = OpenApiRouter::new()
        .routes(routes!(controller::user::get_users))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::user::get_user_todos))
        .split_for_parts();

    api.merge(restricted_api);

    let restricted_routes = restricted_routes
        .route("/api/users/", get(controller::user::get_users))
        .route_layer(middleware::from_fn(require_user));

    public_routes
        .merge(restricted_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
