//! Tests for the registration and update gates.

use axum::extract::FromRequest;
use wunderlist::server::{
    controller::util::gate::{NewUser, UserChanges},
    error::Error,
};

use super::*;
use crate::util::http::{json_request, raw_request};

#[tokio::test]
/// Expect the gate to pass a complete body for an unused username
async fn new_user_accepts_unused_username() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let req = json_request(
        "POST",
        "/api/users/register",
        &json!({"username": "alice", "password": "secret1"}),
    );

    let result = NewUser::from_request(req, &test.to_app_state()).await;

    assert!(result.is_ok());
    let new_user = result.unwrap();
    assert_eq!(new_user.username, "alice");
    assert_eq!(new_user.password, "secret1");

    Ok(())
}

#[tokio::test]
/// Expect 401 for every body missing a username or password
async fn new_user_rejects_missing_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state: AppState = test.to_app_state();

    for body in [
        json!({"username": "alice"}),
        json!({"password": "secret1"}),
        json!({"username": "", "password": "secret1"}),
        json!({"username": "alice", "password": null}),
        json!({}),
    ] {
        let req = json_request("POST", "/api/users/register", &body);
        let result = NewUser::from_request(req, &state).await;

        assert!(result.is_err(), "{body}");
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{body}");
        assert_eq!(
            body_json(resp).await,
            json!({"message": "username and password fields required"})
        );
    }

    assert_eq!(test.user().count_users().await?, 0);

    Ok(())
}

#[tokio::test]
/// Expect an unparsable body to be rejected like an empty one
async fn new_user_rejects_invalid_json() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let req = raw_request("POST", "/api/users/register", "{username: alice");

    let result = NewUser::from_request(req, &test.to_app_state()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 400 and no write when the username already exists
async fn new_user_rejects_taken_username() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("alice", TEST_PASSWORD)
        .build()
        .await?;
    let req = json_request(
        "POST",
        "/api/users/register",
        &json!({"username": "alice", "password": "other"}),
    );

    let result = NewUser::from_request(req, &test.to_app_state()).await;

    assert!(matches!(result, Err(Error::UserError(_))));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"message": "username already in use"})
    );
    assert_eq!(test.user().count_users().await?, 1);

    Ok(())
}

#[tokio::test]
/// Expect a failed availability lookup to be reported as a registration failure
async fn new_user_reports_lookup_failure() -> Result<(), TestError> {
    let req = json_request(
        "POST",
        "/api/users/register",
        &json!({"username": "alice", "password": "secret1"}),
    );

    let result = NewUser::from_request(req, &failing_app_state()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "could not add user");
    assert!(body["error"].as_str().unwrap().contains(STORE_FAILURE));

    Ok(())
}

#[tokio::test]
/// Expect 401 for a password-only update
async fn user_changes_require_username() {
    let req = json_request("PUT", "/api/users/1", &json!({"password": "secret2"}));

    let result = UserChanges::from_request(req, &()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(resp).await,
        json!({"message": "username field required to make changes (even if it is not changed)"})
    );
}

#[tokio::test]
/// Expect the password to stay optional
async fn user_changes_accept_username_only() {
    let req = json_request("PUT", "/api/users/1", &json!({"username": "alicia"}));

    let result = UserChanges::from_request(req, &()).await;

    assert!(result.is_ok());
    let changes = result.unwrap();
    assert_eq!(changes.username, "alicia");
    assert_eq!(changes.password, None);
}
