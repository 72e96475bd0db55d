use axum::extract::State;
use wunderlist::{
    model::user::CredentialsDto,
    server::{
        controller::{auth::login, util::body::Credentials},
        model::session::user::SessionUser,
    },
};

use super::*;

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_user_tables()
        .with_user("alice", "secret1")
        .build()
        .await
}

#[tokio::test]
/// Expect 201 with a welcome message and the user stored in session
async fn logs_in_with_valid_credentials() -> Result<(), TestError> {
    let test = setup().await?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        Credentials(CredentialsDto::new("alice", "secret1")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await, json!({"message": "Welcome alice!"}));

    let session_user = SessionUser::get(&test.session).await.unwrap();
    assert_eq!(
        session_user,
        Some(SessionUser {
            id: 1,
            username: "alice".to_string(),
        })
    );

    Ok(())
}

#[tokio::test]
/// Expect 401 and no session for a wrong password
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = setup().await?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        Credentials(CredentialsDto::new("alice", "secret2")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await, json!({"message": "Invalid Credentials"}));

    assert!(SessionUser::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect the same 401 for an unknown username as for a wrong password
async fn rejects_unknown_username() -> Result<(), TestError> {
    let test = setup().await?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        Credentials(CredentialsDto::new("bob", "secret1")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await, json!({"message": "Invalid Credentials"}));

    Ok(())
}

#[tokio::test]
/// Expect 401 without touching the store when a field is missing
async fn rejects_missing_fields_without_lookup() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let credentials = CredentialsDto {
        username: Some("alice".to_string()),
        password: None,
    };

    // A store call would fail with 500
    let result = login(
        State(failing_app_state()),
        test.session.clone(),
        Credentials(credentials),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 500 with the store's detail when credentials can't be checked
async fn returns_internal_error_when_lookup_fails() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(
        State(failing_app_state()),
        test.session.clone(),
        Credentials(CredentialsDto::new("alice", "secret1")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "failed to sign in");
    assert!(body["error"].as_str().unwrap().contains(STORE_FAILURE));

    Ok(())
}
