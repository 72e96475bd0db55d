use std::sync::Arc;

use tower_sessions::Session;
use wunderlist::server::{controller::auth::logout, model::session::user::SessionUser};

use super::*;
use crate::util::store::FailingSessionStore;

#[tokio::test]
/// Expect 200 and an empty session after logout with a user in session
async fn logs_out_user_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("alice", TEST_PASSWORD)
        .build()
        .await?;
    let user = test.user().find_user(1).await?.unwrap();
    SessionUser::insert(&test.session, &user).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"message": "Logout success"}));

    // Ensure user was cleared from session
    assert!(SessionUser::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 401 when nobody is logged in
async fn rejects_logout_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(resp).await,
        json!({"message": "Cannot logout. Not currently logged in"})
    );

    Ok(())
}

#[tokio::test]
/// Expect a second logout on the same session to be rejected
async fn rejects_second_logout() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("alice", TEST_PASSWORD)
        .build()
        .await?;
    let user = test.user().find_user(1).await?.unwrap();
    SessionUser::insert(&test.session, &user).await.unwrap();

    let first = logout(test.session.clone()).await;
    assert!(first.is_ok());

    let second = logout(test.session.clone()).await;
    assert!(second.is_err());
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect a logout from another client to leave the logged in session alone
async fn logout_only_affects_own_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("alice", TEST_PASSWORD)
        .build()
        .await?;
    let user = test.user().find_user(1).await?.unwrap();
    SessionUser::insert(&test.session, &user).await.unwrap();

    let result = logout(test.new_session()).await;

    assert!(result.is_err());
    assert!(SessionUser::get(&test.session).await.unwrap().is_some());

    Ok(())
}

#[tokio::test]
/// Expect 400 with the store's detail when the session can't be destroyed
async fn returns_bad_request_when_session_not_destroyed() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("alice", TEST_PASSWORD)
        .build()
        .await?;
    let user = test.user().find_user(1).await?.unwrap();

    // Saving assigns an ID, so logout has a stored session to delete
    let session = Session::new(None, Arc::new(FailingSessionStore::failing_deletes()), None);
    SessionUser::insert(&session, &user).await.unwrap();
    session.save().await?;

    let result = logout(session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "could not logout");
    assert!(body["error"].as_str().unwrap().contains(STORE_FAILURE));

    Ok(())
}
