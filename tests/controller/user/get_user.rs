use wunderlist::server::controller::user::get_user;

use super::*;

#[tokio::test]
/// Expect 201 with the user at the ID
async fn returns_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("alice", TEST_PASSWORD)
        .with_user("bob", TEST_PASSWORD)
        .build()
        .await?;

    let result = get_user(State(test.to_app_state()), UserIdParam(Some(2))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await, json!({"id": 2, "username": "bob"}));

    Ok(())
}

#[tokio::test]
/// Expect 201 with null for an unknown or non-integer ID
async fn returns_null_when_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state: AppState = test.to_app_state();

    for user_id in [Some(42), None] {
        let result = get_user(State(state.clone()), UserIdParam(user_id)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(body_json(resp).await, serde_json::Value::Null);
    }

    Ok(())
}

#[tokio::test]
/// Expect 501 when the user can't be retrieved
async fn returns_not_implemented_when_store_fails() -> Result<(), TestError> {
    let result = get_user(State(failing_app_state()), UserIdParam(Some(1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
    assert_eq!(
        body_json(resp).await["message"],
        "could not retrieve user at specified id"
    );

    Ok(())
}
