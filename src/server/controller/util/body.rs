use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;

use crate::model::user::CredentialsDto;

/// Credentials read from a JSON request body.
///
/// Never rejects. A body that isn't valid JSON reads as `{}`, and a field that is missing,
/// `null`, empty or not a string reads as `None`.
#[derive(Debug, Clone, Default)]
pub struct Credentials(pub CredentialsDto);

impl<S> FromRequest<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.unwrap_or_default();

        Ok(Self(parse_credentials(&body)))
    }
}

/// Parse a credentials body using the presence rules of [`Credentials`]
pub fn parse_credentials(body: &[u8]) -> CredentialsDto {
    let value: Value = serde_json::from_slice(body).unwrap_or_default();

    CredentialsDto {
        username: string_field(&value, "username"),
        password: string_field(&value, "password"),
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
}
