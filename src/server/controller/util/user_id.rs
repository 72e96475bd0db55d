use axum::{
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
};

/// The `{id}` path segment of a user route.
///
/// `None` when the segment isn't an integer. Such an id cannot name any user, so handlers treat
/// it as a lookup that finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdParam(pub Option<i32>);

impl<S> FromRequestParts<S> for UserIdParam
where
    S: Send + Sync,
{
    type Rejection = PathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;

        Ok(Self(raw.parse().ok()))
    }
}
