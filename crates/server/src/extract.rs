//! Request extractors that reject with the shared error body.

use axum::async_trait;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::errors::ApiError;

/// `Json<T>` whose rejection is a 400 validation error.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(rejection.into()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::invalid_field("body", rejection.body_text())
    }
}

/// `Query<T>` whose rejection is a 400 validation error on `query`.
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(ApiQuery(value))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::invalid_field("query", rejection.body_text())
    }
}

/// Parse a path id, rejecting anything that is not a UUID.
pub fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::invalid_field("id", "Invalid UUID"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_ids_must_be_uuids() {
        assert!(parse_id("3f0e4a51-5f3c-4c55-9d7d-7f1d6c1a2b3c").is_ok());
        let err = parse_id("42").unwrap_err();
        assert_eq!(err.error, "Validation Error");
    }

    #[derive(Debug, serde::Deserialize)]
    struct Params {
        q: Option<String>,
    }

    async fn query_of(uri: &str) -> Result<ApiQuery<Params>, ApiError> {
        let req = axum::http::Request::builder().uri(uri).body(()).unwrap();
        let (mut parts, _) = req.into_parts();
        ApiQuery::<Params>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn repeated_query_key_is_a_validation_error() {
        let err = query_of("/api/search?q=rice&q=bag").await.err().unwrap();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.error, "Validation Error");
        let details = err.details.unwrap();
        assert_eq!(details[0].field, "query");

        let ApiQuery(ok) = query_of("/api/search?q=rice").await.unwrap();
        assert_eq!(ok.q.as_deref(), Some("rice"));
    }
}
