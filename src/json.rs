use axum::{body::Bytes, extract::{FromRequest, Request}};
use serde::de::DeserializeOwned;

use crate::AppError;

/// JSON request body that ignores `Content-Type` and turns every decode
/// failure into a 400.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| {
                tracing::debug!(%err, "could not read request body");
                AppError::bad_request()
            })?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|err| {
                tracing::debug!(%err, "rejecting request body");
                AppError::bad_request()
            })
    }
}
