//! The injected HTTP seam.
//!
//! Sub-clients never talk to a concrete HTTP stack. They hand a URL (and a
//! JSON body for POST) to a [`Transport`] and receive the decoded JSON body
//! back; schema validation happens afterwards in the domain layer.

use crate::error::HttpError;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait Transport: Send + Sync {
    /// `GET url`, returning the JSON response body.
    async fn get_json(&self, url: &str) -> Result<Value, HttpError>;

    /// `POST url` with a JSON body, returning the JSON response body.
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, HttpError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get_json(&self, url: &str) -> Result<Value, HttpError> {
        (**self).get_json(url).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, HttpError> {
        (**self).post_json(url, body).await
    }
}

/// Map a non-success status and its body text onto an [`HttpError`].
pub(crate) fn status_error(status: u16, body: String) -> HttpError {
    match status {
        404 => HttpError::NotFound(body),
        408 | 504 => HttpError::Timeout,
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}
