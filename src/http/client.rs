//! `reqwest`-backed [`Transport`].

use crate::error::HttpError;
use crate::http::transport::{status_error, Transport};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Default per-request timeout on native targets.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client shared by both services.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            client: builder.build()?,
        })
    }

    async fn do_request(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Value, HttpError> {
        tracing::debug!(%method, url, "Sending request");

        let mut req = self.client.request(method, url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(map_reqwest)?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<Value>().await.map_err(map_reqwest)?;
            return Ok(parsed);
        }

        let body_text = resp.text().await.unwrap_or_default();
        Err(status_error(status.as_u16(), body_text))
    }
}

fn map_reqwest(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(err)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get_json(&self, url: &str) -> Result<Value, HttpError> {
        self.do_request(reqwest::Method::GET, url, None).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, HttpError> {
        self.do_request(reqwest::Method::POST, url, Some(body)).await
    }
}
