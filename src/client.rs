//! High-level client — `PredictClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the accessor methods and the
//! search → predict workflow that drives a [`PredictSession`].

use crate::domain::historical::client::Historical;
use crate::domain::prediction::client::Predictions;
use crate::error::SdkError;
use crate::http::Transport;
use crate::session::{ApplyOutcome, PredictSession};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::historical::client::Historical as HistoricalClient;
pub use crate::domain::prediction::client::Predictions as PredictionsClient;

/// Environment variable overriding the historical service base URL.
pub const ENV_HISTORICAL_URL: &str = "TICKER_PREDICT_HISTORICAL_URL";
/// Environment variable overriding the prediction service base URL.
pub const ENV_PREDICTION_URL: &str = "TICKER_PREDICT_PREDICTION_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "TICKER_PREDICT_TIMEOUT_SECS";

/// The primary entry point.
///
/// Provides nested sub-client accessors for each service:
/// `client.historical()`, `client.predictions()`.
pub struct PredictClient<T: Transport> {
    pub(crate) transport: T,
    pub(crate) historical_url: String,
    pub(crate) prediction_url: String,
}

/// What one [`PredictClient::search`] run wrote into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub history: ApplyOutcome,
    /// `None` when the prediction was never requested because the history
    /// result was already stale.
    pub prediction: Option<ApplyOutcome>,
}

#[cfg(feature = "http")]
impl PredictClient<crate::http::ReqwestTransport> {
    pub fn builder() -> PredictClientBuilder {
        PredictClientBuilder::default()
    }
}

impl<T: Transport> PredictClient<T> {
    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn historical(&self) -> Historical<'_, T> {
        Historical { client: self }
    }

    pub fn predictions(&self) -> Predictions<'_, T> {
        Predictions { client: self }
    }

    pub fn historical_url(&self) -> &str {
        &self.historical_url
    }

    pub fn prediction_url(&self) -> &str {
        &self.prediction_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ── Workflow ─────────────────────────────────────────────────────────

    /// Run a search for the session's current query.
    ///
    /// Fetches the daily history, applies it, then forwards the rows (in the
    /// order the service returned them) to the prediction model and applies
    /// that result. Failures are recorded on the session and returned.
    pub async fn search(&self, session: &mut PredictSession) -> Result<SearchOutcome, SdkError> {
        let token = session.begin_search();
        tracing::info!(ticker = %token.ticker(), generation = token.generation(), "Searching ticker");

        let history = self.historical().get(token.ticker()).await;
        let applied = session.apply_history(&token, history.as_deref());
        let rows = history?;

        if applied == ApplyOutcome::Stale || !session.begin_prediction(&token) {
            return Ok(SearchOutcome {
                history: applied,
                prediction: None,
            });
        }

        let prediction = self.predictions().predict(&rows).await;
        let predicted = session.apply_prediction(&token, prediction.as_ref());
        prediction?;

        Ok(SearchOutcome {
            history: applied,
            prediction: Some(predicted),
        })
    }
}

impl<T: Transport + Clone> Clone for PredictClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            historical_url: self.historical_url.clone(),
            prediction_url: self.prediction_url.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct PredictClientBuilder {
    historical_url: String,
    prediction_url: String,
    timeout: Duration,
}

impl Default for PredictClientBuilder {
    fn default() -> Self {
        Self {
            historical_url: crate::network::DEFAULT_HISTORICAL_URL.to_string(),
            prediction_url: crate::network::DEFAULT_PREDICTION_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl PredictClientBuilder {
    /// Start from the defaults, then apply any `TICKER_PREDICT_*`
    /// environment overrides. A timeout that is not a positive whole number
    /// of seconds is an error.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, SdkError> {
        let mut builder = Self::default();
        if let Some(url) = var(ENV_HISTORICAL_URL) {
            builder = builder.historical_url(&url);
        }
        if let Some(url) = var(ENV_PREDICTION_URL) {
            builder = builder.prediction_url(&url);
        }
        if let Some(raw) = var(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    SdkError::Other(format!(
                        "{ENV_TIMEOUT_SECS} must be a positive whole number of seconds, got {raw:?}"
                    ))
                })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder)
    }

    pub fn historical_url(mut self, url: &str) -> Self {
        self.historical_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn prediction_url(mut self, url: &str) -> Self {
        self.prediction_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Per-request timeout (native targets only).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a client on top of `reqwest`.
    #[cfg(feature = "http")]
    pub fn build(self) -> Result<PredictClient<crate::http::ReqwestTransport>, SdkError> {
        let transport = crate::http::ReqwestTransport::new(self.timeout)?;
        Ok(self.build_with_transport(transport))
    }

    /// Build a client on top of a caller-supplied transport.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> PredictClient<T> {
        PredictClient {
            transport,
            historical_url: self.historical_url,
            prediction_url: self.prediction_url,
        }
    }
}
