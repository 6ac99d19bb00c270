//! # ticker-predict
//!
//! Client for a ticker's five-year daily history and the price-prediction
//! model that consumes it.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — `Ticker`, domain slices (history, prediction, charts), errors
//! 2. **HTTP** — the `Transport` seam and its `reqwest` implementation
//! 3. **Client** — `PredictClient` with nested sub-clients
//! 4. **Session** — `PredictSession`, the view state with stale-result fencing
//! 5. **Export** — CSV building and the `FileSink` download seam
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ticker_predict::prelude::*;
//!
//! let client = PredictClient::builder().build()?;
//! let mut session = PredictSession::new();
//! session.set_query("AAPL");
//! client.search(&mut session).await?;
//!
//! let export = session.export_csv()?;
//! DirectorySink::new(".").save(&export)?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Service URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Transport trait and the `reqwest` transport.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `PredictClient` — the primary entry point.
pub mod client;

// ── Layer 4: Session ─────────────────────────────────────────────────────────

/// View state containers.
pub mod session;

// ── Layer 5: Export ──────────────────────────────────────────────────────────

/// CSV export and file sinks.
pub mod export;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::shared::Ticker;

    // Domain types
    pub use crate::domain::chart::{ChartSeries, Dataset};
    pub use crate::domain::historical::{DailyHistory, HistoricalRow};
    pub use crate::domain::prediction::{Prediction, PredictionPoint};

    // Errors
    pub use crate::error::{ExportError, HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_HISTORICAL_URL, DEFAULT_PREDICTION_URL};

    // Client + sub-clients
    pub use crate::client::{
        HistoricalClient, PredictClient, PredictClientBuilder, PredictionsClient, SearchOutcome,
    };
    pub use crate::http::Transport;
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;

    // Session
    pub use crate::session::{
        ApplyOutcome, HistoryPhase, PredictSession, PredictionPhase, SearchToken,
    };

    // Export
    pub use crate::export::{CsvExport, DirectorySink, FileSink};
}
