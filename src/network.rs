//! Endpoint constants for the backing services.

/// Default historical-data service base URL.
pub const DEFAULT_HISTORICAL_URL: &str = "http://localhost:3000";

/// Default prediction service base URL.
pub const DEFAULT_PREDICTION_URL: &str = "http://127.0.0.1:5000";

/// Path of the daily historical endpoint (takes `?ticker=`).
pub const DAILY_HISTORICAL_PATH: &str = "/daily-historical";

/// Path of the enhanced-model prediction endpoint.
pub const PREDICT_PATH: &str = "/predict-with-enhanced-model";
