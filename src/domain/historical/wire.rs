//! Wire types for the daily historical endpoint (REST).

use serde::{Deserialize, Serialize};

/// One raw daily record as the historical service sends it.
///
/// Every field is optional here; presence is checked when converting into
/// [`super::HistoricalRow`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalRowResponse {
    pub date: Option<String>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub adj_close: Option<f64>,
    pub volume: Option<f64>,
    pub unadjusted_volume: Option<f64>,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    pub vwap: Option<f64>,
    pub label: Option<String>,
    pub change_over_time: Option<f64>,
}

/// REST response for `GET /daily-historical?ticker=`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyHistoricalResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub historical: Option<Vec<HistoricalRowResponse>>,
}
