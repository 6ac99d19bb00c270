//! Historical domain — daily OHLCV rows for one ticker.

pub mod client;
mod convert;
pub mod wire;

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// One validated daily OHLCV record.
///
/// Field order matches the backend's key order; it is the order used both
/// when forwarding rows to the prediction service and for CSV columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalRow {
    /// The date exactly as the service sent it. Forwarded and exported as is.
    pub date: String,
    /// `date` parsed to a calendar day.
    #[serde(skip)]
    pub day: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adj_close: Option<f64>,
    pub volume: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unadjusted_volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vwap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_over_time: Option<f64>,
}

impl HistoricalRow {
    /// Chart label for this row (`YYYY-MM-DD`).
    pub fn date_label(&self) -> String {
        self.day.format("%Y-%m-%d").to_string()
    }
}

/// A validated daily history, rows in the order the service returned them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailyHistory {
    pub symbol: Option<String>,
    pub rows: Vec<HistoricalRow>,
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
pub enum HistoricalValidationError {
    Multiple(Vec<HistoricalValidationError>),
    Row(usize, Box<HistoricalValidationError>),
    MissingHistorical,
    MissingField(&'static str),
    InvalidDate(String),
}

impl fmt::Display for HistoricalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoricalValidationError::Multiple(errors) => {
                writeln!(f, "Historical validation errors:")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            HistoricalValidationError::Row(index, err) => write!(f, "row {index}: {err}"),
            HistoricalValidationError::MissingHistorical => {
                write!(f, "response has no `historical` array")
            }
            HistoricalValidationError::MissingField(field) => write!(f, "missing field `{field}`"),
            HistoricalValidationError::InvalidDate(value) => write!(f, "invalid date: {value:?}"),
        }
    }
}

impl std::error::Error for HistoricalValidationError {}
