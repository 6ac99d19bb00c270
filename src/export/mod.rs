//! CSV export of loaded historical rows.
//!
//! [`to_csv`] builds the file in memory; a [`FileSink`] decides where it goes.

pub mod sink;

pub use sink::{DirectorySink, FileSink};

use crate::domain::historical::HistoricalRow;
use crate::error::ExportError;
use crate::shared::Ticker;

/// MIME type of the exported file.
pub const CSV_MIME: &str = "text/csv";

/// Column headers, in the backend's key order.
pub const CSV_COLUMNS: [&str; 13] = [
    "date",
    "open",
    "high",
    "low",
    "close",
    "adjClose",
    "volume",
    "unadjustedVolume",
    "change",
    "changePercent",
    "vwap",
    "label",
    "changeOverTime",
];

/// A ready-to-save CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub mime: &'static str,
    pub contents: String,
}

/// Serialize `rows` (in the given order) for `ticker`.
///
/// Fails with [`ExportError::NoData`] when there is nothing to export.
/// Fields containing commas, quotes or newlines are quoted.
pub fn to_csv(ticker: &Ticker, rows: &[HistoricalRow]) -> Result<CsvExport, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_COLUMNS)?;
    for row in rows {
        writer.write_record(record(row))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    let contents = String::from_utf8(bytes)?;

    tracing::debug!(ticker = %ticker, rows = rows.len(), "Built CSV export");

    Ok(CsvExport {
        filename: ticker.export_filename(),
        mime: CSV_MIME,
        contents,
    })
}

fn record(row: &HistoricalRow) -> [String; 13] {
    let opt = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
    [
        row.date.clone(),
        row.open.to_string(),
        row.high.to_string(),
        row.low.to_string(),
        row.close.to_string(),
        opt(row.adj_close),
        row.volume.to_string(),
        opt(row.unadjusted_volume),
        opt(row.change),
        opt(row.change_percent),
        opt(row.vwap),
        row.label.clone().unwrap_or_default(),
        opt(row.change_over_time),
    ]
}
