//! Chart domain — label/value projections ready for a line-chart renderer.
//!
//! A [`ChartSeries`] is always derived from other data and never fetched.
//! Every dataset is index-aligned with `labels`.

use crate::domain::historical::HistoricalRow;
use crate::domain::prediction::Prediction;
use serde::{Deserialize, Serialize};

pub const HIGH_COLOR: &str = "rgba(75,192,192,1)";
pub const LOW_COLOR: &str = "red";
pub const ACTUAL_COLOR: &str = "rgba(54,162,235,1)";
pub const PREDICTED_COLOR: &str = "rgba(255,159,64,1)";

/// One named line on a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub border_width: u32,
}

impl Dataset {
    fn line(label: &str, data: Vec<f64>, color: &str) -> Self {
        Self {
            label: label.to_string(),
            data,
            border_color: color.to_string(),
            border_width: 1,
        }
    }
}

/// Axis titles shown next to a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub x_title: String,
    pub y_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub axes: Axes,
}

impl ChartSeries {
    /// Daily `high` and `low` lines keyed by date, in the order of `rows`.
    pub fn high_low(rows: &[HistoricalRow]) -> Self {
        Self {
            labels: rows.iter().map(HistoricalRow::date_label).collect(),
            datasets: vec![
                Dataset::line("high", rows.iter().map(|r| r.high).collect(), HIGH_COLOR),
                Dataset::line("low", rows.iter().map(|r| r.low).collect(), LOW_COLOR),
            ],
            axes: Axes {
                x_title: "Date".to_string(),
                y_title: "Daily High".to_string(),
            },
        }
    }

    /// Actual vs predicted close prices from a prediction.
    pub fn actual_vs_predicted(prediction: &Prediction) -> Self {
        Self {
            labels: prediction.labels(),
            datasets: vec![
                Dataset::line("actual", prediction.actual(), ACTUAL_COLOR),
                Dataset::line("predicted", prediction.predicted(), PREDICTED_COLOR),
            ],
            axes: Axes {
                x_title: "Date".to_string(),
                y_title: "Close".to_string(),
            },
        }
    }

    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.label == label)
    }

    pub fn is_aligned(&self) -> bool {
        self.datasets.iter().all(|d| d.data.len() == self.labels.len())
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
