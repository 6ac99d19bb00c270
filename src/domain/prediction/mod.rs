//! Prediction domain — the model's predicted closes next to the actual ones.

pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};
use std::fmt;

/// One date with its actual and predicted close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    /// Date label exactly as the prediction service formats it.
    pub date: String,
    pub actual: f64,
    pub predicted: f64,
}

/// A validated prediction, points index-aligned in service order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Prediction {
    pub points: Vec<PredictionPoint>,
}

impl Prediction {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.date.clone()).collect()
    }

    pub fn actual(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.actual).collect()
    }

    pub fn predicted(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.predicted).collect()
    }

    /// Mean absolute difference between predicted and actual close.
    ///
    /// `None` for an empty prediction.
    pub fn mean_absolute_error(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        let total: f64 = self
            .points
            .iter()
            .map(|p| (p.predicted - p.actual).abs())
            .sum();
        Some(total / self.points.len() as f64)
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
pub enum PredictionValidationError {
    Multiple(Vec<PredictionValidationError>),
    MissingOriginalPrices,
    MissingPredictedPrices,
    LengthMismatch { original: usize, predicted: usize },
    MissingField { index: usize, field: &'static str },
}

impl fmt::Display for PredictionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionValidationError::Multiple(errors) => {
                writeln!(f, "Prediction validation errors:")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            PredictionValidationError::MissingOriginalPrices => {
                write!(f, "response has no `original_prices` array")
            }
            PredictionValidationError::MissingPredictedPrices => {
                write!(f, "response has no `predicted_prices` array")
            }
            PredictionValidationError::LengthMismatch {
                original,
                predicted,
            } => write!(
                f,
                "{original} original prices but {predicted} predicted prices"
            ),
            PredictionValidationError::MissingField { index, field } => {
                write!(f, "original_prices[{index}] missing `{field}`")
            }
        }
    }
}

impl std::error::Error for PredictionValidationError {}
