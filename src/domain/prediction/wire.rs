//! Wire types for the prediction endpoint (REST).

use crate::domain::historical::HistoricalRow;
use serde::{Deserialize, Serialize};

/// Request body for `POST /predict-with-enhanced-model`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest<'a> {
    pub ticker_data: &'a [HistoricalRow],
}

/// One actual close price echoed back by the model.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OriginalPriceResponse {
    pub date: Option<String>,
    pub close: Option<f64>,
}

/// REST response for `POST /predict-with-enhanced-model`.
///
/// `predicted_prices[i]` belongs to `original_prices[i]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PredictionResponse {
    pub original_prices: Option<Vec<OriginalPriceResponse>>,
    pub predicted_prices: Option<Vec<f64>>,
}
