//! Predictions sub-client — forwards history to the model.

use crate::client::PredictClient;
use crate::domain::historical::HistoricalRow;
use crate::domain::prediction::wire::{PredictRequest, PredictionResponse};
use crate::domain::prediction::{Prediction, PredictionValidationError};
use crate::error::SdkError;
use crate::http::Transport;
use crate::network::PREDICT_PATH;

/// Sub-client for the prediction service.
pub struct Predictions<'a, T: Transport> {
    pub(crate) client: &'a PredictClient<T>,
}

impl<'a, T: Transport> Predictions<'a, T> {
    pub fn url(&self) -> String {
        format!("{}{}", self.client.prediction_url, PREDICT_PATH)
    }

    /// POST `{ "ticker_data": rows }` and validate the model's answer.
    pub async fn predict(&self, rows: &[HistoricalRow]) -> Result<Prediction, SdkError> {
        let body = serde_json::to_value(PredictRequest { ticker_data: rows })?;
        let resp = self
            .client
            .transport
            .post_json(&self.url(), &body)
            .await
            .map_err(|e| {
                tracing::warn!(rows = rows.len(), error = %e, "Prediction request failed");
                e
            })?;

        let resp: PredictionResponse = serde_json::from_value(resp)?;
        let prediction = Prediction::try_from(resp).map_err(|e: PredictionValidationError| {
            tracing::warn!(error = %e, "Prediction response rejected");
            SdkError::Validation(e.to_string())
        })?;

        tracing::debug!(points = prediction.len(), "Received prediction");
        Ok(prediction)
    }
}
