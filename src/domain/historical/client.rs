//! Historical sub-client — daily OHLCV history per ticker.

use crate::client::PredictClient;
use crate::domain::historical::wire::DailyHistoricalResponse;
use crate::domain::historical::{DailyHistory, HistoricalRow, HistoricalValidationError};
use crate::error::SdkError;
use crate::http::Transport;
use crate::network::DAILY_HISTORICAL_PATH;
use crate::shared::Ticker;

/// Sub-client for the historical-data service.
pub struct Historical<'a, T: Transport> {
    pub(crate) client: &'a PredictClient<T>,
}

impl<'a, T: Transport> Historical<'a, T> {
    /// URL of the daily history for `ticker`. The ticker is percent-encoded
    /// but otherwise passed through, empty strings included.
    pub fn url(&self, ticker: &Ticker) -> String {
        format!(
            "{}{}?ticker={}",
            self.client.historical_url,
            DAILY_HISTORICAL_PATH,
            urlencoding::encode(ticker.as_str())
        )
    }

    /// Fetch the validated daily history, rows in service order.
    pub async fn history(&self, ticker: &Ticker) -> Result<DailyHistory, SdkError> {
        let url = self.url(ticker);
        let body = self.client.transport.get_json(&url).await.map_err(|e| {
            tracing::warn!(%ticker, error = %e, "Historical request failed");
            e
        })?;

        let resp: DailyHistoricalResponse = serde_json::from_value(body)?;
        let history = DailyHistory::try_from(resp).map_err(|e: HistoricalValidationError| {
            tracing::warn!(%ticker, error = %e, "Historical response rejected");
            SdkError::Validation(e.to_string())
        })?;

        tracing::debug!(%ticker, rows = history.rows.len(), "Fetched daily history");
        Ok(history)
    }

    /// Fetch the daily rows for `ticker`, in service order.
    pub async fn get(&self, ticker: &Ticker) -> Result<Vec<HistoricalRow>, SdkError> {
        Ok(self.history(ticker).await?.rows)
    }
}
