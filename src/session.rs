//! Predict view state — app-owned, SDK-provided update logic.
//!
//! A [`PredictSession`] holds everything the view renders: the query, the
//! loaded rows, both charts and the phase of each request. Requests are
//! tagged with a [`SearchToken`]; results whose token is no longer current
//! are dropped instead of overwriting newer state.

use crate::domain::chart::ChartSeries;
use crate::domain::historical::HistoricalRow;
use crate::domain::prediction::Prediction;
use crate::error::{ExportError, SdkError};
use crate::export::{self, CsvExport};
use crate::shared::Ticker;

/// Identity of one search: the query it was issued for and its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchToken {
    generation: u64,
    ticker: Ticker,
}

impl SearchToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }
}

/// Whether a result was written into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Stale,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum HistoryPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl HistoryPhase {
    pub fn is_failed(&self) -> bool {
        matches!(self, HistoryPhase::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PredictionPhase {
    #[default]
    Idle,
    Predicting,
    Ready(Prediction),
    Failed(String),
}

impl PredictionPhase {
    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            PredictionPhase::Ready(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PredictionPhase::Failed(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PredictSession {
    query: Ticker,
    searched: bool,
    generation: u64,
    /// Display order: reverse of the service order.
    rows: Vec<HistoricalRow>,
    chart: Option<ChartSeries>,
    history: HistoryPhase,
    prediction: PredictionPhase,
    prediction_chart: Option<ChartSeries>,
}

impl PredictSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Query input ──────────────────────────────────────────────────────

    /// Replace the query verbatim and drop the loaded rows.
    ///
    /// Charts stay on screen until the next search replaces them. If the
    /// text changed, any request still in flight becomes stale and its
    /// pending phase falls back to idle.
    pub fn set_query(&mut self, text: impl Into<String>) {
        let query = Ticker::new(text);
        if query != self.query {
            if self.history == HistoryPhase::Loading {
                self.history = HistoryPhase::Idle;
            }
            if self.prediction == PredictionPhase::Predicting {
                self.prediction = PredictionPhase::Idle;
            }
        }
        self.query = query;
        self.rows.clear();
    }

    pub fn query(&self) -> &Ticker {
        &self.query
    }

    // ── Historical fetch ─────────────────────────────────────────────────

    /// Start a search for the current query and return its token.
    pub fn begin_search(&mut self) -> SearchToken {
        self.generation += 1;
        self.searched = true;
        self.history = HistoryPhase::Loading;
        self.prediction = PredictionPhase::Idle;
        self.prediction_chart = None;
        SearchToken {
            generation: self.generation,
            ticker: self.query.clone(),
        }
    }

    /// True if `token` belongs to the latest search and the query has not
    /// changed since it was issued.
    pub fn is_current(&self, token: &SearchToken) -> bool {
        token.generation == self.generation && token.ticker == self.query
    }

    /// Apply a historical result. `rows` are in service order.
    pub fn apply_history(
        &mut self,
        token: &SearchToken,
        result: Result<&[HistoricalRow], &SdkError>,
    ) -> ApplyOutcome {
        if !self.is_current(token) {
            tracing::warn!(
                ticker = %token.ticker,
                generation = token.generation,
                current = %self.query,
                "Dropping stale historical result"
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(rows) => {
                self.chart = Some(ChartSeries::high_low(rows));
                self.rows = rows.iter().rev().cloned().collect();
                self.history = HistoryPhase::Loaded;
                tracing::info!(ticker = %token.ticker, rows = rows.len(), "Historical data loaded");
            }
            Err(e) => {
                tracing::error!(ticker = %token.ticker, error = %e, "Error searching ticker");
                self.history = HistoryPhase::Failed(e.to_string());
            }
        }
        ApplyOutcome::Applied
    }

    // ── Prediction ───────────────────────────────────────────────────────

    /// Mark the prediction as in flight. Returns false (and changes nothing)
    /// if the token is stale or the history did not load.
    pub fn begin_prediction(&mut self, token: &SearchToken) -> bool {
        if !self.is_current(token) || self.history != HistoryPhase::Loaded {
            return false;
        }
        self.prediction = PredictionPhase::Predicting;
        self.prediction_chart = None;
        true
    }

    pub fn apply_prediction(
        &mut self,
        token: &SearchToken,
        result: Result<&Prediction, &SdkError>,
    ) -> ApplyOutcome {
        if !self.is_current(token) || self.prediction != PredictionPhase::Predicting {
            tracing::warn!(
                ticker = %token.ticker,
                generation = token.generation,
                current = %self.query,
                "Dropping stale prediction result"
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(prediction) => {
                self.prediction_chart = Some(ChartSeries::actual_vs_predicted(prediction));
                self.prediction = PredictionPhase::Ready(prediction.clone());
                tracing::info!(ticker = %token.ticker, points = prediction.len(), "Prediction loaded");
            }
            Err(e) => {
                tracing::error!(ticker = %token.ticker, error = %e, "Error fetching prediction");
                self.prediction = PredictionPhase::Failed(e.to_string());
            }
        }
        ApplyOutcome::Applied
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Whether a search was ever started (the results area is shown).
    pub fn searched(&self) -> bool {
        self.searched
    }

    /// Loaded rows in display order (the reverse of the service order).
    pub fn rows(&self) -> &[HistoricalRow] {
        &self.rows
    }

    pub fn chart(&self) -> Option<&ChartSeries> {
        self.chart.as_ref()
    }

    pub fn history_phase(&self) -> &HistoryPhase {
        &self.history
    }

    pub fn prediction_phase(&self) -> &PredictionPhase {
        &self.prediction
    }

    pub fn prediction_chart(&self) -> Option<&ChartSeries> {
        self.prediction_chart.as_ref()
    }

    /// Heading shown above the historical chart.
    pub fn title(&self) -> String {
        format!("{}'s Historical Data of 5 years", self.query)
    }

    // ── Export ───────────────────────────────────────────────────────────

    /// CSV of the loaded rows, in display order.
    pub fn export_csv(&self) -> Result<CsvExport, ExportError> {
        export::to_csv(&self.query, &self.rows)
    }
}
