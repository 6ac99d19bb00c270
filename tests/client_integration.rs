//! Integration tests for `PredictClient` and `PredictSession`.
//!
//! A scripted in-memory transport stands in for both services, so these
//! tests exercise the full search → predict → export path without network
//! access.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use ticker_predict::error::{ExportError, HttpError, SdkError};
use ticker_predict::export::{CsvExport, FileSink};
use ticker_predict::http::Transport;
use ticker_predict::prelude::*;

// ─── Scripted transport ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Get(String),
    Post(String, Value),
}

#[derive(Default)]
struct Script {
    responses: VecDeque<Result<Value, HttpError>>,
    calls: Vec<Call>,
}

/// Answers requests from a queue, recording every call it receives.
#[derive(Clone, Default)]
struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    fn respond(self, response: Result<Value, HttpError>) -> Self {
        self.script.lock().unwrap().responses.push_back(response);
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.script.lock().unwrap().calls.clone()
    }

    fn next(&self, call: Call) -> Result<Value, HttpError> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(call);
        script
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::Timeout))
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get_json(&self, url: &str) -> Result<Value, HttpError> {
        self.next(Call::Get(url.to_string()))
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, HttpError> {
        self.next(Call::Post(url.to_string(), body.clone()))
    }
}

#[derive(Default)]
struct MemorySink {
    saved: Vec<CsvExport>,
}

impl FileSink for MemorySink {
    fn save(&mut self, export: &CsvExport) -> Result<(), ExportError> {
        self.saved.push(export.clone());
        Ok(())
    }
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

fn historical_body() -> Value {
    json!({
        "symbol": "AAPL",
        "historical": [
            {
                "date": "2023-01-03", "open": 130.28, "high": 130.0, "low": 124.0,
                "close": 125.07, "adjClose": 124.22, "volume": 112117500.0,
                "unadjustedVolume": 112117500.0, "change": -5.21, "changePercent": -3.999,
                "vwap": 126.36, "label": "January 03, 23", "changeOverTime": -0.03999
            },
            {
                "date": "2023-01-04", "open": 126.89, "high": 128.0, "low": 125.0,
                "close": 126.36, "adjClose": 125.5, "volume": 89113600.0,
                "unadjustedVolume": 89113600.0, "change": -0.53, "changePercent": -0.418,
                "vwap": 126.75, "label": "January 04, 23", "changeOverTime": -0.00418
            }
        ]
    })
}

fn prediction_body() -> Value {
    json!({
        "original_prices": [
            {"date": "2023-01-03", "close": 125.07},
            {"date": "2023-01-04", "close": 126.36}
        ],
        "predicted_prices": [124.8, 126.9]
    })
}

fn client(transport: ScriptedTransport) -> PredictClient<ScriptedTransport> {
    PredictClientBuilder::default()
        .historical_url("http://hist.test")
        .prediction_url("http://model.test")
        .build_with_transport(transport)
}

fn dates(rows: &[HistoricalRow]) -> Vec<String> {
    rows.iter().map(HistoricalRow::date_label).collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_search_fetches_history_then_prediction() {
    let transport = ScriptedTransport::default()
        .respond(Ok(historical_body()))
        .respond(Ok(prediction_body()));
    let client = client(transport.clone());
    let mut session = PredictSession::new();
    session.set_query("AAPL");

    let outcome = client.search(&mut session).await.unwrap();

    assert_eq!(
        outcome,
        SearchOutcome {
            history: ApplyOutcome::Applied,
            prediction: Some(ApplyOutcome::Applied),
        }
    );

    // Displayed rows are the reverse of the response; the chart keeps API order.
    assert_eq!(dates(session.rows()), ["2023-01-04", "2023-01-03"]);
    let chart = session.chart().unwrap();
    assert_eq!(chart.labels, ["2023-01-03", "2023-01-04"]);
    assert_eq!(chart.dataset("high").unwrap().data, [130.0, 128.0]);
    assert_eq!(chart.dataset("low").unwrap().data, [124.0, 125.0]);
    assert!(chart.is_aligned());

    let prediction = session.prediction_phase().prediction().unwrap();
    assert_eq!(prediction.predicted(), [124.8, 126.9]);
    assert!(session.prediction_chart().unwrap().is_aligned());
}

#[tokio::test]
async fn test_requests_hit_expected_endpoints_with_api_order_body() {
    let transport = ScriptedTransport::default()
        .respond(Ok(historical_body()))
        .respond(Ok(prediction_body()));
    let client = client(transport.clone());
    let mut session = PredictSession::new();
    session.set_query("AAPL");

    client.search(&mut session).await.unwrap();

    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0],
        Call::Get("http://hist.test/daily-historical?ticker=AAPL".to_string())
    );
    match &calls[1] {
        Call::Post(url, body) => {
            assert_eq!(url, "http://model.test/predict-with-enhanced-model");
            let forwarded = body["ticker_data"].as_array().unwrap();
            assert_eq!(forwarded.len(), 2);
            // Forwarded un-reversed, with the backend's field names.
            assert_eq!(forwarded[0]["date"], "2023-01-03");
            assert_eq!(forwarded[1]["date"], "2023-01-04");
            assert_eq!(forwarded[0]["adjClose"], 124.22);
            assert_eq!(forwarded[0]["label"], "January 03, 23");
        }
        other => panic!("expected POST, got {other:?}"),
    }
}

#[tokio::test]
async fn test_dates_are_forwarded_as_fetched() {
    let mut body = historical_body();
    body["historical"][0]["date"] = json!("2023-01-03 00:00:00");
    let transport = ScriptedTransport::default()
        .respond(Ok(body))
        .respond(Ok(prediction_body()));
    let client = client(transport.clone());
    let mut session = PredictSession::new();
    session.set_query("AAPL");

    client.search(&mut session).await.unwrap();

    match &transport.calls()[1] {
        Call::Post(_, body) => {
            assert_eq!(body["ticker_data"][0]["date"], "2023-01-03 00:00:00");
            assert_eq!(body["ticker_data"][1]["date"], "2023-01-04");
        }
        other => panic!("expected POST, got {other:?}"),
    }
    assert_eq!(session.chart().unwrap().labels, ["2023-01-03", "2023-01-04"]);
    let csv = session.export_csv().unwrap().contents;
    assert!(csv.lines().last().unwrap().starts_with("2023-01-03 00:00:00,"));
}

#[tokio::test]
async fn test_export_of_slashed_ticker_saves_in_directory() {
    let transport = ScriptedTransport::default()
        .respond(Ok(historical_body()))
        .respond(Ok(prediction_body()));
    let client = client(transport);
    let mut session = PredictSession::new();
    session.set_query("BRK/B");
    client.search(&mut session).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let mut sink = DirectorySink::new(dir.path());
    let export = session.export_csv().unwrap();
    sink.save(&export).unwrap();

    assert_eq!(export.filename, "BRK_B_5_year_data.csv");
    assert!(dir.path().join("BRK_B_5_year_data.csv").is_file());
}

#[tokio::test]
async fn test_ticker_is_passed_through_encoded() {
    let transport = ScriptedTransport::default().respond(Ok(json!({ "historical": [] })));
    let client = client(transport.clone());

    let rows = client.historical().get(&Ticker::from("BRK B&")).await.unwrap();
    assert!(rows.is_empty());

    let empty = client.historical().url(&Ticker::default());
    assert_eq!(empty, "http://hist.test/daily-historical?ticker=");
    assert_eq!(
        transport.calls(),
        [Call::Get("http://hist.test/daily-historical?ticker=BRK%20B%26".to_string())]
    );
}

#[tokio::test]
async fn test_history_transport_failure_skips_prediction() {
    let transport = ScriptedTransport::default().respond(Err(HttpError::ServerError {
        status: 500,
        body: "down".to_string(),
    }));
    let client = client(transport.clone());
    let mut session = PredictSession::new();
    session.set_query("AAPL");

    let err = client.search(&mut session).await.unwrap_err();

    assert!(matches!(err, SdkError::Http(HttpError::ServerError { status: 500, .. })));
    assert!(session.history_phase().is_failed());
    assert_eq!(session.prediction_phase(), &PredictionPhase::Idle);
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn test_malformed_history_is_a_typed_error() {
    let transport = ScriptedTransport::default().respond(Ok(json!({ "error": "unknown ticker" })));
    let client = client(transport);
    let mut session = PredictSession::new();
    session.set_query("NOPE");

    let err = client.search(&mut session).await.unwrap_err();

    assert!(matches!(err, SdkError::Validation(ref msg) if msg.contains("historical")));
    assert!(session.rows().is_empty());
    assert!(session.chart().is_none());
}

#[tokio::test]
async fn test_wrongly_typed_history_is_a_serde_error() {
    let transport = ScriptedTransport::default().respond(Ok(json!({ "historical": "nope" })));
    let client = client(transport);

    let err = client.historical().get(&Ticker::from("AAPL")).await.unwrap_err();
    assert!(matches!(err, SdkError::Serde(_)));
}

#[tokio::test]
async fn test_prediction_failure_keeps_history() {
    let transport = ScriptedTransport::default()
        .respond(Ok(historical_body()))
        .respond(Ok(json!({
            "original_prices": [{"date": "2023-01-03", "close": 125.07}],
            "predicted_prices": [1.0, 2.0]
        })));
    let client = client(transport);
    let mut session = PredictSession::new();
    session.set_query("AAPL");

    let err = client.search(&mut session).await.unwrap_err();

    assert!(matches!(err, SdkError::Validation(_)));
    assert_eq!(session.history_phase(), &HistoryPhase::Loaded);
    assert_eq!(session.rows().len(), 2);
    assert!(session.prediction_phase().is_failed());
    assert!(session.prediction_chart().is_none());
}

#[tokio::test]
async fn test_late_history_for_old_query_is_dropped() {
    let transport = ScriptedTransport::default().respond(Ok(historical_body()));
    let client = client(transport.clone());
    let mut session = PredictSession::new();
    session.set_query("AAPL");

    let token = session.begin_search();
    let pending = client.historical().get(token.ticker()).await;
    // The user kept typing before the response was applied.
    session.set_query("AAPLE");
    let applied = session.apply_history(&token, pending.as_deref());

    assert_eq!(applied, ApplyOutcome::Stale);
    assert_eq!(session.history_phase(), &HistoryPhase::Idle);
    assert!(session.rows().is_empty());
    assert!(session.chart().is_none());
    assert!(!session.begin_prediction(&token));
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn test_export_after_search() {
    let transport = ScriptedTransport::default()
        .respond(Ok(historical_body()))
        .respond(Ok(prediction_body()));
    let client = client(transport);
    let mut session = PredictSession::new();
    session.set_query("AAPL");
    client.search(&mut session).await.unwrap();

    let export = session.export_csv().unwrap();
    let mut sink = MemorySink::default();
    sink.save(&export).unwrap();

    let saved = &sink.saved[0];
    assert_eq!(saved.filename, "AAPL_5_year_data.csv");
    assert_eq!(saved.mime, "text/csv");

    let lines: Vec<&str> = saved.contents.lines().collect();
    assert_eq!(lines.len(), session.rows().len() + 1);

    let mut reader = csv::Reader::from_reader(saved.contents.as_bytes());
    let header_len = reader.headers().unwrap().len();
    for record in reader.records() {
        assert_eq!(record.unwrap().len(), header_len);
    }
    assert!(lines[1].starts_with("2023-01-04,"));
}

#[tokio::test]
async fn test_export_before_search_has_no_data() {
    let mut session = PredictSession::new();
    session.set_query("AAPL");
    assert!(matches!(session.export_csv(), Err(ExportError::NoData)));
}
