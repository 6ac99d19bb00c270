//! Search a ticker, show its history and prediction, and export the CSV.
//!
//! ```bash
//! cargo run --example search_and_predict -- AAPL ./exports
//! ```
//!
//! Service URLs come from `TICKER_PREDICT_HISTORICAL_URL` /
//! `TICKER_PREDICT_PREDICTION_URL` (a `.env` file is honoured) and default
//! to the local services.

use ticker_predict::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_chart(title: &str, chart: &ChartSeries) {
    println!("{title} ({} points)", chart.labels.len());
    for dataset in &chart.datasets {
        let min = dataset.data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = dataset.data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        println!("  {:<10} min {:>10.2}  max {:>10.2}", dataset.label, min, max);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let ticker = args.next().unwrap_or_else(|| "AAPL".to_string());
    let out_dir = args.next().unwrap_or_else(|| ".".to_string());

    let client = PredictClientBuilder::from_env()?.build()?;
    let mut session = PredictSession::new();
    session.set_query(ticker);

    if let Err(e) = client.search(&mut session).await {
        eprintln!("Search failed: {e}");
    }

    match session.history_phase() {
        HistoryPhase::Loaded => {
            println!("{}", session.title());
            if let Some(chart) = session.chart() {
                print_chart("Daily high / low", chart);
            }
        }
        HistoryPhase::Failed(reason) => println!("Could not load history: {reason}"),
        _ => println!("Loading..."),
    }

    match session.prediction_phase() {
        PredictionPhase::Ready(prediction) => {
            if let Some(chart) = session.prediction_chart() {
                print_chart("Actual vs predicted close", chart);
            }
            if let Some(mae) = prediction.mean_absolute_error() {
                println!("  mean absolute error {mae:.4}");
            }
        }
        PredictionPhase::Failed(reason) => println!("Prediction failed: {reason}"),
        PredictionPhase::Predicting => println!("Predicting..."),
        PredictionPhase::Idle => {}
    }

    match session.export_csv() {
        Ok(export) => {
            let mut sink = DirectorySink::new(&out_dir);
            sink.save(&export)?;
            println!("Wrote {}", sink.path_for(&export)?.display());
        }
        Err(ExportError::NoData) => println!("Nothing to export"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
