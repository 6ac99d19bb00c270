//! Conversion: DailyHistoricalResponse → DailyHistory (TryFrom + validation).

use super::wire::{DailyHistoricalResponse, HistoricalRowResponse};
use super::{DailyHistory, HistoricalRow, HistoricalValidationError};
use chrono::NaiveDate;

impl TryFrom<HistoricalRowResponse> for HistoricalRow {
    type Error = HistoricalValidationError;

    fn try_from(source: HistoricalRowResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<HistoricalValidationError> = Vec::new();

        let date = match source.date {
            Some(raw) => {
                // A trailing time part is tolerated; only the day is parsed.
                let day = raw.get(..10).unwrap_or(raw.as_str());
                match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
                    Ok(day) => Some((raw, day)),
                    Err(_) => {
                        errors.push(HistoricalValidationError::InvalidDate(raw));
                        None
                    }
                }
            }
            None => {
                errors.push(HistoricalValidationError::MissingField("date"));
                None
            }
        };

        let mut required = |value: Option<f64>, field: &'static str| {
            value.unwrap_or_else(|| {
                errors.push(HistoricalValidationError::MissingField(field));
                0.0
            })
        };
        let open = required(source.open, "open");
        let high = required(source.high, "high");
        let low = required(source.low, "low");
        let close = required(source.close, "close");
        let volume = required(source.volume, "volume");

        match (date, errors.len()) {
            (Some((date, day)), 0) => Ok(HistoricalRow {
                date,
                day,
                open,
                high,
                low,
                close,
                adj_close: source.adj_close,
                volume,
                unadjusted_volume: source.unadjusted_volume,
                change: source.change,
                change_percent: source.change_percent,
                vwap: source.vwap,
                label: source.label,
                change_over_time: source.change_over_time,
            }),
            _ if errors.len() == 1 => Err(errors.remove(0)),
            _ => Err(HistoricalValidationError::Multiple(errors)),
        }
    }
}

impl TryFrom<DailyHistoricalResponse> for DailyHistory {
    type Error = HistoricalValidationError;

    fn try_from(source: DailyHistoricalResponse) -> Result<Self, Self::Error> {
        let raw_rows = source
            .historical
            .ok_or(HistoricalValidationError::MissingHistorical)?;

        let mut rows = Vec::with_capacity(raw_rows.len());
        let mut errors = Vec::new();
        for (index, raw) in raw_rows.into_iter().enumerate() {
            match HistoricalRow::try_from(raw) {
                Ok(row) => rows.push(row),
                Err(err) => errors.push(HistoricalValidationError::Row(index, Box::new(err))),
            }
        }

        if !errors.is_empty() {
            return Err(HistoricalValidationError::Multiple(errors));
        }

        Ok(DailyHistory {
            symbol: source.symbol,
            rows,
        })
    }
}
