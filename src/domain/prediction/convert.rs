//! Conversion: PredictionResponse → Prediction (TryFrom + validation).

use super::wire::PredictionResponse;
use super::{Prediction, PredictionPoint, PredictionValidationError};

impl TryFrom<PredictionResponse> for Prediction {
    type Error = PredictionValidationError;

    fn try_from(source: PredictionResponse) -> Result<Self, Self::Error> {
        let original = source
            .original_prices
            .ok_or(PredictionValidationError::MissingOriginalPrices)?;
        let predicted = source
            .predicted_prices
            .ok_or(PredictionValidationError::MissingPredictedPrices)?;

        if original.len() != predicted.len() {
            return Err(PredictionValidationError::LengthMismatch {
                original: original.len(),
                predicted: predicted.len(),
            });
        }

        let mut errors = Vec::new();
        let mut points = Vec::with_capacity(original.len());
        for (index, (price, predicted)) in original.into_iter().zip(predicted).enumerate() {
            match (price.date, price.close) {
                (Some(date), Some(actual)) => points.push(PredictionPoint {
                    date,
                    actual,
                    predicted,
                }),
                (date, close) => {
                    if date.is_none() {
                        errors.push(PredictionValidationError::MissingField {
                            index,
                            field: "date",
                        });
                    }
                    if close.is_none() {
                        errors.push(PredictionValidationError::MissingField {
                            index,
                            field: "close",
                        });
                    }
                }
            }
        }

        if !errors.is_empty() {
            return Err(PredictionValidationError::Multiple(errors));
        }

        Ok(Prediction { points })
    }
}
