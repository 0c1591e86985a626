//! Exact-decimal encoding of confidence scores.
//!
//! Scores travel as `f64` in responses but are stored as decimals so the
//! persisted record carries the same digits the classifier reported.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{AnalysisError, AnalysisResult};
use crate::model::ConfidenceScores;

/// Lossless decimal encoding of a float already known to lie in [0, 1].
///
/// Goes through the float's shortest round-trip rendering, so `0.98` becomes
/// the decimal `0.98` rather than its binary expansion. Digits beyond
/// `Decimal`'s 28-digit scale are rounded away. Failures are persistence
/// errors, since only the stored copy needs the decimal form.
pub fn to_exact_decimal(value: f64) -> AnalysisResult<Decimal> {
    if !value.is_finite() {
        return Err(AnalysisError::Persistence(anyhow::anyhow!(
            "Cannot store non-finite confidence score {}",
            value
        )));
    }
    Decimal::from_str(&value.to_string()).map_err(|e| {
        AnalysisError::Persistence(anyhow::anyhow!(
            "Failed to encode confidence score {} as decimal: {}",
            value,
            e
        ))
    })
}

/// Confidence scores in their stored, exact-decimal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalScores {
    #[serde(rename = "POSITIVE")]
    pub positive: Decimal,
    #[serde(rename = "NEGATIVE")]
    pub negative: Decimal,
    #[serde(rename = "NEUTRAL")]
    pub neutral: Decimal,
    #[serde(rename = "MIXED")]
    pub mixed: Decimal,
}

impl DecimalScores {
    pub fn from_scores(scores: &ConfidenceScores) -> AnalysisResult<Self> {
        Ok(Self {
            positive: to_exact_decimal(scores.positive)?,
            negative: to_exact_decimal(scores.negative)?,
            neutral: to_exact_decimal(scores.neutral)?,
            mixed: to_exact_decimal(scores.mixed)?,
        })
    }

    /// Back to native floats. `None` if a value does not fit an `f64`.
    pub fn to_f64(&self) -> Option<ConfidenceScores> {
        Some(ConfidenceScores {
            positive: self.positive.to_f64()?,
            negative: self.negative.to_f64()?,
            neutral: self.neutral.to_f64()?,
            mixed: self.mixed.to_f64()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_floats_keep_their_digits() {
        assert_eq!(to_exact_decimal(0.98).unwrap().to_string(), "0.98");
        assert_eq!(to_exact_decimal(0.005).unwrap().to_string(), "0.005");
        assert_eq!(to_exact_decimal(0.0).unwrap(), Decimal::ZERO);
        assert_eq!(to_exact_decimal(1.0).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_long_floats_are_not_binary_expanded() {
        let value = 0.9987654321234567_f64;
        let decimal = to_exact_decimal(value).unwrap();
        assert_eq!(decimal.to_string(), value.to_string());
    }

    #[test]
    fn test_small_values_without_exponent() {
        let decimal = to_exact_decimal(1.5e-7).unwrap();
        assert_eq!(decimal, Decimal::from_str("0.00000015").unwrap());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(to_exact_decimal(f64::NAN), Err(AnalysisError::Persistence(_))));
        assert!(matches!(to_exact_decimal(f64::INFINITY), Err(AnalysisError::Persistence(_))));
    }

    #[test]
    fn test_stored_and_returned_scores_agree() {
        let scores = ConfidenceScores {
            positive: 0.9876543210123457,
            negative: 0.00012345,
            neutral: 0.011,
            mixed: 0.0001111,
        };
        let stored = DecimalScores::from_scores(&scores).unwrap();
        let back = stored.to_f64().unwrap();
        for ((_, original), (_, restored)) in scores.entries().iter().zip(back.entries().iter()) {
            assert!((original - restored).abs() < 1e-15, "{} != {}", original, restored);
        }
        // Re-encoding the response value yields the exact stored decimal.
        assert_eq!(DecimalScores::from_scores(&scores).unwrap(), stored);
    }

    #[test]
    fn test_decimals_serialize_as_strings() {
        let scores = ConfidenceScores { positive: 0.98, negative: 0.01, neutral: 0.005, mixed: 0.005 };
        let json = serde_json::to_value(DecimalScores::from_scores(&scores).unwrap()).unwrap();
        assert_eq!(json["POSITIVE"], "0.98");
        assert_eq!(json["MIXED"], "0.005");
    }
}
