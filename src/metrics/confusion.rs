//! Confusion matrix and derived metrics

use crate::error::{InsightError, Result};
use serde::{Deserialize, Serialize};

/// A 2x2 confusion matrix for binary anomaly classification.
///
/// Rows are the actual class (negative = normal, positive = anomaly),
/// columns are the predicted class, so the cell layout matches the usual
/// `[[TN, FP], [FN, TP]]` presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    tn: u64,
    fp: u64,
    #[serde(rename = "fn")]
    fn_: u64,
    tp: u64,
}

impl ConfusionMatrix {
    /// Create a matrix from individual cell counts
    pub fn new(tn: u64, fp: u64, fn_: u64, tp: u64) -> Self {
        Self { tn, fp, fn_, tp }
    }

    /// Create a matrix from row-major `[[TN, FP], [FN, TP]]` counts
    pub fn from_rows(rows: [[u64; 2]; 2]) -> Self {
        Self::new(rows[0][0], rows[0][1], rows[1][0], rows[1][1])
    }

    /// Row-major `[[TN, FP], [FN, TP]]` view of the counts
    pub fn to_rows(&self) -> [[u64; 2]; 2] {
        [[self.tn, self.fp], [self.fn_, self.tp]]
    }

    /// True negative count
    pub fn true_negatives(&self) -> u64 {
        self.tn
    }

    /// False positive count
    pub fn false_positives(&self) -> u64 {
        self.fp
    }

    /// False negative count
    pub fn false_negatives(&self) -> u64 {
        self.fn_
    }

    /// True positive count
    pub fn true_positives(&self) -> u64 {
        self.tp
    }

    /// Total number of classified samples
    pub fn total(&self) -> u64 {
        self.tn + self.fp + self.fn_ + self.tp
    }

    /// Number of samples whose actual class is positive (second row sum)
    pub fn actual_positives(&self) -> u64 {
        self.fn_ + self.tp
    }

    /// Number of samples whose actual class is negative (first row sum)
    pub fn actual_negatives(&self) -> u64 {
        self.tn + self.fp
    }

    /// Derive the metric set for this matrix.
    ///
    /// See [`MetricSet::from_confusion`] for the degenerate-matrix policy.
    pub fn metrics(&self) -> Result<MetricSet> {
        MetricSet::from_confusion(self)
    }
}

/// Derived classification metrics, each conceptually in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

impl MetricSet {
    /// Compute accuracy, precision, recall, and F1 from a confusion matrix.
    ///
    /// Every zero denominator is an error naming the metric that could not
    /// be derived: an empty matrix (accuracy), no predicted positives
    /// (precision), no actual positives (recall), or precision + recall
    /// both zero (F1). NaN never escapes this function.
    pub fn from_confusion(matrix: &ConfusionMatrix) -> Result<Self> {
        let tp = matrix.true_positives() as f64;
        let tn = matrix.true_negatives() as f64;
        let fp = matrix.false_positives() as f64;
        let fn_ = matrix.false_negatives() as f64;

        let total = tp + tn + fp + fn_;
        if total == 0.0 {
            return Err(InsightError::DivisionByZero("accuracy"));
        }
        let accuracy = (tp + tn) / total;

        if tp + fp == 0.0 {
            return Err(InsightError::DivisionByZero("precision"));
        }
        let precision = tp / (tp + fp);

        if tp + fn_ == 0.0 {
            return Err(InsightError::DivisionByZero("recall"));
        }
        let recall = tp / (tp + fn_);

        if precision + recall == 0.0 {
            return Err(InsightError::DivisionByZero("f1_score"));
        }
        let f1_score = 2.0 * precision * recall / (precision + recall);

        Ok(Self {
            accuracy,
            precision,
            recall,
            f1_score,
        })
    }

    /// Check that every metric lies in `[0, 1]`.
    ///
    /// Out-of-range values cannot arise from a well-formed matrix; they
    /// indicate a record deserialized from an untrusted source.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("accuracy", self.accuracy),
            ("precision", self.precision),
            ("recall", self.recall),
            ("f1_score", self.f1_score),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(InsightError::InvalidInput(format!(
                    "{name} = {value} is outside [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_matrix() {
        let matrix = ConfusionMatrix::from_rows([[142, 8], [10, 40]]);
        let metrics = matrix.metrics().unwrap();

        assert!((metrics.accuracy - 0.91).abs() < 1e-12);
        assert!((metrics.precision - 40.0 / 48.0).abs() < 1e-12);
        assert!((metrics.recall - 0.8).abs() < 1e-12);
        assert!((metrics.f1_score - 0.8163265306122449).abs() < 1e-12);
    }

    #[test]
    fn test_metrics_deterministic() {
        let matrix = ConfusionMatrix::new(142, 8, 10, 40);
        let a = matrix.metrics().unwrap();
        let b = matrix.metrics().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_metrics_in_unit_interval() {
        let matrix = ConfusionMatrix::new(90, 10, 5, 95);
        let metrics = matrix.metrics().unwrap();
        assert!(metrics.validate().is_ok());
    }

    #[test]
    fn test_all_zero_matrix_is_an_error() {
        let matrix = ConfusionMatrix::new(0, 0, 0, 0);
        let err = matrix.metrics().unwrap_err();
        assert!(matches!(err, InsightError::DivisionByZero("accuracy")));
    }

    #[test]
    fn test_no_predicted_positives() {
        let matrix = ConfusionMatrix::new(100, 0, 10, 0);
        let err = matrix.metrics().unwrap_err();
        assert!(matches!(err, InsightError::DivisionByZero("precision")));
    }

    #[test]
    fn test_no_actual_positives() {
        let matrix = ConfusionMatrix::new(100, 5, 0, 0);
        let err = matrix.metrics().unwrap_err();
        // TP + FP = 5, so precision is derivable; recall is not.
        assert!(matches!(err, InsightError::DivisionByZero("recall")));
    }

    #[test]
    fn test_f1_undefined_when_both_rates_zero() {
        // TP = 0 with both FP and FN present: precision = recall = 0.
        let matrix = ConfusionMatrix::new(100, 5, 10, 0);
        let err = matrix.metrics().unwrap_err();
        assert!(matches!(err, InsightError::DivisionByZero("f1_score")));
    }

    #[test]
    fn test_row_accessors() {
        let matrix = ConfusionMatrix::from_rows([[142, 8], [10, 40]]);
        assert_eq!(matrix.total(), 200);
        assert_eq!(matrix.actual_negatives(), 150);
        assert_eq!(matrix.actual_positives(), 50);
        assert_eq!(matrix.to_rows(), [[142, 8], [10, 40]]);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let metrics = MetricSet {
            accuracy: 1.2,
            precision: 0.9,
            recall: 0.8,
            f1_score: 0.85,
        };
        assert!(metrics.validate().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let matrix = ConfusionMatrix::new(142, 8, 10, 40);
        let json = serde_json::to_string(&matrix).unwrap();
        assert!(json.contains("\"fn\":10"));
        let back: ConfusionMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, matrix);
    }
}
