//! Baseline constants for the simulated backend
//!
//! Fixed feature weights, the reference model benchmark catalog, and the
//! recorded training-history curve the dashboard renders before any run
//! has completed.

use crate::explainability::FeatureImportance;
use crate::metrics::ConfusionMatrix;
use serde::{Deserialize, Serialize};

/// Benchmark entry for one algorithm in the comparison catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBenchmark {
    pub name: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub auc: f64,
    /// Display color the comparison charts use for this series
    pub color: String,
}

/// One epoch of the recorded training curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochRecord {
    pub epoch: u32,
    pub accuracy: f64,
    pub loss: f64,
}

/// Baseline feature-importance weights for the audit-log feature set.
///
/// Names and count are fixed; the simulator only perturbs the magnitudes.
pub fn baseline_feature_importance() -> Vec<FeatureImportance> {
    [
        ("user", 0.32),
        ("operation", 0.25),
        ("table", 0.15),
        ("ip_address", 0.12),
        ("status", 0.08),
        ("hour", 0.05),
        ("day_of_week", 0.03),
    ]
    .into_iter()
    .map(|(name, importance)| FeatureImportance {
        name: name.to_string(),
        importance,
    })
    .collect()
}

/// Reference benchmark scores for the algorithm-comparison view
pub fn reference_models() -> Vec<ModelBenchmark> {
    let rows: [(&str, f64, f64, f64, f64, f64, &str); 5] = [
        ("Random Forest", 0.92, 0.89, 0.85, 0.87, 0.94, "#2563EB"),
        ("Gradient Boosting", 0.94, 0.91, 0.89, 0.90, 0.95, "#14B8A6"),
        ("XGBoost", 0.95, 0.92, 0.90, 0.91, 0.97, "#6366F1"),
        ("SVM", 0.88, 0.85, 0.80, 0.82, 0.90, "#A855F7"),
        ("Neural Network", 0.93, 0.90, 0.87, 0.88, 0.95, "#EC4899"),
    ];

    rows.into_iter()
        .map(|(name, accuracy, precision, recall, f1, auc, color)| ModelBenchmark {
            name: name.to_string(),
            accuracy,
            precision,
            recall,
            f1,
            auc,
            color: color.to_string(),
        })
        .collect()
}

/// Recorded accuracy/loss curve shown as the training-history chart
pub fn training_history() -> Vec<EpochRecord> {
    [
        (1, 0.70, 0.42),
        (2, 0.76, 0.36),
        (3, 0.82, 0.30),
        (4, 0.87, 0.24),
        (5, 0.91, 0.18),
        (6, 0.93, 0.14),
        (7, 0.94, 0.12),
        (8, 0.95, 0.10),
    ]
    .into_iter()
    .map(|(epoch, accuracy, loss)| EpochRecord {
        epoch,
        accuracy,
        loss,
    })
    .collect()
}

/// The confusion matrix the dashboard seeds its performance view with
pub fn sample_confusion_matrix() -> ConfusionMatrix {
    ConfusionMatrix::from_rows([[142, 8], [10, 40]])
}
