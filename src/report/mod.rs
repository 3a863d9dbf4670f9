//! Chart-ready formatting
//!
//! Shapes core outputs into the serializable series the dashboard's chart
//! widgets bind to. Formatting only: percentage scaling and rounding,
//! never recomputation.

use crate::metrics::{ConfusionMatrix, MetricSet};
use crate::training::ModelBenchmark;
use serde::{Deserialize, Serialize};

/// Render a `[0, 1]` score as a percentage string, e.g. `0.91` -> `"91.0%"`
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.decimals$}%", value * 100.0)
}

/// One labeled value in a bar series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// The four-bar metric series for the performance view
pub fn metric_bars(metrics: &MetricSet) -> Vec<ChartPoint> {
    [
        ("Accuracy", metrics.accuracy),
        ("Precision", metrics.precision),
        ("Recall", metrics.recall),
        ("F1 Score", metrics.f1_score),
    ]
    .into_iter()
    .map(|(label, value)| ChartPoint {
        label: label.to_string(),
        value,
    })
    .collect()
}

/// One labeled confusion-matrix cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfusionCell {
    pub label: String,
    pub count: u64,
    /// Whether this cell counts correct predictions
    pub correct: bool,
}

/// The four confusion cells in display order: TN, FP, FN, TP
pub fn confusion_breakdown(matrix: &ConfusionMatrix) -> Vec<ConfusionCell> {
    [
        ("True Negative", matrix.true_negatives(), true),
        ("False Positive", matrix.false_positives(), false),
        ("False Negative", matrix.false_negatives(), false),
        ("True Positive", matrix.true_positives(), true),
    ]
    .into_iter()
    .map(|(label, count, correct)| ConfusionCell {
        label: label.to_string(),
        count,
        correct,
    })
    .collect()
}

/// One metric's row in the comparison radar: every model's score for it,
/// scaled to `[0, 100]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarRow {
    pub subject: String,
    pub values: Vec<(String, f64)>,
}

/// Restructure a model catalog into per-metric radar rows
pub fn radar_rows(models: &[ModelBenchmark]) -> Vec<RadarRow> {
    let metrics: [(&str, fn(&ModelBenchmark) -> f64); 5] = [
        ("Accuracy", |m| m.accuracy),
        ("Precision", |m| m.precision),
        ("Recall", |m| m.recall),
        ("F1", |m| m.f1),
        ("Auc", |m| m.auc),
    ];

    metrics
        .into_iter()
        .map(|(subject, read)| RadarRow {
            subject: subject.to_string(),
            values: models
                .iter()
                .map(|model| (model.name.clone(), read(model) * 100.0))
                .collect(),
        })
        .collect()
}
