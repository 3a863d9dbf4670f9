//! Classification metrics
//!
//! Derivation of accuracy, precision, recall, and F1 from a binary
//! confusion matrix. Degenerate matrices (zero denominators) surface
//! as explicit errors rather than NaN.

mod confusion;

pub use confusion::{ConfusionMatrix, MetricSet};
