//! Feature-importance ranking
//!
//! Ordered views over the named importance weights a (simulated) model
//! reports, for the dashboard's feature chart.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Number of entries kept when ranking by importance
pub const TOP_FEATURES: usize = 10;

/// A named feature and its non-negative importance weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub name: String,
    pub importance: f64,
}

impl FeatureImportance {
    pub fn new(name: impl Into<String>, importance: f64) -> Self {
        Self {
            name: name.into(),
            importance,
        }
    }
}

/// Ordering applied by [`rank_features`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Descending by importance, truncated to the top [`TOP_FEATURES`]
    ByImportance,
    /// Ascending by name, full list
    Alphabetical,
}

/// Produce an ordered view of `entries` without mutating the input.
///
/// `ByImportance` sorts descending with a stable sort, so entries with
/// equal importance keep their input order, and truncates to the top 10.
/// `Alphabetical` sorts ascending by name and keeps every entry.
pub fn rank_features(entries: &[FeatureImportance], mode: SortMode) -> Vec<FeatureImportance> {
    let mut ranked = entries.to_vec();
    match mode {
        SortMode::ByImportance => {
            ranked.sort_by(|a, b| {
                b.importance
                    .partial_cmp(&a.importance)
                    .unwrap_or(Ordering::Equal)
            });
            ranked.truncate(TOP_FEATURES);
        }
        SortMode::Alphabetical => {
            ranked.sort_by(|a, b| a.name.cmp(&b.name));
        }
    }
    ranked
}
