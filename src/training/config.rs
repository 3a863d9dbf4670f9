//! Training configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Classification algorithm selected for a simulated run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    RandomForest,
    GradientBoosting,
    Xgboost,
    Svm,
}

impl Algorithm {
    /// Additive accuracy bonus this algorithm contributes to the
    /// simulated response surface
    pub fn accuracy_bonus(&self) -> f64 {
        match self {
            Algorithm::RandomForest => 0.02,
            Algorithm::GradientBoosting => 0.03,
            Algorithm::Xgboost => 0.05,
            Algorithm::Svm => 0.0,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::RandomForest => "Random Forest",
            Algorithm::GradientBoosting => "Gradient Boosting",
            Algorithm::Xgboost => "XGBoost",
            Algorithm::Svm => "SVM",
        };
        write!(f, "{name}")
    }
}

/// Valid range for the number of estimators
pub const N_ESTIMATORS_RANGE: std::ops::RangeInclusive<u32> = 10..=500;
/// Valid range for the maximum tree depth
pub const MAX_DEPTH_RANGE: std::ops::RangeInclusive<u32> = 1..=30;
/// Valid range for the minimum samples per split
pub const MIN_SAMPLES_SPLIT_RANGE: std::ops::RangeInclusive<u32> = 2..=20;

/// Configuration for a simulated training run.
///
/// Every field is independently optional on the wire and falls back to the
/// dashboard's initial form state. Field names accept both camelCase (the
/// dashboard wire format) and snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrainingConfig {
    /// Algorithm to simulate
    pub algorithm: Algorithm,

    /// Number of trees / estimators
    #[serde(alias = "n_estimators")]
    pub n_estimators: u32,

    /// Maximum tree depth
    #[serde(alias = "max_depth")]
    pub max_depth: u32,

    /// Minimum samples required to split a node
    #[serde(alias = "min_samples_split")]
    pub min_samples_split: u32,

    /// Oversample the minority class with SMOTE
    #[serde(alias = "use_smote")]
    pub use_smote: bool,

    /// Apply class weights to balance the loss
    #[serde(alias = "balance_classes")]
    pub balance_classes: bool,

    /// Enable automatic feature engineering
    #[serde(alias = "feature_engineering")]
    pub feature_engineering: bool,

    /// Enable k-fold cross-validation
    #[serde(alias = "auto_cv")]
    pub auto_cv: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::RandomForest,
            n_estimators: 100,
            max_depth: 10,
            min_samples_split: 2,
            use_smote: true,
            balance_classes: true,
            feature_engineering: false,
            auto_cv: false,
        }
    }
}

impl TrainingConfig {
    /// Create a configuration with the dashboard defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the algorithm
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the number of estimators
    pub fn with_n_estimators(mut self, n: u32) -> Self {
        self.n_estimators = n;
        self
    }

    /// Set the maximum depth
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the minimum samples per split
    pub fn with_min_samples_split(mut self, n: u32) -> Self {
        self.min_samples_split = n;
        self
    }

    /// Toggle SMOTE oversampling
    pub fn with_smote(mut self, enabled: bool) -> Self {
        self.use_smote = enabled;
        self
    }

    /// Toggle class-weight balancing
    pub fn with_balance_classes(mut self, enabled: bool) -> Self {
        self.balance_classes = enabled;
        self
    }

    /// Toggle feature engineering
    pub fn with_feature_engineering(mut self, enabled: bool) -> Self {
        self.feature_engineering = enabled;
        self
    }

    /// Toggle cross-validation
    pub fn with_auto_cv(mut self, enabled: bool) -> Self {
        self.auto_cv = enabled;
        self
    }

    /// Return a copy with every numeric field clamped into its valid range.
    ///
    /// Out-of-range values (including anything below the minimum) are
    /// repaired rather than rejected, so a malformed configuration still
    /// produces a well-formed simulated run.
    pub fn sanitized(&self) -> Self {
        let mut repaired = self.clone();
        repaired.n_estimators = self
            .n_estimators
            .clamp(*N_ESTIMATORS_RANGE.start(), *N_ESTIMATORS_RANGE.end());
        repaired.max_depth = self
            .max_depth
            .clamp(*MAX_DEPTH_RANGE.start(), *MAX_DEPTH_RANGE.end());
        repaired.min_samples_split = self.min_samples_split.clamp(
            *MIN_SAMPLES_SPLIT_RANGE.start(),
            *MIN_SAMPLES_SPLIT_RANGE.end(),
        );

        if repaired != *self {
            debug!(
                n_estimators = repaired.n_estimators,
                max_depth = repaired.max_depth,
                min_samples_split = repaired.min_samples_split,
                "clamped out-of-range training configuration"
            );
        }

        repaired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard_form() {
        let config = TrainingConfig::default();
        assert_eq!(config.algorithm, Algorithm::RandomForest);
        assert_eq!(config.n_estimators, 100);
        assert_eq!(config.max_depth, 10);
        assert_eq!(config.min_samples_split, 2);
        assert!(config.use_smote);
        assert!(config.balance_classes);
        assert!(!config.feature_engineering);
        assert!(!config.auto_cv);
    }

    #[test]
    fn test_sanitize_clamps_low_values() {
        let config = TrainingConfig::new()
            .with_n_estimators(1)
            .with_max_depth(0)
            .with_min_samples_split(0)
            .sanitized();
        assert_eq!(config.n_estimators, 10);
        assert_eq!(config.max_depth, 1);
        assert_eq!(config.min_samples_split, 2);
    }

    #[test]
    fn test_sanitize_clamps_high_values() {
        let config = TrainingConfig::new()
            .with_n_estimators(10_000)
            .with_max_depth(100)
            .with_min_samples_split(50)
            .sanitized();
        assert_eq!(config.n_estimators, 500);
        assert_eq!(config.max_depth, 30);
        assert_eq!(config.min_samples_split, 20);
    }

    #[test]
    fn test_sanitize_keeps_valid_values() {
        let config = TrainingConfig::new().with_n_estimators(250);
        assert_eq!(config.sanitized(), config);
    }

    #[test]
    fn test_deserialize_camel_case_wire_format() {
        let config: TrainingConfig = serde_json::from_str(
            r#"{"algorithm":"xgboost","nEstimators":300,"maxDepth":20,"useSmote":false}"#,
        )
        .unwrap();
        assert_eq!(config.algorithm, Algorithm::Xgboost);
        assert_eq!(config.n_estimators, 300);
        assert_eq!(config.max_depth, 20);
        assert!(!config.use_smote);
        // Unspecified fields fall back to the defaults.
        assert_eq!(config.min_samples_split, 2);
        assert!(config.balance_classes);
    }

    #[test]
    fn test_deserialize_snake_case_aliases() {
        let config: TrainingConfig =
            serde_json::from_str(r#"{"algorithm":"gradient_boosting","n_estimators":50}"#).unwrap();
        assert_eq!(config.algorithm, Algorithm::GradientBoosting);
        assert_eq!(config.n_estimators, 50);
    }

    #[test]
    fn test_algorithm_bonus_ordering() {
        assert!(Algorithm::Xgboost.accuracy_bonus() > Algorithm::GradientBoosting.accuracy_bonus());
        assert!(
            Algorithm::GradientBoosting.accuracy_bonus() > Algorithm::RandomForest.accuracy_bonus()
        );
        assert_eq!(Algorithm::Svm.accuracy_bonus(), 0.0);
    }
}
