//! Anomaly Insight - Metrics and simulation core for an anomaly-detection dashboard
//!
//! This crate is the computational backbone behind a browser dashboard for
//! anomaly-detection model metrics: it derives classification metrics from
//! confusion matrices, simulates training runs over a hyperparameter
//! configuration, ranks feature importances, and shapes the results into
//! chart-ready records. The training backend is an explicit stub: a timed
//! simulation over a documented response surface, not a learning algorithm.
//!
//! # Modules
//!
//! ## Core
//! - [`metrics`] - Confusion-matrix metric derivation (accuracy, precision,
//!   recall, F1) with explicit degenerate-matrix errors
//! - [`training`] - Simulated training engine, configuration, and baseline
//!   constants
//! - [`explainability`] - Feature-importance ranking
//!
//! ## Boundaries
//! - [`dataset`] - CSV ingestion into column-name to value rows
//! - [`analysis`] - Prompt construction for a remote text-analysis service
//! - [`report`] - Percentage formatting and chart series
//! - [`state`] - The dashboard's explicit application state
//!
//! # Example
//!
//! ```
//! use anomaly_insight::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anomaly_insight::Result<()> {
//! let config = TrainingConfig::new()
//!     .with_algorithm(Algorithm::Xgboost)
//!     .with_n_estimators(300);
//!
//! let simulator = TrainingSimulator::new()
//!     .with_delay(std::time::Duration::ZERO)
//!     .with_seed(42);
//!
//! let result = simulator.train(&config).await?;
//! let ranked = rank_features(&result.feature_importance, SortMode::ByImportance);
//! assert!(!ranked.is_empty());
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Core modules
pub mod explainability;
pub mod metrics;
pub mod training;

// Boundary modules
pub mod analysis;
pub mod dataset;
pub mod report;
pub mod state;

pub use error::{InsightError, Result};

/// Re-export commonly used types
pub mod prelude {
    // Error handling
    pub use crate::error::{InsightError, Result};

    // Metrics
    pub use crate::metrics::{ConfusionMatrix, MetricSet};

    // Training simulation
    pub use crate::training::{
        Algorithm, TrainingConfig, TrainingJob, TrainingResult, TrainingSimulator,
    };

    // Baseline constants
    pub use crate::training::{
        baseline_feature_importance, reference_models, sample_confusion_matrix, training_history,
    };

    // Feature ranking
    pub use crate::explainability::{rank_features, FeatureImportance, SortMode};

    // Dataset ingestion
    pub use crate::dataset::{Dataset, DatasetRole};

    // Anomaly analysis
    pub use crate::analysis::{AnalysisPrompt, Analyst, AnomalyEvent, Severity};

    // Reporting
    pub use crate::report::{confusion_breakdown, format_percent, metric_bars, radar_rows};

    // Application state
    pub use crate::state::DashboardState;
}
