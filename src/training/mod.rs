//! Simulated model training
//!
//! Stands in for a real training backend: maps a hyperparameter
//! configuration to a synthetic result record (metrics, confusion matrix,
//! feature importances) through a documented response surface plus bounded
//! random perturbation, completing after a configurable simulated latency.

mod baseline;
mod config;
mod simulator;

pub use baseline::{
    baseline_feature_importance, reference_models, sample_confusion_matrix, training_history,
    EpochRecord, ModelBenchmark,
};
pub use config::{
    Algorithm, TrainingConfig, MAX_DEPTH_RANGE, MIN_SAMPLES_SPLIT_RANGE, N_ESTIMATORS_RANGE,
};
pub use simulator::{TrainingJob, TrainingResult, TrainingSimulator};
