//! Training simulation engine
//!
//! The "backend" behind the dashboard's train button. Training is a timed
//! stub: the engine sleeps for a configurable latency, then synthesizes a
//! result from a deterministic response surface over the configuration plus
//! bounded random perturbation. No learning happens.

use crate::error::{InsightError, Result};
use crate::explainability::FeatureImportance;
use crate::metrics::ConfusionMatrix;
use crate::training::baseline::baseline_feature_importance;
use crate::training::config::TrainingConfig;
use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

/// Base accuracy every simulated run starts from
const BASE_ACCURACY: f64 = 0.85;
/// Upper clamp on simulated accuracy
const MAX_ACCURACY: f64 = 0.99;
/// Fixed evaluation population: anomalous samples
const ANOMALY_SAMPLES: u64 = 50;
/// Fixed evaluation population: normal samples
const NORMAL_SAMPLES: u64 = 150;

/// Result record for one simulated training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub confusion_matrix: ConfusionMatrix,
    pub feature_importance: Vec<FeatureImportance>,
    /// Wall-clock duration of the run in seconds
    pub training_time_secs: f64,
}

/// Simulated training backend.
///
/// Holds the simulated latency, an optional RNG seed, and the baseline
/// feature-importance list whose magnitudes each run perturbs. A seeded
/// simulator produces identical results on every run; an unseeded one
/// draws from entropy.
#[derive(Debug, Clone)]
pub struct TrainingSimulator {
    delay: Duration,
    seed: Option<u64>,
    baseline: Vec<FeatureImportance>,
}

impl Default for TrainingSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingSimulator {
    /// Create a simulator with the dashboard's 2-second simulated latency
    /// and an entropy-seeded RNG
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(2),
            seed: None,
            baseline: baseline_feature_importance(),
        }
    }

    /// Set the simulated training latency
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the RNG seed for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the baseline feature-importance list
    pub fn with_baseline(mut self, baseline: Vec<FeatureImportance>) -> Self {
        self.baseline = baseline;
        self
    }

    /// The deterministic part of the simulated accuracy for `config`.
    ///
    /// Additive over a base of 0.85: the algorithm bonus, an
    /// estimator-count term capped at 0.03, a depth term capped at 0.02,
    /// and flat bonuses for feature engineering (0.03), SMOTE (0.02),
    /// class balancing (0.01), and cross-validation (0.01). The
    /// configuration is sanitized first, so out-of-range fields contribute
    /// their clamped value.
    pub fn expected_accuracy(config: &TrainingConfig) -> f64 {
        let config = config.sanitized();
        let mut accuracy = BASE_ACCURACY;

        accuracy += config.algorithm.accuracy_bonus();
        accuracy += (config.n_estimators as f64 / 500.0 * 0.02).min(0.03);
        accuracy += (config.max_depth as f64 / 30.0 * 0.02).min(0.02);

        if config.feature_engineering {
            accuracy += 0.03;
        }
        if config.use_smote {
            accuracy += 0.02;
        }
        if config.balance_classes {
            accuracy += 0.01;
        }
        if config.auto_cv {
            accuracy += 0.01;
        }

        accuracy
    }

    /// Synthesize a result from `config` using the supplied random source.
    ///
    /// This is the pure core of the simulation: identical configuration and
    /// RNG state yield an identical result. Draw order is fixed: accuracy
    /// noise, precision penalty, recall penalty, then one importance factor
    /// per baseline feature.
    ///
    /// The synthesized confusion matrix always describes the fixed
    /// 200-sample evaluation population: its row sums are 150 normal and
    /// 50 anomalous regardless of configuration.
    pub fn synthesize<R: Rng>(&self, config: &TrainingConfig, rng: &mut R) -> TrainingResult {
        let mut accuracy = Self::expected_accuracy(config);
        accuracy += rng.gen_range(-0.01..0.01);
        accuracy = accuracy.clamp(0.0, MAX_ACCURACY);

        let precision = accuracy - rng.gen::<f64>() * 0.05;
        let recall = accuracy - rng.gen::<f64>() * 0.07;
        let f1_score = 2.0 * precision * recall / (precision + recall);

        let tp = (recall * ANOMALY_SAMPLES as f64).floor() as u64;
        let fn_ = ANOMALY_SAMPLES - tp;
        let fp = ((1.0 - accuracy) * NORMAL_SAMPLES as f64).floor() as u64;
        let tn = NORMAL_SAMPLES - fp;
        let confusion_matrix = ConfusionMatrix::new(tn, fp, fn_, tp);

        let feature_importance = self
            .baseline
            .iter()
            .map(|feature| FeatureImportance {
                name: feature.name.clone(),
                importance: feature.importance * rng.gen_range(0.8..1.2),
            })
            .collect();

        TrainingResult {
            accuracy,
            precision,
            recall,
            f1_score,
            confusion_matrix,
            feature_importance,
            training_time_secs: 0.0,
        }
    }

    /// Run one simulated training pass.
    ///
    /// Sleeps the configured latency, then synthesizes the result. Always
    /// succeeds on well-formed input; malformed numeric fields are repaired
    /// by clamping, never rejected. Dropping the returned future cancels
    /// the run without producing a result.
    pub async fn train(&self, config: &TrainingConfig) -> Result<TrainingResult> {
        let start = Instant::now();
        tokio::time::sleep(self.delay).await;

        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut result = self.synthesize(config, &mut rng);
        result.training_time_secs = start.elapsed().as_secs_f64();

        info!(
            algorithm = %config.algorithm,
            accuracy = result.accuracy,
            f1_score = result.f1_score,
            "simulated training run completed"
        );

        Ok(result)
    }

    /// Start a training run in the background and return its job handle.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(&self, config: TrainingConfig) -> TrainingJob {
        let simulator = self.clone();
        let handle = tokio::spawn(async move { simulator.train(&config).await });

        TrainingJob {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            handle,
        }
    }
}

/// Handle to a background training run.
///
/// At most one result is produced per job. A canceled job reports
/// [`InsightError::Canceled`] from [`join`](TrainingJob::join), never a
/// stale or partial result.
#[derive(Debug)]
pub struct TrainingJob {
    id: String,
    created_at: DateTime<Utc>,
    handle: JoinHandle<Result<TrainingResult>>,
}

impl TrainingJob {
    /// Unique identifier for this run
    pub fn id(&self) -> &str {
        &self.id
    }

    /// When the run was started
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Cancel the run. Safe to call after completion, in which case the
    /// already-produced result is still returned by [`join`](Self::join).
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Wait for the run to finish and take its result
    pub async fn join(self) -> Result<TrainingResult> {
        match self.handle.await {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(InsightError::Canceled),
            Err(err) => Err(InsightError::SimulationError(err.to_string())),
        }
    }
}
