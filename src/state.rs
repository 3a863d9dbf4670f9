//! Application state
//!
//! The single struct a dashboard front end threads through the core
//! functions, in place of state scattered across widgets. Plain data: the
//! caller owns it and passes it by reference, the core modules hold
//! nothing.

use crate::dataset::{Dataset, DatasetRole};
use crate::training::{TrainingConfig, TrainingResult};

/// Everything the dashboard session holds between interactions
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    train_data: Option<Dataset>,
    test_data: Option<Dataset>,
    config: TrainingConfig,
    last_result: Option<TrainingResult>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an uploaded dataset in its slot, replacing any previous one
    pub fn set_dataset(&mut self, role: DatasetRole, dataset: Dataset) {
        match role {
            DatasetRole::Train => self.train_data = Some(dataset),
            DatasetRole::Test => self.test_data = Some(dataset),
        }
    }

    pub fn dataset(&self, role: DatasetRole) -> Option<&Dataset> {
        match role {
            DatasetRole::Train => self.train_data.as_ref(),
            DatasetRole::Test => self.test_data.as_ref(),
        }
    }

    /// Replace the active training configuration
    pub fn apply_config(&mut self, config: TrainingConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Record a completed run as the one the charts render
    pub fn record_result(&mut self, result: TrainingResult) {
        self.last_result = Some(result);
    }

    pub fn last_result(&self) -> Option<&TrainingResult> {
        self.last_result.as_ref()
    }
}
