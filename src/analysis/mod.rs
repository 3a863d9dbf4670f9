//! Anomaly analysis prompts
//!
//! Builds the request a caller ships to a third-party text-analysis
//! service for free-text commentary on an anomaly event. The HTTP call
//! itself, and the bearer credential, stay with the caller.

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// Default remote model the dashboard targets
pub const DEFAULT_ANALYSIS_MODEL: &str = "llama-3.1-sonar-small-128k-online";
/// Default sampling temperature for analysis requests
pub const DEFAULT_TEMPERATURE: f64 = 0.2;
/// Default completion budget for analysis requests
pub const DEFAULT_MAX_TOKENS: u32 = 150;

const SYSTEM_INSTRUCTION: &str = "You are a security analyst specialized in database \
anomaly detection. Provide concise, actionable insights about anomalies.";

/// Severity of a detected anomaly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        };
        write!(f, "{label}")
    }
}

/// A flagged database-audit event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyEvent {
    pub user: String,
    pub operation: String,
    /// Table the operation touched, when known
    pub table: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
}

/// System and user messages describing an anomaly for the remote analyst
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisPrompt {
    system: String,
    user: String,
}

impl AnalysisPrompt {
    /// Build the prompt pair for one event
    pub fn for_event(event: &AnomalyEvent) -> Self {
        let mut user = format!(
            "Analyze this database anomaly:\nUser: {}\nOperation Type: {}\n",
            event.user, event.operation
        );
        if let Some(table) = &event.table {
            user.push_str(&format!("Table: {table}\n"));
        }
        user.push_str(&format!(
            "Timestamp: {}\nSeverity: {}\n\nProvide a brief analysis of the risk and recommended actions.",
            event.timestamp.to_rfc3339(),
            event.severity
        ));

        Self {
            system: SYSTEM_INSTRUCTION.to_string(),
            user,
        }
    }

    /// The system instruction
    pub fn system(&self) -> &str {
        &self.system
    }

    /// The user message
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Chat-completion request body for the remote service.
    ///
    /// The caller attaches its own bearer credential and posts this
    /// verbatim.
    pub fn to_request_body(&self, model: &str, temperature: f64, max_tokens: u32) -> Value {
        json!({
            "model": model,
            "messages": [
                { "role": "system", "content": self.system },
                { "role": "user", "content": self.user },
            ],
            "temperature": temperature,
            "max_tokens": max_tokens,
        })
    }

    /// Request body with the dashboard defaults
    pub fn to_default_request_body(&self) -> Value {
        self.to_request_body(DEFAULT_ANALYSIS_MODEL, DEFAULT_TEMPERATURE, DEFAULT_MAX_TOKENS)
    }
}

/// Seam for an analysis backend: given an event, return free-text
/// commentary. Implemented over the remote service by the caller; tests
/// plug in doubles.
pub trait Analyst {
    fn analyze(&self, event: &AnomalyEvent) -> Result<String>;
}
