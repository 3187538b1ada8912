//! Scenario error types.

use thiserror::Error;

/// Result type for scenario runs.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors reported by a scenario run.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Scenario {scenario}: step {step} assertion failed: {message}")]
    AssertionFailed {
        scenario: String,
        step: String,
        message: String,
    },

    #[error("Scenario {scenario}: cannot snapshot target: {source}")]
    Snapshot {
        scenario: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ScenarioError {
    pub fn assertion_failed(
        scenario: impl Into<String>,
        step: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::AssertionFailed {
            scenario: scenario.into(),
            step: step.into(),
            message: message.into(),
        }
    }

    pub fn snapshot(scenario: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Snapshot {
            scenario: scenario.into(),
            source,
        }
    }
}
