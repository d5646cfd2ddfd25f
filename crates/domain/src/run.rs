//! Run record — the persisted trace of one simulated execution.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::automation::ActionKind;
use crate::id::{AutomationId, RunId};
use crate::time::Timestamp;

/// Which execution phase produced a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Trigger,
    Condition,
    Action,
}

/// One entry in a run's ordered step trace.
///
/// Created and owned by a single executor invocation; never mutated after
/// the run completes except by the redactor pass on `ai_output`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub kind: StepKind,
    /// Set on action steps only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_kind: Option<ActionKind>,
    /// Human-readable description of what the step did.
    pub result: String,
    /// Structured generator output, when the step produced any.
    pub ai_output: Option<Value>,
}

impl Step {
    /// A trigger-phase step. Trigger steps never carry generator output.
    #[must_use]
    pub fn trigger(result: impl Into<String>) -> Self {
        Self {
            kind: StepKind::Trigger,
            action_kind: None,
            result: result.into(),
            ai_output: None,
        }
    }

    /// A condition-phase step describing (not evaluating) a declared check.
    #[must_use]
    pub fn condition(result: impl Into<String>) -> Self {
        Self {
            kind: StepKind::Condition,
            action_kind: None,
            result: result.into(),
            ai_output: None,
        }
    }

    /// An action-phase step with optional generator output.
    #[must_use]
    pub fn action(kind: ActionKind, result: impl Into<String>, ai_output: Option<Value>) -> Self {
        Self {
            kind: StepKind::Action,
            action_kind: Some(kind),
            result: result.into(),
            ai_output,
        }
    }
}

/// Terminal status of a simulated run.
///
/// The executor has no failure path: a run either succeeds or, when it hit
/// an unknown action type or malformed config, completes degraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Degraded,
}

impl RunStatus {
    #[must_use]
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Degraded => f.write_str("degraded"),
        }
    }
}

/// User verdict on a run's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Up,
    Down,
    Flag,
}

/// The persisted trace of one execution attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub run_id: RunId,
    pub automation_id: AutomationId,
    /// Name snapshot taken at execution time, not a live reference.
    pub automation_name: String,
    pub status: RunStatus,
    pub steps_executed: Vec<Step>,
    pub duration_ms: u64,
    pub timestamp: Timestamp,
    /// May be set and overwritten after the fact; absent until the user
    /// reacts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}
