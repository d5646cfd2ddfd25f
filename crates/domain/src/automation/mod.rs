//! Automation — trigger → conditions → actions pipelines.
//!
//! An automation declares a [`Trigger`] that conceptually starts it, an
//! ordered list of [`Condition`]s describing (but never evaluating) checks,
//! and an ordered list of [`Action`]s dispatched to content generators or
//! templated echo handlers when the automation is simulated.

mod action;
mod condition;
mod trigger;

pub use action::{Action, ActionConfig, ActionKind};
pub use condition::{Condition, Operator};
pub use trigger::{Trigger, TriggerKind};

use serde::{Deserialize, Serialize};

use crate::error::{FlowForgeError, ValidationError};
use crate::id::AutomationId;
use crate::payload::SamplePayload;
use crate::time::{self, Timestamp};

/// Whether an automation is live or parked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutomationStatus {
    Active,
    Paused,
}

impl AutomationStatus {
    /// The other status; the only transition the model allows.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Paused,
            Self::Paused => Self::Active,
        }
    }
}

impl std::fmt::Display for AutomationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Paused => f.write_str("paused"),
        }
    }
}

/// A user-composed automation pipeline.
///
/// The id is immutable once created; status only toggles between active and
/// paused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Automation {
    pub id: AutomationId,
    pub name: String,
    pub trigger: Trigger,
    pub conditions: Vec<Condition>,
    pub actions: Vec<Action>,
    pub status: AutomationStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Sample payload the builder saved for test executions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_payload: Option<SamplePayload>,
}

impl Automation {
    /// Create a builder for constructing an [`Automation`].
    #[must_use]
    pub fn builder() -> AutomationBuilder {
        AutomationBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FlowForgeError::Validation`] when:
    /// - `name` is empty ([`ValidationError::EmptyName`])
    /// - `actions` is empty ([`ValidationError::NoActions`])
    pub fn validate(&self) -> Result<(), FlowForgeError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.actions.is_empty() {
            return Err(ValidationError::NoActions.into());
        }
        Ok(())
    }

    /// Whether this automation counts toward active totals.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == AutomationStatus::Active
    }

    /// Deep copy with fresh identifiers at every level, the name suffixed
    /// " (copy)", and fresh timestamps.
    #[must_use]
    pub fn duplicated(&self) -> Self {
        let now = time::now();
        Self {
            id: AutomationId::new(),
            name: format!("{} (copy)", self.name),
            trigger: self.trigger.clone(),
            conditions: self.conditions.iter().map(Condition::with_fresh_id).collect(),
            actions: self.actions.iter().map(Action::with_fresh_id).collect(),
            status: self.status,
            created_at: now,
            updated_at: now,
            test_payload: self.test_payload.clone(),
        }
    }
}

/// Step-by-step builder for [`Automation`].
#[derive(Debug, Default)]
pub struct AutomationBuilder {
    id: Option<AutomationId>,
    name: Option<String>,
    trigger: Option<Trigger>,
    conditions: Vec<Condition>,
    actions: Vec<Action>,
    status: Option<AutomationStatus>,
    test_payload: Option<SamplePayload>,
}

impl AutomationBuilder {
    #[must_use]
    pub fn id(mut self, id: AutomationId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    #[must_use]
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn status(mut self, status: AutomationStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn test_payload(mut self, payload: SamplePayload) -> Self {
        self.test_payload = Some(payload);
        self
    }

    /// Consume the builder, validate, and return an [`Automation`].
    ///
    /// # Errors
    ///
    /// Returns [`FlowForgeError::Validation`] if required fields are missing
    /// or empty.
    pub fn build(self) -> Result<Automation, FlowForgeError> {
        let now = time::now();
        let automation = Automation {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            trigger: self
                .trigger
                .unwrap_or_else(|| Trigger::new(TriggerKind::EmailReceived)),
            conditions: self.conditions,
            actions: self.actions,
            status: self.status.unwrap_or(AutomationStatus::Active),
            created_at: now,
            updated_at: now,
            test_payload: self.test_payload,
        };
        automation.validate()?;
        Ok(automation)
    }
}
