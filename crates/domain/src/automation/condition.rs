//! Condition — a declarative filter description attached to an automation.
//!
//! Conditions are descriptive, not evaluative: the run executor logs the
//! check each one describes but never tests it against payload values, so a
//! condition can never gate whether downstream actions run.

use serde::{Deserialize, Serialize};

use crate::id::ConditionId;

/// Comparison operator a condition declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equals,
    Contains,
    NotEquals,
    In,
    GreaterThan,
}

impl Operator {
    /// The wire string for this operator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::Contains => "contains",
            Self::NotEquals => "not_equals",
            Self::In => "in",
            Self::GreaterThan => "greater_than",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared check against a payload field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub id: ConditionId,
    /// Key into the sample payload, e.g. `"subject_contains"`.
    pub field: String,
    pub operator: Operator,
    pub value: String,
}

impl Condition {
    /// Create a condition with a fresh identifier.
    #[must_use]
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            id: ConditionId::new(),
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Copy of this condition under a fresh identifier.
    #[must_use]
    pub fn with_fresh_id(&self) -> Self {
        Self {
            id: ConditionId::new(),
            ..self.clone()
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.value)
    }
}
