//! Trigger — the declared event type that conceptually starts an automation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The event family an automation reacts to.
///
/// Serialized as its snake_case string. Any unrecognized string deserializes
/// to [`TriggerKind::Unknown`], keeping the degrade path visible instead of
/// silently substituting a default at the storage boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TriggerKind {
    /// Fires on a schedule (cron-like config, never actually scheduled here).
    Schedule,
    /// Fires when an email arrives.
    EmailReceived,
    /// Fires when a form is submitted.
    FormSubmitted,
    /// Fires when a purchase is recorded.
    PurchaseMade,
    /// A trigger type this engine does not recognize.
    Unknown(String),
}

impl TriggerKind {
    /// The wire string for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Schedule => "schedule",
            Self::EmailReceived => "email_received",
            Self::FormSubmitted => "form_submitted",
            Self::PurchaseMade => "purchase_made",
            Self::Unknown(other) => other,
        }
    }
}

impl From<&str> for TriggerKind {
    fn from(s: &str) -> Self {
        match s {
            "schedule" => Self::Schedule,
            "email_received" => Self::EmailReceived,
            "form_submitted" => Self::FormSubmitted,
            "purchase_made" => Self::PurchaseMade,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for TriggerKind {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<TriggerKind> for String {
    fn from(kind: TriggerKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes what conceptually starts an automation.
///
/// The config mapping is opaque to the engine; it determines which
/// sample-payload fields are meaningful and which generator defaults apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    #[serde(rename = "type")]
    pub kind: TriggerKind,
    #[serde(default)]
    pub config: Map<String, Value>,
}

impl Trigger {
    /// Create a trigger with an empty config mapping.
    #[must_use]
    pub fn new(kind: TriggerKind) -> Self {
        Self {
            kind,
            config: Map::new(),
        }
    }

    /// Create a trigger from a kind and a JSON config object.
    ///
    /// Non-object values yield an empty config mapping.
    #[must_use]
    pub fn with_config(kind: TriggerKind, config: Value) -> Self {
        let config = match config {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self { kind, config }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}
