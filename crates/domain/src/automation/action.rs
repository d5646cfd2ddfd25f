//! Action — a unit of work dispatched to a content generator or echo handler.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::ActionId;

/// The handler an action is dispatched to.
///
/// Serialized as its snake_case string. Unrecognized strings deserialize to
/// [`ActionKind::Unknown`]; dispatching such an action degrades the run
/// instead of failing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionKind {
    SendEmail,
    CreateTask,
    SummarizeText,
    ClassifyRequest,
    GenerateReply,
    LogExpense,
    /// An action type this engine does not recognize.
    Unknown(String),
}

impl ActionKind {
    /// The wire string for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::SendEmail => "send_email",
            Self::CreateTask => "create_task",
            Self::SummarizeText => "summarize_text",
            Self::ClassifyRequest => "classify_request",
            Self::GenerateReply => "generate_reply",
            Self::LogExpense => "log_expense",
            Self::Unknown(other) => other,
        }
    }
}

impl From<&str> for ActionKind {
    fn from(s: &str) -> Self {
        match s {
            "send_email" => Self::SendEmail,
            "create_task" => Self::CreateTask,
            "summarize_text" => Self::SummarizeText,
            "classify_request" => Self::ClassifyRequest,
            "generate_reply" => Self::GenerateReply,
            "log_expense" => Self::LogExpense,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ActionKind {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<ActionKind> for String {
    fn from(kind: ActionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form, generator-specific configuration attached to an action.
///
/// The builder UI edits this as a JSON text field, so the mapping may arrive
/// malformed. Malformed input is swallowed into an empty mapping, but the
/// `malformed` marker survives in memory so the dispatcher can degrade the
/// run instead of silently succeeding. The marker is not persisted: once
/// stored, the empty mapping is well-formed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionConfig {
    #[serde(flatten)]
    values: Map<String, Value>,
    #[serde(skip)]
    malformed: bool,
}

impl ActionConfig {
    /// An empty, well-formed config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON value. Non-object values count as malformed.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(values) => Self {
                values,
                malformed: false,
            },
            _ => Self {
                values: Map::new(),
                malformed: true,
            },
        }
    }

    /// Parse a JSON source string, swallowing malformed input into an empty
    /// mapping marked malformed.
    #[must_use]
    pub fn from_json_str(source: &str) -> Self {
        match serde_json::from_str::<Value>(source) {
            Ok(value) => Self::from_value(value),
            Err(_) => Self {
                values: Map::new(),
                malformed: true,
            },
        }
    }

    /// Look up a config entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Look up a config entry as a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Whether this config was recovered from malformed input.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.malformed
    }

    /// Whether the mapping holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A declared unit of work within an automation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: ActionId,
    #[serde(rename = "type")]
    pub kind: ActionKind,
    #[serde(default)]
    pub config: ActionConfig,
}

impl Action {
    /// Create an action with a fresh identifier and empty config.
    #[must_use]
    pub fn new(kind: ActionKind) -> Self {
        Self {
            id: ActionId::new(),
            kind,
            config: ActionConfig::new(),
        }
    }

    /// Create an action from a kind and a JSON config object.
    #[must_use]
    pub fn with_config(kind: ActionKind, config: Value) -> Self {
        Self {
            id: ActionId::new(),
            kind,
            config: ActionConfig::from_value(config),
        }
    }

    /// Copy of this action under a fresh identifier.
    #[must_use]
    pub fn with_fresh_id(&self) -> Self {
        Self {
            id: ActionId::new(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_known_kinds_through_serde_json() {
        let kinds = [
            ActionKind::SendEmail,
            ActionKind::CreateTask,
            ActionKind::SummarizeText,
            ActionKind::ClassifyRequest,
            ActionKind::GenerateReply,
            ActionKind::LogExpense,
        ];
        for kind in kinds {
            let json = serde_json::to_string(&kind).unwrap();
            let parsed: ActionKind = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn should_preserve_unknown_kind_string_through_serde() {
        let parsed: ActionKind = serde_json::from_str("\"post_webhook\"").unwrap();
        assert_eq!(parsed, ActionKind::Unknown("post_webhook".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"post_webhook\"");
    }

    #[test]
    fn should_parse_config_object_from_json_str() {
        let config = ActionConfig::from_json_str(r#"{"tone":"friendly","to":"self"}"#);
        assert!(!config.is_malformed());
        assert_eq!(config.get_str("tone"), Some("friendly"));
        assert_eq!(config.get_str("to"), Some("self"));
    }

    #[test]
    fn should_swallow_malformed_config_json_into_empty_mapping() {
        let config = ActionConfig::from_json_str("{not json");
        assert!(config.is_malformed());
        assert!(config.is_empty());
    }

    #[test]
    fn should_mark_non_object_config_values_malformed() {
        let config = ActionConfig::from_value(serde_json::json!([1, 2, 3]));
        assert!(config.is_malformed());
        assert!(config.is_empty());
    }

    #[test]
    fn should_not_persist_malformed_marker() {
        let config = ActionConfig::from_json_str("{broken");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, "{}");
        let restored: ActionConfig = serde_json::from_str(&json).unwrap();
        assert!(!restored.is_malformed());
    }

    #[test]
    fn should_roundtrip_action_through_serde_json() {
        let action = Action::with_config(
            ActionKind::GenerateReply,
            serde_json::json!({ "tone": "helpful" }),
        );
        let json = serde_json::to_string(&action).unwrap();
        let parsed: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, action);
    }

    #[test]
    fn should_serialize_kind_under_type_key() {
        let action = Action::new(ActionKind::ClassifyRequest);
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], "classify_request");
    }

    #[test]
    fn should_assign_new_id_when_refreshing() {
        let action = Action::new(ActionKind::CreateTask);
        let copy = action.with_fresh_id();
        assert_ne!(copy.id, action.id);
        assert_eq!(copy.kind, action.kind);
    }
}
