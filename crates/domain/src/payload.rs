//! Sample payload — the mock event data a simulated run executes against.
//!
//! Payload fields use the builder UI's vocabulary (`subject`, `body`,
//! `dateTime`, `formName`, `vendor`, …) and stay an open mapping: the
//! trigger type determines which fields are meaningful, and absent fields
//! fall back to fixed defaults. Empty strings count as absent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fallback body used when the payload carries no email-ish text.
const DEFAULT_EMAIL_BODY: &str = "Customer inquiry about service.";
/// Fallback text handed to generators when nothing in the payload qualifies.
const DEFAULT_AI_TEXT: &str = "Sample content.";

/// An ordered, open mapping of sample event fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SamplePayload(Map<String, Value>);

impl SamplePayload {
    /// An empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON value; non-object values yield an empty payload.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Set a field.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Raw field access.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Field access as a non-empty string.
    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Whether the payload holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.str_field("subject")
    }

    #[must_use]
    pub fn date_time(&self) -> Option<&str> {
        self.str_field("dateTime")
    }

    #[must_use]
    pub fn form_name(&self) -> Option<&str> {
        self.str_field("formName")
    }

    #[must_use]
    pub fn vendor(&self) -> Option<&str> {
        self.str_field("vendor")
    }

    #[must_use]
    pub fn amount(&self) -> Option<&Value> {
        self.0.get("amount")
    }

    /// The inbound message text handed to the reply generator.
    ///
    /// Chain: `body` → `emailBody` → `text` → fixed default.
    #[must_use]
    pub fn email_body(&self) -> &str {
        self.str_field("body")
            .or_else(|| self.str_field("emailBody"))
            .or_else(|| self.str_field("text"))
            .unwrap_or(DEFAULT_EMAIL_BODY)
    }

    /// The text handed to classification and summarization.
    ///
    /// Chain: `body` → `emailBody` → `text` → `responses` (verbatim when a
    /// string, serialized when a non-empty structure) → `notes` → fixed
    /// default.
    #[must_use]
    pub fn text_for_ai(&self) -> String {
        if let Some(text) = self
            .str_field("body")
            .or_else(|| self.str_field("emailBody"))
            .or_else(|| self.str_field("text"))
        {
            return text.to_string();
        }
        match self.0.get("responses") {
            Some(Value::String(s)) if !s.is_empty() => return s.clone(),
            Some(value @ Value::Object(map)) if !map.is_empty() => return value.to_string(),
            Some(value @ Value::Array(items)) if !items.is_empty() => return value.to_string(),
            _ => {}
        }
        self.str_field("notes")
            .unwrap_or(DEFAULT_AI_TEXT)
            .to_string()
    }
}
