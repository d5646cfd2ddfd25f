//! PII redaction — email and phone scrubbing over text and nested
//! structures.
//!
//! Masking is pattern-based only: matched substrings are replaced with fixed
//! markers and everything else is left byte-for-byte untouched.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

/// Replacement for email-like substrings.
pub const EMAIL_MARKER: &str = "[email redacted]";
/// Replacement for phone-like substrings.
pub const PHONE_MARKER: &str = "[phone redacted]";

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern compiles")
});

/// `NNN-NNN-NNNN`, `NNN.NNN.NNNN`, and bare 10-digit forms.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").expect("phone pattern compiles")
});

/// `(NNN) NNN-NNNN` form. No leading word boundary: one can never occur
/// before `(`.
static PHONE_PAREN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\d{3}\)\s*\d{3}[-.]?\d{4}\b").expect("parenthesized phone pattern compiles")
});

/// Replace email-like and phone-like substrings with fixed redaction
/// markers.
#[must_use]
pub fn mask_text(text: &str) -> String {
    let masked = EMAIL.replace_all(text, EMAIL_MARKER);
    let masked = PHONE.replace_all(&masked, PHONE_MARKER);
    let masked = PHONE_PAREN.replace_all(&masked, PHONE_MARKER);
    masked.into_owned()
}

/// Apply [`mask_text`] to every string leaf of an arbitrarily nested value.
///
/// Returns a structurally identical copy — key order and array order are
/// preserved, non-string leaves pass through unchanged, and the input is
/// never mutated.
#[must_use]
pub fn mask_deep(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(mask_text(s)),
        Value::Array(items) => Value::Array(items.iter().map(mask_deep).collect()),
        Value::Object(map) => {
            let masked: Map<String, Value> = map
                .iter()
                .map(|(key, item)| (key.clone(), mask_deep(item)))
                .collect();
            Value::Object(masked)
        }
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_mask_email_addresses() {
        assert_eq!(
            mask_text("Contact jane.doe+spam@example.co.uk for details"),
            "Contact [email redacted] for details"
        );
    }

    #[test]
    fn should_mask_dashed_phone_numbers() {
        assert_eq!(mask_text("Call 555-123-4567 today"), "Call [phone redacted] today");
    }

    #[test]
    fn should_mask_dotted_and_bare_phone_numbers() {
        assert_eq!(mask_text("555.123.4567"), "[phone redacted]");
        assert_eq!(mask_text("5551234567"), "[phone redacted]");
    }

    #[test]
    fn should_mask_parenthesized_phone_numbers() {
        assert_eq!(mask_text("Call (555) 123-4567 now"), "Call [phone redacted] now");
        assert_eq!(mask_text("(555)123-4567"), "[phone redacted]");
    }

    #[test]
    fn should_leave_non_matching_text_untouched() {
        let text = "Order #1234 ships in 2-3 days, ref 12-34";
        assert_eq!(mask_text(text), text);
    }

    #[test]
    fn should_mask_multiple_matches_in_one_string() {
        let masked = mask_text("a@b.com then 555-123-4567 then c@d.org");
        assert_eq!(
            masked,
            "[email redacted] then [phone redacted] then [email redacted]"
        );
    }

    #[test]
    fn should_mask_every_string_leaf_deeply() {
        let input = json!({
            "to": "jane@example.com",
            "nested": { "phone": "555-123-4567", "count": 3 },
            "list": ["ok", "bob@example.com", null, true]
        });
        let masked = mask_deep(&input);
        assert_eq!(masked["to"], "[email redacted]");
        assert_eq!(masked["nested"]["phone"], "[phone redacted]");
        assert_eq!(masked["nested"]["count"], 3);
        assert_eq!(masked["list"][0], "ok");
        assert_eq!(masked["list"][1], "[email redacted]");
        assert_eq!(masked["list"][2], Value::Null);
        assert_eq!(masked["list"][3], true);
    }

    #[test]
    fn should_preserve_key_order_in_masked_copies() {
        let input = json!({ "zeta": "a@b.com", "alpha": 1, "mid": "x" });
        let masked = mask_deep(&input);
        assert_eq!(
            serde_json::to_string(&masked).unwrap(),
            r#"{"zeta":"[email redacted]","alpha":1,"mid":"x"}"#
        );
    }

    #[test]
    fn should_not_mutate_the_input_value() {
        let input = json!({ "email": "a@b.com" });
        let _ = mask_deep(&input);
        assert_eq!(input["email"], "a@b.com");
    }

    #[test]
    fn should_pass_scalars_through_unchanged() {
        assert_eq!(mask_deep(&json!(42)), json!(42));
        assert_eq!(mask_deep(&json!(null)), Value::Null);
        assert_eq!(mask_deep(&json!(true)), json!(true));
    }
}
