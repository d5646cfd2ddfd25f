//! Action dispatcher — maps a declared action to a content generator or
//! templated echo handler and produces one step.

use serde::Serialize;
use serde_json::{Map, Value, json};

use flowforge_domain::automation::{Action, ActionKind};
use flowforge_domain::payload::SamplePayload;
use flowforge_domain::run::Step;
use flowforge_domain::settings::Tone;

use crate::choice::ChoiceSource;
use crate::generate::{classify_request, generate_reply, summarize_text};
use crate::redact;

/// Execution context shared by every action of one run.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext<'a> {
    /// Inbound message handed to the reply generator.
    pub email_body: &'a str,
    /// Text handed to classification and summarization.
    pub text_for_ai: &'a str,
    /// Run-level tone; individual actions may override via config.
    pub tone: Tone,
    /// Whether generator output passes through the redactor.
    pub mask_pii: bool,
    /// The sample payload, for handlers that echo payload fields.
    pub payload: &'a SamplePayload,
}

/// A dispatched step plus whether it degraded the run.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    pub step: Step,
    /// Set when the action had an unknown kind or malformed config.
    pub degraded: bool,
}

/// Serialize a generator payload. These shapes always serialize; a `None`
/// here would mean a programming error, which degrades to a null output
/// rather than failing the run.
fn structured<T: Serialize>(payload: &T) -> Option<Value> {
    serde_json::to_value(payload).ok()
}

/// Execute one declared action against the run context.
///
/// Unknown kinds yield a step with no output; malformed configs execute with
/// defaults. Both mark the outcome degraded instead of failing the run.
pub fn dispatch<C: ChoiceSource>(
    action: &Action,
    ctx: &ActionContext<'_>,
    choice: &mut C,
) -> DispatchOutcome {
    let tone = action
        .config
        .get_str("tone")
        .map_or(ctx.tone, Tone::from);

    let mut degraded = action.config.is_malformed();
    if degraded {
        tracing::warn!(kind = %action.kind, "malformed action config, degrading run");
    }

    let ai_output = match &action.kind {
        ActionKind::ClassifyRequest => structured(&classify_request(ctx.text_for_ai, choice)),
        ActionKind::GenerateReply => structured(&generate_reply(ctx.email_body, tone, choice)),
        ActionKind::SummarizeText => structured(&summarize_text(ctx.text_for_ai, choice)),
        ActionKind::SendEmail => Some(json!({
            "sent": true,
            "to": action.config.get_str("to").unwrap_or("recipient"),
            "template": action.config.get_str("template").unwrap_or("default"),
        })),
        ActionKind::CreateTask => Some(json!({
            "created": true,
            "title": action.config.get_str("title").unwrap_or("Task"),
            "priority": action.config.get_str("priority").unwrap_or("medium"),
        })),
        ActionKind::LogExpense => {
            let mut out = Map::new();
            out.insert("logged".to_string(), json!(true));
            out.insert(
                "category".to_string(),
                json!(action.config.get_str("category").unwrap_or("general")),
            );
            if let Some(amount) = ctx.payload.get("amount") {
                out.insert("amount".to_string(), amount.clone());
            }
            if let Some(vendor) = ctx.payload.get("vendor") {
                out.insert("vendor".to_string(), vendor.clone());
            }
            Some(Value::Object(out))
        }
        ActionKind::Unknown(other) => {
            tracing::warn!(kind = %other, "unknown action type, degrading run");
            degraded = true;
            None
        }
    };

    let ai_output = if ctx.mask_pii {
        ai_output.map(|value| redact::mask_deep(&value))
    } else {
        ai_output
    };

    let result = format!("{} completed", action.kind.as_str().replace('_', " "));
    DispatchOutcome {
        step: Step::action(action.kind.clone(), result, ai_output),
        degraded,
    }
}
