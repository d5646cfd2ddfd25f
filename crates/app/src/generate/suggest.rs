//! Builder suggestions — trigger-specific next-step recommendations.

use serde::Serialize;
use serde_json::{Value, json};

use flowforge_domain::automation::{Action, ActionConfig, ActionKind, Condition, Operator, TriggerKind};

use crate::choice::ChoiceSource;

/// Condition suggestions stop once an automation declares this many.
pub const MAX_SUGGESTED_CONDITIONS: usize = 5;
/// Action suggestions stop once an automation declares this many.
pub const MAX_SUGGESTED_ACTIONS: usize = 6;

/// A recommended next builder step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Suggestion {
    Condition {
        label: String,
        field: String,
        operator: Operator,
        value: String,
    },
    Action {
        label: String,
        kind: ActionKind,
        config: ActionConfig,
    },
}

impl Suggestion {
    fn is_condition(&self) -> bool {
        matches!(self, Self::Condition { .. })
    }
}

fn cond(label: &str, field: &str, operator: Operator, value: &str) -> Suggestion {
    Suggestion::Condition {
        label: label.to_string(),
        field: field.to_string(),
        operator,
        value: value.to_string(),
    }
}

fn act(label: &str, kind: ActionKind, config: Value) -> Suggestion {
    Suggestion::Action {
        label: label.to_string(),
        kind,
        config: ActionConfig::from_value(config),
    }
}

/// The fixed candidate pool for a trigger kind.
///
/// Unrecognized trigger kinds fall back to the email pool, the richest of
/// the four.
fn candidate_pool(trigger: &TriggerKind) -> Vec<Suggestion> {
    match trigger {
        TriggerKind::Schedule => vec![
            cond("Only on weekdays", "weekday", Operator::In, "mon-fri"),
            cond("Only if no conflict", "calendar_free", Operator::Equals, "true"),
            act(
                "Create task",
                ActionKind::CreateTask,
                json!({ "title": "Scheduled follow-up", "priority": "medium" }),
            ),
            act("Send email", ActionKind::SendEmail, json!({ "template": "reminder" })),
        ],
        TriggerKind::FormSubmitted => vec![
            cond("Form type equals", "form_type", Operator::Equals, "contact"),
            act(
                "Create task from submission",
                ActionKind::CreateTask,
                json!({ "title": "New form submission", "priority": "high" }),
            ),
            act(
                "Send confirmation email",
                ActionKind::SendEmail,
                json!({ "template": "form_confirmation" }),
            ),
        ],
        TriggerKind::PurchaseMade => vec![
            cond("Amount above", "amount", Operator::GreaterThan, "100"),
            act("Log expense", ActionKind::LogExpense, json!({ "category": "purchase" })),
            act("Summarize purchase", ActionKind::SummarizeText, json!({})),
        ],
        TriggerKind::EmailReceived | TriggerKind::Unknown(_) => vec![
            cond("Subject contains keyword", "subject_contains", Operator::Contains, "urgent"),
            cond("From external domain", "from_domain", Operator::NotEquals, "internal"),
            act("Classify request", ActionKind::ClassifyRequest, json!({})),
            act("Summarize email", ActionKind::SummarizeText, json!({})),
            act(
                "Generate reply",
                ActionKind::GenerateReply,
                json!({ "tone": "professional" }),
            ),
        ],
    }
}

/// Suggest the next condition or action for the automation being built.
///
/// Condition candidates are filtered out once the automation already has
/// [`MAX_SUGGESTED_CONDITIONS`] conditions, action candidates once it has
/// [`MAX_SUGGESTED_ACTIONS`] actions. If filtering empties the pool the
/// unfiltered pool is used, so a suggestion is always produced.
pub fn suggest_next_step<C: ChoiceSource>(
    trigger: &TriggerKind,
    existing_conditions: &[Condition],
    existing_actions: &[Action],
    choice: &mut C,
) -> Suggestion {
    let pool = candidate_pool(trigger);
    let available: Vec<&Suggestion> = pool
        .iter()
        .filter(|s| {
            if s.is_condition() {
                existing_conditions.len() < MAX_SUGGESTED_CONDITIONS
            } else {
                existing_actions.len() < MAX_SUGGESTED_ACTIONS
            }
        })
        .collect();

    if available.is_empty() {
        choice.pick(&pool).clone()
    } else {
        (*choice.pick(&available)).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::FixedChoice;

    fn conditions(n: usize) -> Vec<Condition> {
        (0..n)
            .map(|i| Condition::new(format!("field_{i}"), Operator::Equals, "x"))
            .collect()
    }

    fn actions(n: usize) -> Vec<Action> {
        (0..n).map(|_| Action::new(ActionKind::CreateTask)).collect()
    }

    #[test]
    fn should_suggest_from_schedule_pool_for_schedule_trigger() {
        let s = suggest_next_step(&TriggerKind::Schedule, &[], &[], &mut FixedChoice::first());
        assert_eq!(
            s,
            cond("Only on weekdays", "weekday", Operator::In, "mon-fri")
        );
    }

    #[test]
    fn should_fall_back_to_email_pool_for_unknown_trigger() {
        let unknown = TriggerKind::Unknown("webhook_received".to_string());
        let s = suggest_next_step(&unknown, &[], &[], &mut FixedChoice::first());
        assert_eq!(
            s,
            cond("Subject contains keyword", "subject_contains", Operator::Contains, "urgent")
        );
    }

    #[test]
    fn should_filter_condition_candidates_at_the_condition_limit() {
        let existing = conditions(MAX_SUGGESTED_CONDITIONS);
        let s = suggest_next_step(
            &TriggerKind::EmailReceived,
            &existing,
            &[],
            &mut FixedChoice::first(),
        );
        assert!(matches!(s, Suggestion::Action { .. }));
    }

    #[test]
    fn should_filter_action_candidates_at_the_action_limit() {
        let existing = actions(MAX_SUGGESTED_ACTIONS);
        let s = suggest_next_step(
            &TriggerKind::PurchaseMade,
            &[],
            &existing,
            &mut FixedChoice::first(),
        );
        assert!(matches!(s, Suggestion::Condition { .. }));
    }

    #[test]
    fn should_fall_back_to_unfiltered_pool_when_filtering_empties_it() {
        let s = suggest_next_step(
            &TriggerKind::EmailReceived,
            &conditions(MAX_SUGGESTED_CONDITIONS),
            &actions(MAX_SUGGESTED_ACTIONS),
            &mut FixedChoice::first(),
        );
        // Everything is filtered out, so the unfiltered pool's first entry
        // comes back.
        assert_eq!(
            s,
            cond("Subject contains keyword", "subject_contains", Operator::Contains, "urgent")
        );
    }

    #[test]
    fn should_serialize_with_type_tag() {
        let s = suggest_next_step(&TriggerKind::FormSubmitted, &[], &[], &mut FixedChoice::new(1, 0.0));
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["type"], "action");
        assert_eq!(json["kind"], "create_task");
        assert_eq!(json["config"]["priority"], "high");
    }
}
