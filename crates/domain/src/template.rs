//! Template catalog — static prototype automations importable with one click.
//!
//! Importing instantiates a fresh, paused [`Automation`] with new
//! identifiers at every level; the catalog entries themselves never change.

use serde::Serialize;
use serde_json::json;

use crate::automation::{
    Action, ActionKind, Automation, AutomationStatus, Condition, Operator, Trigger, TriggerKind,
};
use crate::error::FlowForgeError;

/// A prototype automation from the static catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub trigger: Trigger,
    pub conditions: Vec<Condition>,
    pub actions: Vec<Action>,
}

impl Template {
    /// Materialize this template as a fresh **paused** automation with new
    /// identifiers for the automation and every condition and action.
    ///
    /// # Errors
    ///
    /// Returns [`FlowForgeError::Validation`] if the catalog entry violates
    /// automation invariants (catalog entries are expected to be valid).
    pub fn instantiate(&self) -> Result<Automation, FlowForgeError> {
        let mut builder = Automation::builder()
            .name(self.name)
            .trigger(self.trigger.clone())
            .status(AutomationStatus::Paused);
        for condition in &self.conditions {
            builder = builder.condition(condition.with_fresh_id());
        }
        for action in &self.actions {
            builder = builder.action(action.with_fresh_id());
        }
        builder.build()
    }
}

/// The full static catalog.
#[must_use]
pub fn catalog() -> Vec<Template> {
    vec![
        Template {
            id: "tpl_landlord",
            name: "Auto-reply to landlords",
            description: "Send a polite, professional reply when you receive a rental inquiry or landlord message.",
            trigger: Trigger::with_config(TriggerKind::EmailReceived, json!({ "folder": "inbox" })),
            conditions: vec![Condition::new("subject_contains", Operator::Contains, "rental")],
            actions: vec![Action::with_config(
                ActionKind::GenerateReply,
                json!({ "tone": "professional", "context": "rental_inquiry" }),
            )],
        },
        Template {
            id: "tpl_job_followup",
            name: "Job application follow-up helper",
            description: "Remind you to follow up on job applications after 1 week.",
            trigger: Trigger::with_config(
                TriggerKind::Schedule,
                json!({ "cron": "weekly", "day": "monday" }),
            ),
            conditions: vec![Condition::new("tag", Operator::Equals, "application_sent")],
            actions: vec![Action::with_config(
                ActionKind::CreateTask,
                json!({ "title": "Follow up on job application", "priority": "high" }),
            )],
        },
        Template {
            id: "tpl_receipts",
            name: "Receipts → expense log",
            description: "When you receive an email with a receipt, classify and log it as an expense.",
            trigger: Trigger::with_config(
                TriggerKind::EmailReceived,
                json!({ "hasAttachment": true }),
            ),
            conditions: vec![Condition::new("subject_contains", Operator::Contains, "receipt")],
            actions: vec![
                Action::new(ActionKind::ClassifyRequest),
                Action::with_config(
                    ActionKind::LogExpense,
                    json!({ "category": "auto", "fromAttachment": true }),
                ),
            ],
        },
        Template {
            id: "tpl_gym_meal",
            name: "Gym meal plan reminder",
            description: "Daily reminder to log your meals and workout.",
            trigger: Trigger::with_config(
                TriggerKind::Schedule,
                json!({ "cron": "daily", "time": "08:00" }),
            ),
            conditions: vec![],
            actions: vec![Action::with_config(
                ActionKind::SendEmail,
                json!({ "template": "meal_reminder", "to": "self" }),
            )],
        },
        Template {
            id: "tpl_support_triage",
            name: "Customer support triage",
            description: "Classify incoming support emails and suggest a reply.",
            trigger: Trigger::with_config(TriggerKind::EmailReceived, json!({ "folder": "inbox" })),
            conditions: vec![Condition::new("from_domain", Operator::NotEquals, "internal")],
            actions: vec![
                Action::new(ActionKind::ClassifyRequest),
                Action::new(ActionKind::SummarizeText),
                Action::with_config(ActionKind::GenerateReply, json!({ "tone": "helpful" })),
            ],
        },
        Template {
            id: "tpl_missed_appt",
            name: "Missed appointment rescheduler",
            description: "When someone misses an appointment, send a gentle reschedule offer.",
            trigger: Trigger::with_config(
                TriggerKind::FormSubmitted,
                json!({ "formId": "no_show" }),
            ),
            conditions: vec![Condition::new("event", Operator::Equals, "no_show")],
            actions: vec![
                Action::with_config(
                    ActionKind::GenerateReply,
                    json!({ "tone": "friendly", "template": "reschedule_offer" }),
                ),
                Action::with_config(
                    ActionKind::CreateTask,
                    json!({ "title": "Follow up: reschedule", "priority": "medium" }),
                ),
            ],
        },
        Template {
            id: "tpl_purchase_summary",
            name: "Purchase confirmation summarizer",
            description: "Summarize purchase confirmations and log key details.",
            trigger: Trigger::new(TriggerKind::PurchaseMade),
            conditions: vec![],
            actions: vec![
                Action::new(ActionKind::SummarizeText),
                Action::with_config(ActionKind::LogExpense, json!({ "category": "purchase" })),
            ],
        },
        Template {
            id: "tpl_weekly_digest",
            name: "Weekly digest",
            description: "Every Monday, create a summary of last week's key emails and tasks.",
            trigger: Trigger::with_config(
                TriggerKind::Schedule,
                json!({ "cron": "weekly", "day": "monday", "time": "09:00" }),
            ),
            conditions: vec![],
            actions: vec![Action::with_config(
                ActionKind::SummarizeText,
                json!({ "mode": "weekly_digest" }),
            )],
        },
    ]
}

/// Look up a catalog entry by id.
#[must_use]
pub fn find(id: &str) -> Option<Template> {
    catalog().into_iter().find(|t| t.id == id)
}
