//! Demo data service — seeds sample automations and runs so a fresh
//! deployment has something to show.

use serde_json::{Value, json};

use flowforge_domain::automation::{
    Action, ActionKind, Automation, Condition, Operator, Trigger, TriggerKind,
};
use flowforge_domain::error::FlowForgeError;
use flowforge_domain::id::RunId;
use flowforge_domain::run::{RunRecord, RunStatus, Step, StepKind};
use flowforge_domain::time;

use crate::ports::storage::{KEY_AUTOMATIONS, KEY_ONBOARDING_DONE, KEY_RUNS, KeyValueStore};
use crate::services::{AutomationService, RunHistoryService};

/// Seeds and resets the demo dataset.
pub struct DemoService<S> {
    automations: AutomationService<S>,
    runs: RunHistoryService<S>,
    store: S,
}

fn seed_automations() -> Result<(Automation, Automation), FlowForgeError> {
    let meeting_followup = Automation::builder()
        .name("Meeting follow-up")
        .trigger(Trigger::with_config(
            TriggerKind::Schedule,
            json!({ "cron": "after_meeting", "interval": "15m" }),
        ))
        .condition(Condition::new("has_attendees", Operator::Equals, "true"))
        .action(Action::with_config(
            ActionKind::SendEmail,
            json!({ "template": "meeting_summary", "to": "attendees" }),
        ))
        .build()?;

    let support_triage = Automation::builder()
        .name("Support triage")
        .trigger(Trigger::with_config(
            TriggerKind::EmailReceived,
            json!({ "folder": "inbox", "from": "any" }),
        ))
        .condition(Condition::new("subject_contains", Operator::Contains, "help"))
        .action(Action::new(ActionKind::ClassifyRequest))
        .action(Action::with_config(
            ActionKind::GenerateReply,
            json!({ "tone": "professional" }),
        ))
        .build()?;

    Ok((meeting_followup, support_triage))
}

/// Handcrafted step for seeded history; seed action steps predate the
/// dispatcher and carry no action kind.
fn seed_step(kind: StepKind, result: &str, ai_output: Option<Value>) -> Step {
    Step {
        kind,
        action_kind: None,
        result: result.to_string(),
        ai_output,
    }
}

fn seed_run(automation: &Automation, steps: Vec<Step>, duration_ms: u64) -> RunRecord {
    RunRecord {
        run_id: RunId::new(),
        automation_id: automation.id,
        automation_name: automation.name.clone(),
        status: RunStatus::Success,
        steps_executed: steps,
        duration_ms,
        timestamp: time::now(),
        feedback: None,
    }
}

impl<S: KeyValueStore + Clone> DemoService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self {
            automations: AutomationService::new(store.clone()),
            runs: RunHistoryService::new(store.clone()),
            store,
        }
    }

    /// Seed the two sample automations (and, when the history is empty, two
    /// sample runs) unless automations already exist.
    ///
    /// Returns whether anything was seeded.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    #[tracing::instrument(skip(self))]
    pub async fn seed_if_empty(&self) -> Result<bool, FlowForgeError> {
        if !self.automations.list().await?.is_empty() {
            return Ok(false);
        }

        let (meeting_followup, support_triage) = seed_automations()?;
        let meeting_followup = self.automations.save(meeting_followup).await?;
        let support_triage = self.automations.save(support_triage).await?;

        if self.runs.list().await?.is_empty() {
            self.runs
                .add(seed_run(
                    &meeting_followup,
                    vec![
                        seed_step(StepKind::Trigger, "Schedule fired", None),
                        seed_step(StepKind::Condition, "has_attendees = true", None),
                        seed_step(
                            StepKind::Action,
                            "Email sent",
                            Some(json!({ "summary": "Meeting summary sent to 3 attendees." })),
                        ),
                    ],
                    420,
                ))
                .await?;
            self.runs
                .add(seed_run(
                    &support_triage,
                    vec![
                        seed_step(StepKind::Trigger, "Email received", None),
                        seed_step(StepKind::Condition, "subject contains \"help\"", None),
                        seed_step(
                            StepKind::Action,
                            "Classified",
                            Some(json!({ "classification": "Support", "confidence": 0.92 })),
                        ),
                        seed_step(
                            StepKind::Action,
                            "Reply generated",
                            Some(json!({
                                "preview": "Thank you for reaching out. We will look into this..."
                            })),
                        ),
                    ],
                    890,
                ))
                .await?;
        }

        tracing::info!("seeded demo automations and runs");
        Ok(true)
    }

    /// Clear automations, runs, and the onboarding flag, then reseed.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    #[tracing::instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), FlowForgeError> {
        self.store.set(KEY_AUTOMATIONS, json!([])).await?;
        self.store.set(KEY_RUNS, json!([])).await?;
        self.store.set(KEY_ONBOARDING_DONE, json!(false)).await?;
        self.seed_if_empty().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct InMemoryStore {
        entries: Arc<Mutex<HashMap<String, Value>>>,
    }

    impl Default for InMemoryStore {
        fn default() -> Self {
            Self {
                entries: Arc::new(Mutex::new(HashMap::new())),
            }
        }
    }

    impl KeyValueStore for InMemoryStore {
        fn get(
            &self,
            key: &str,
        ) -> impl Future<Output = Result<Option<Value>, FlowForgeError>> + Send {
            let result = self.entries.lock().unwrap().get(key).cloned();
            async { Ok(result) }
        }

        fn set(
            &self,
            key: &str,
            value: Value,
        ) -> impl Future<Output = Result<(), FlowForgeError>> + Send {
            self.entries.lock().unwrap().insert(key.to_string(), value);
            async { Ok(()) }
        }
    }

    #[tokio::test]
    async fn should_seed_two_automations_and_two_runs() {
        let store = InMemoryStore::default();
        let demo = DemoService::new(store.clone());

        assert!(demo.seed_if_empty().await.unwrap());

        let automations = AutomationService::new(store.clone()).list().await.unwrap();
        assert_eq!(automations.len(), 2);
        assert_eq!(automations[0].name, "Meeting follow-up");
        assert_eq!(automations[1].name, "Support triage");
        assert!(automations.iter().all(Automation::is_active));

        let runs = RunHistoryService::new(store).list().await.unwrap();
        assert_eq!(runs.len(), 2);
        // Newest first: the support triage run was added last.
        assert_eq!(runs[0].automation_name, "Support triage");
        assert_eq!(runs[0].steps_executed.len(), 4);
        assert_eq!(runs[1].automation_name, "Meeting follow-up");
        assert_eq!(runs[1].duration_ms, 420);
    }

    #[tokio::test]
    async fn should_be_idempotent() {
        let store = InMemoryStore::default();
        let demo = DemoService::new(store.clone());

        assert!(demo.seed_if_empty().await.unwrap());
        assert!(!demo.seed_if_empty().await.unwrap());

        let automations = AutomationService::new(store).list().await.unwrap();
        assert_eq!(automations.len(), 2);
    }

    #[tokio::test]
    async fn should_not_seed_when_automations_exist() {
        let store = InMemoryStore::default();
        let automations = AutomationService::new(store.clone());
        automations
            .save(
                Automation::builder()
                    .name("Mine")
                    .action(Action::new(ActionKind::SendEmail))
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();

        let demo = DemoService::new(store.clone());
        assert!(!demo.seed_if_empty().await.unwrap());
        assert_eq!(AutomationService::new(store).list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_reset_to_freshly_seeded_state() {
        let store = InMemoryStore::default();
        let demo = DemoService::new(store.clone());
        demo.seed_if_empty().await.unwrap();

        // Dirty the state, then reset.
        let runs = RunHistoryService::new(store.clone());
        let first = runs.list().await.unwrap()[0].clone();
        runs.set_feedback(first.run_id, flowforge_domain::run::Feedback::Down)
            .await
            .unwrap();
        demo.reset().await.unwrap();

        let automations = AutomationService::new(store.clone()).list().await.unwrap();
        assert_eq!(automations.len(), 2);
        let runs = RunHistoryService::new(store).list().await.unwrap();
        assert_eq!(runs.len(), 2);
        assert!(runs.iter().all(|r| r.feedback.is_none()));
    }
}
