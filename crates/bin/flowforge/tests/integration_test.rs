//! End-to-end tests for the fully wired stack.
//!
//! Each test assembles the real adapter, real services, and the real engine
//! (in-memory store, no external IO) and exercises a complete user flow:
//! seed, simulate, record, react, report.

use serde_json::json;

use flowforge_adapter_storage_memory::MemoryStore;
use flowforge_app::choice::{FixedChoice, RngChoice};
use flowforge_app::generate::template_pool;
use flowforge_app::insights::{InsightKind, dashboard_insights, executive_summary};
use flowforge_app::services::{
    AutomationService, DemoService, RunHistoryService, SettingsService,
};
use flowforge_app::simulator::{RunOptions, simulate_run};
use flowforge_domain::automation::{
    Action, ActionKind, Automation, AutomationStatus, Trigger, TriggerKind,
};
use flowforge_domain::payload::SamplePayload;
use flowforge_domain::run::{Feedback, RunStatus, StepKind};
use flowforge_domain::settings::Tone;
use flowforge_domain::template;

fn stack() -> (
    MemoryStore,
    AutomationService<MemoryStore>,
    RunHistoryService<MemoryStore>,
) {
    let store = MemoryStore::new();
    (
        store.clone(),
        AutomationService::new(store.clone()),
        RunHistoryService::new(store),
    )
}

#[tokio::test]
async fn should_seed_simulate_and_record_a_full_run() {
    let (store, automations, runs) = stack();
    DemoService::new(store).seed_if_empty().await.unwrap();

    let triage = automations
        .list()
        .await
        .unwrap()
        .into_iter()
        .find(|a| a.name == "Support triage")
        .unwrap();

    let payload = SamplePayload::from_value(json!({
        "subject": "Need help",
        "body": "Hello, I have a problem with my invoice"
    }));
    let sim = simulate_run(
        &triage,
        &payload,
        &RunOptions::default(),
        &mut RngChoice,
    );

    // Trigger + 1 condition + 2 actions.
    assert_eq!(sim.status, RunStatus::Success);
    assert_eq!(sim.steps_executed.len(), 4);
    assert_eq!(sim.steps_executed[0].result, "Trigger fired: Need help");
    assert_eq!(sim.steps_executed[1].result, "subject_contains contains help");
    assert_eq!(
        sim.steps_executed[2].action_kind,
        Some(ActionKind::ClassifyRequest)
    );

    let record = runs.record(&triage, sim).await.unwrap();
    let history = runs.list().await.unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].run_id, record.run_id);
}

#[tokio::test]
async fn should_draft_direct_reply_for_email_trigger() {
    let automation = Automation::builder()
        .name("Reply helper")
        .trigger(Trigger::new(TriggerKind::EmailReceived))
        .action(Action::with_config(
            ActionKind::GenerateReply,
            json!({ "tone": "direct" }),
        ))
        .build()
        .unwrap();

    let payload = SamplePayload::from_value(json!({ "subject": "Hi", "body": "Hello" }));
    let sim = simulate_run(
        &automation,
        &payload,
        &RunOptions::default(),
        &mut RngChoice,
    );

    assert_eq!(sim.status, RunStatus::Success);
    assert_eq!(sim.steps_executed.len(), 2);
    let output = sim.steps_executed[1].ai_output.as_ref().unwrap();
    let body = output["body"].as_str().unwrap();
    assert!(template_pool(Tone::Direct).contains(&body));
}

#[tokio::test]
async fn should_degrade_stored_automation_with_unknown_action_type() {
    // An automation persisted by a newer app version may carry action types
    // this engine does not know.
    let automation: Automation = serde_json::from_value(json!({
        "id": "7f2c0a61-9c7e-4a5f-8e32-ccf1a1a0b9d4",
        "name": "From the future",
        "trigger": { "type": "email_received" },
        "conditions": [],
        "actions": [
            { "id": "0e9b7a48-2f64-47b3-9d0a-49c8f7f2b36a", "type": "post_webhook", "config": {} }
        ],
        "status": "active",
        "created_at": "2026-01-01T00:00:00Z",
        "updated_at": "2026-01-01T00:00:00Z"
    }))
    .unwrap();

    let sim = simulate_run(
        &automation,
        &SamplePayload::new(),
        &RunOptions::default(),
        &mut FixedChoice::first(),
    );

    assert_eq!(sim.status, RunStatus::Degraded);
    let step = &sim.steps_executed[1];
    assert_eq!(step.kind, StepKind::Action);
    assert_eq!(step.result, "post webhook completed");
    assert!(step.ai_output.is_none());

    let record = sim.into_record(&automation);
    let summary = executive_summary(
        std::slice::from_ref(&automation),
        std::slice::from_ref(&record),
        &flowforge_domain::settings::Settings::default(),
    );
    assert!(summary.contains("with a 0% success rate"));
}

#[tokio::test]
async fn should_mask_pii_in_recorded_output() {
    let automation = Automation::builder()
        .name("Masked notifier")
        .trigger(Trigger::new(TriggerKind::EmailReceived))
        .action(Action::with_config(
            ActionKind::SendEmail,
            json!({ "to": "jane.doe@example.com", "template": "reminder" }),
        ))
        .build()
        .unwrap();

    let options = RunOptions {
        mask_pii: true,
        ..RunOptions::default()
    };
    let sim = simulate_run(
        &automation,
        &SamplePayload::new(),
        &options,
        &mut FixedChoice::first(),
    );

    let output = sim.steps_executed[1].ai_output.as_ref().unwrap();
    assert_eq!(output["to"], "[email redacted]");
    assert_eq!(output["template"], "reminder");
}

#[tokio::test]
async fn should_import_template_activate_and_run_it() {
    let (_, automations, runs) = stack();

    let tpl = template::find("tpl_support_triage").unwrap();
    let imported = automations.import_template(&tpl).await.unwrap();
    assert_eq!(imported.status, AutomationStatus::Paused);

    let activated = automations
        .set_status(imported.id, AutomationStatus::Active)
        .await
        .unwrap();
    let payload = SamplePayload::from_value(json!({ "body": "my invoice is wrong" }));
    let sim = simulate_run(
        &activated,
        &payload,
        &RunOptions::default(),
        &mut FixedChoice::first(),
    );

    // Trigger + 1 condition + 3 actions.
    assert_eq!(sim.steps_executed.len(), 5);
    assert_eq!(sim.status, RunStatus::Success);
    let classification = sim.steps_executed[2].ai_output.as_ref().unwrap();
    assert_eq!(classification["classification"], "Billing");

    runs.record(&activated, sim).await.unwrap();
    assert_eq!(runs.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn should_surface_last_run_insight_after_seeding() {
    let (store, automations, runs) = stack();
    DemoService::new(store).seed_if_empty().await.unwrap();

    let insights = dashboard_insights(
        &automations.list().await.unwrap(),
        &runs.list().await.unwrap(),
    );

    // Two active automations with two clean runs: only the last-run card
    // fires.
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].kind, InsightKind::Info);
    assert_eq!(insights[0].title, "Last run: Support triage");
}

#[tokio::test]
async fn should_report_feedback_in_executive_summary() {
    let (store, automations, runs) = stack();
    DemoService::new(store.clone()).seed_if_empty().await.unwrap();

    let history = runs.list().await.unwrap();
    runs.set_feedback(history[0].run_id, Feedback::Up)
        .await
        .unwrap();
    runs.set_feedback(history[1].run_id, Feedback::Flag)
        .await
        .unwrap();

    let settings = SettingsService::new(store).load().await.unwrap();
    let summary = executive_summary(
        &automations.list().await.unwrap(),
        &runs.list().await.unwrap(),
        &settings,
    );

    assert!(summary.contains("Scope: 2 automation(s) configured, 2 active."));
    assert!(summary.contains("a 100% helpful rate"));
    assert!(summary.contains("1 run(s) have been flagged for review."));
    assert!(summary.contains("Governance settings: Tone professional, risk level low."));
}
