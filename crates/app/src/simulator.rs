//! Run executor — simulates one automation execution into an ordered step
//! trace.
//!
//! Exactly three phases, each terminal and non-branching: the trigger step,
//! one descriptive step per declared condition, one dispatched step per
//! declared action. There is no retry and no early exit; a run either
//! succeeds or completes degraded.

use std::time::Instant;

use flowforge_domain::automation::{Automation, TriggerKind};
use flowforge_domain::id::RunId;
use flowforge_domain::payload::SamplePayload;
use flowforge_domain::run::{RunRecord, RunStatus, Step};
use flowforge_domain::settings::{RiskLevel, Tone};
use flowforge_domain::time;

use crate::choice::ChoiceSource;
use crate::dispatch::{ActionContext, dispatch};

/// Generation and governance options for one run, threaded explicitly —
/// never read from ambient state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub tone: Tone,
    pub risk_level: RiskLevel,
    pub mask_pii: bool,
}

/// The outcome of one simulated execution.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub status: RunStatus,
    pub steps_executed: Vec<Step>,
    pub duration_ms: u64,
}

impl Simulation {
    /// Convert into a persistable [`RunRecord`], snapshotting the
    /// automation's name.
    #[must_use]
    pub fn into_record(self, automation: &Automation) -> RunRecord {
        RunRecord {
            run_id: RunId::new(),
            automation_id: automation.id,
            automation_name: automation.name.clone(),
            status: self.status,
            steps_executed: self.steps_executed,
            duration_ms: self.duration_ms,
            timestamp: time::now(),
            feedback: None,
        }
    }
}

/// The payload field identifying the firing event, per trigger kind.
fn trigger_detail<'a>(kind: &TriggerKind, payload: &'a SamplePayload) -> &'a str {
    match kind {
        TriggerKind::Schedule => payload.date_time().unwrap_or("scheduled"),
        TriggerKind::EmailReceived => payload.subject().unwrap_or("email"),
        TriggerKind::FormSubmitted => payload.form_name().unwrap_or("form"),
        TriggerKind::PurchaseMade => payload.vendor().unwrap_or("purchase"),
        TriggerKind::Unknown(_) => "event",
    }
}

/// Execute one automation against a sample payload.
///
/// Conditions are descriptive, not evaluative: each yields exactly one step
/// stating the declared check and never gates the actions phase.
pub fn simulate_run<C: ChoiceSource>(
    automation: &Automation,
    payload: &SamplePayload,
    options: &RunOptions,
    choice: &mut C,
) -> Simulation {
    let start = Instant::now();
    tracing::debug!(
        automation = %automation.name,
        tone = %options.tone,
        risk_level = %options.risk_level,
        mask_pii = options.mask_pii,
        "simulating run"
    );

    let mut steps =
        Vec::with_capacity(1 + automation.conditions.len() + automation.actions.len());

    steps.push(Step::trigger(format!(
        "Trigger fired: {}",
        trigger_detail(&automation.trigger.kind, payload)
    )));

    for condition in &automation.conditions {
        steps.push(Step::condition(condition.to_string()));
    }

    let text_for_ai = payload.text_for_ai();
    let ctx = ActionContext {
        email_body: payload.email_body(),
        text_for_ai: &text_for_ai,
        tone: options.tone,
        mask_pii: options.mask_pii,
        payload,
    };

    let mut degraded = false;
    for action in &automation.actions {
        let outcome = dispatch(action, &ctx, choice);
        degraded |= outcome.degraded;
        steps.push(outcome.step);
    }

    let status = if degraded {
        RunStatus::Degraded
    } else {
        RunStatus::Success
    };
    let duration_ms = time::elapsed_ms(start);
    tracing::debug!(steps = steps.len(), %status, duration_ms, "run complete");

    Simulation {
        status,
        steps_executed: steps,
        duration_ms,
    }
}
