//! Insight & summary aggregation — dashboard cards and the executive
//! summary derived from automations and run history.
//!
//! Pure functions over collections, no side effects.

use serde::Serialize;

use flowforge_domain::automation::Automation;
use flowforge_domain::run::{Feedback, RunRecord};
use flowforge_domain::settings::Settings;

/// The dashboard shows at most this many cards.
pub const MAX_INSIGHTS: usize = 4;

/// Advisory flavor of an insight card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Tip,
    Warning,
    Positive,
    Info,
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tip => f.write_str("tip"),
            Self::Warning => f.write_str("warning"),
            Self::Positive => f.write_str("positive"),
            Self::Info => f.write_str("info"),
        }
    }
}

/// A derived, rule-triggered advisory card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub text: String,
}

impl Insight {
    fn new(kind: InsightKind, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Integer percentage of `part` in `whole`, rounded to nearest.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(part: usize, whole: usize) -> u32 {
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

/// Share of runs with status success, defined as 100 when there are none.
fn success_rate(runs: &[RunRecord]) -> u32 {
    if runs.is_empty() {
        return 100;
    }
    let successes = runs.iter().filter(|r| r.status.is_success()).count();
    percent(successes, runs.len())
}

/// Derive up to four dashboard insight cards.
///
/// Predicates are evaluated in fixed priority order, each appending
/// independently; when none holds, exactly one fallback tip is emitted.
#[must_use]
pub fn dashboard_insights(automations: &[Automation], runs: &[RunRecord]) -> Vec<Insight> {
    let active = automations.iter().filter(|a| a.is_active()).count();
    let total_runs = runs.len();
    let rate = success_rate(runs);

    let mut insights = Vec::new();
    if active == 0 {
        insights.push(Insight::new(
            InsightKind::Tip,
            "Create your first automation",
            "Start with a template from the Templates gallery, or build one from scratch in the \
             Builder. Most users begin with \"Support triage\" or \"Meeting follow-up\".",
        ));
    }
    if total_runs > 0 && rate < 90 {
        insights.push(Insight::new(
            InsightKind::Warning,
            "Success rate below 90%",
            format!(
                "{rate}% of runs succeeded. Review failed runs in the Activity log and consider \
                 adding conditions or adjusting triggers."
            ),
        ));
    }
    if active >= 2 && total_runs >= 5 {
        insights.push(Insight::new(
            InsightKind::Positive,
            "Automations are running well",
            format!(
                "You have {active} active automation(s) and {total_runs} run(s) recorded. \
                 Consider adding a \"Summarize\" or \"Classify\" step to save more time."
            ),
        ));
    }
    if let Some(last_run) = runs.first()
        && active > 0
    {
        insights.push(Insight::new(
            InsightKind::Info,
            format!("Last run: {}", last_run.automation_name),
            format!(
                "Status: {}, duration {} ms. View details in Activity.",
                last_run.status, last_run.duration_ms
            ),
        ));
    }
    if insights.is_empty() {
        insights.push(Insight::new(
            InsightKind::Tip,
            "Try the Builder",
            "Use \"Suggest next step\" in the Automation Builder to get AI-recommended \
             conditions and actions based on your trigger.",
        ));
    }
    insights.truncate(MAX_INSIGHTS);
    insights
}

/// Render the consulting-style executive summary.
///
/// Deterministic multi-paragraph text: scope counts, success rate (100% when
/// there are no runs), estimated minutes saved (2 per run), an optional
/// helpful-rate line (omitted entirely when no up/down feedback exists, with
/// a flagged-count clause only when flags exist), and a governance line
/// echoing the settings.
#[must_use]
pub fn executive_summary(
    automations: &[Automation],
    runs: &[RunRecord],
    settings: &Settings,
) -> String {
    let active = automations.iter().filter(|a| a.is_active()).count();
    let total_runs = runs.len();
    let rate = success_rate(runs);
    let est_minutes = total_runs * 2;
    let feedback_up = runs.iter().filter(|r| r.feedback == Some(Feedback::Up)).count();
    let feedback_down = runs.iter().filter(|r| r.feedback == Some(Feedback::Down)).count();
    let flags = runs.iter().filter(|r| r.feedback == Some(Feedback::Flag)).count();

    let mut lines: Vec<String> = Vec::new();
    lines.push("EXECUTIVE SUMMARY — FlowForge Automation Deployment".to_string());
    lines.push(String::new());
    lines.push("This summary reflects the current deployment state and measurable impact.".to_string());
    lines.push(String::new());
    lines.push(format!(
        "Scope: {} automation(s) configured, {active} active. Total runs recorded: {total_runs}, \
         with a {rate}% success rate. Estimated time saved: approximately {est_minutes} minutes.",
        automations.len()
    ));
    if feedback_up + feedback_down > 0 {
        let helpful = percent(feedback_up, feedback_up + feedback_down);
        let mut line =
            format!("Quality: User feedback indicates a {helpful}% helpful rate on run outcomes.");
        if flags > 0 {
            line.push_str(&format!(" {flags} run(s) have been flagged for review."));
        }
        lines.push(line);
    }
    lines.push(String::new());
    lines.push(format!(
        "Governance settings: Tone {}, risk level {}. PII masking in logs: {}.",
        settings.tone,
        settings.risk_level,
        if settings.mask_pii_in_logs { "enabled" } else { "disabled" }
    ));
    lines.push(String::new());
    lines.push(
        "Recommendation: Continue monitoring success rate and flagged runs; consider expanding \
         automations for high-volume processes."
            .to_string(),
    );
    lines.join("\n")
}
