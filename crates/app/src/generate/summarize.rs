//! Summarization — fixed bullet sets plus a follow-up question.

use serde::Serialize;

use crate::choice::ChoiceSource;

const BULLET_SETS: [[&str; 3]; 3] = [
    [
        "Key request or topic identified.",
        "Sender is asking for a response or action.",
        "Suggested next step: reply or assign.",
    ],
    [
        "Main point summarized in one line.",
        "Additional context or detail noted.",
        "Follow-up recommended within 48 hours.",
    ],
    [
        "Topic: inquiry or feedback.",
        "Action needed: response or internal routing.",
        "Priority: normal unless keywords suggest otherwise.",
    ],
];

const FOLLOW_UPS: [&str; 3] = [
    "Do you want to reply now or schedule for later?",
    "Should this be escalated or handled in-house?",
    "Any specific deadline or SLA to meet?",
];

/// A generated summary.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub bullets: Vec<String>,
    pub follow_up_questions: Vec<String>,
    /// The bullets joined with spaces.
    pub summary: String,
}

/// Summarize a text into three bullets and one follow-up question.
///
/// The input is accepted but does not vary the output: bullets and question
/// come from fixed pools.
pub fn summarize_text<C: ChoiceSource>(_text: &str, choice: &mut C) -> Summary {
    let bullets: Vec<String> = choice
        .pick(&BULLET_SETS)
        .iter()
        .map(ToString::to_string)
        .collect();
    let follow_up = (*choice.pick(&FOLLOW_UPS)).to_string();
    let summary = bullets.join(" ");
    Summary {
        bullets,
        follow_up_questions: vec![follow_up],
        summary,
    }
}
