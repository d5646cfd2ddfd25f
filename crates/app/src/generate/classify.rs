//! Request classification — keyword scoring over fixed category sets.

use serde::Serialize;

use crate::choice::ChoiceSource;

const BILLING_KEYWORDS: [&str; 6] = ["bill", "invoice", "payment", "charge", "refund", "subscription"];
const SCHEDULING_KEYWORDS: [&str; 6] = ["meeting", "schedule", "appointment", "calendar", "reschedule", "time"];
const COMPLAINT_KEYWORDS: [&str; 6] = ["issue", "problem", "wrong", "unhappy", "disappointed", "fix"];

/// The score every input gets for [`Category::General`], regardless of text.
const GENERAL_BASELINE: usize = 1;

/// A request category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Billing,
    Scheduling,
    Complaint,
    General,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Billing => "Billing",
            Self::Scheduling => "Scheduling",
            Self::Complaint => "Complaint",
            Self::General => "General",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a request text.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub classification: Category,
    /// In `[0.75, 0.95]`, two decimals.
    pub confidence: f64,
    /// Runner-up categories with a non-zero score, declaration order, max 2.
    pub alternatives: Vec<Category>,
}

/// Count case-insensitive whole-word keyword hits in `text`.
fn keyword_hits(lowered: &str, keywords: &[&str]) -> usize {
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .filter(|word| keywords.contains(word))
        .count()
}

/// Classify `text` into Billing / Scheduling / Complaint / General.
///
/// Scores are keyword-hit counts per category; General always scores a
/// constant baseline of 1. The winner is the first category in declaration
/// order attaining the strictly-highest score, so General only wins when no
/// other category scores at all. Confidence is drawn uniformly from
/// `[0.75, 0.95]` and affects nothing downstream.
pub fn classify_request<C: ChoiceSource>(text: &str, choice: &mut C) -> Classification {
    let lowered = text.to_lowercase();
    let scores = [
        (Category::Billing, keyword_hits(&lowered, &BILLING_KEYWORDS)),
        (Category::Scheduling, keyword_hits(&lowered, &SCHEDULING_KEYWORDS)),
        (Category::Complaint, keyword_hits(&lowered, &COMPLAINT_KEYWORDS)),
        (Category::General, GENERAL_BASELINE),
    ];

    let mut winner = scores[0];
    for candidate in &scores[1..] {
        if candidate.1 > winner.1 {
            winner = *candidate;
        }
    }

    let confidence = round2(0.75 + choice.unit() * 0.2);
    let alternatives: Vec<Category> = scores
        .into_iter()
        .filter(|&(category, score)| category != winner.0 && score > 0)
        .map(|(category, _)| category)
        .take(2)
        .collect();

    Classification {
        classification: winner.0,
        confidence,
        alternatives,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
