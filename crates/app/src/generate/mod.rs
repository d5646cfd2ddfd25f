//! Content generators — deterministic, template-based outputs with small
//! random variation.
//!
//! Each generator is a pure function of its inputs and an injected
//! [`ChoiceSource`](crate::choice::ChoiceSource): randomness is bounded to a
//! fixed, enumerable candidate set per category, never unbounded free-text
//! synthesis.

mod classify;
mod reply;
mod suggest;
mod summarize;

pub use classify::{Category, Classification, classify_request};
pub use reply::{Reply, generate_reply, template_pool};
pub use suggest::{
    MAX_SUGGESTED_ACTIONS, MAX_SUGGESTED_CONDITIONS, Suggestion, suggest_next_step,
};
pub use summarize::{Summary, summarize_text};
