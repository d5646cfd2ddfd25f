//! # flowforge-domain
//!
//! Pure domain model for the FlowForge automation simulator.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Automations** (trigger → conditions → actions pipelines)
//! - Define **Run records** (the persisted trace of one simulated execution)
//! - Define **Sample payloads** (the mock event data a run executes against)
//! - Define **Settings** (user profile plus generation/governance knobs)
//! - Define the static **Template catalog** (importable prototype automations)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod automation;
pub mod payload;
pub mod run;
pub mod settings;
pub mod template;
