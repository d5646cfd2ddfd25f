//! # flowforge-app
//!
//! Application layer — the simulation engine and **port definitions**.
//!
//! ## Responsibilities
//! - **Content generators** (`generate`) — classification, reply drafting,
//!   summarization, and builder suggestions with bounded randomized phrasing
//! - **PII redactor** (`redact`) — email/phone scrubbing over text and
//!   nested structures
//! - **Action dispatcher** (`dispatch`) — maps a declared action to a
//!   generator or templated echo handler and produces one step
//! - **Run executor** (`simulator`) — trigger → conditions → actions into an
//!   ordered step trace and a completed simulation
//! - **Insight & summary aggregation** (`insights`) — dashboard cards and
//!   the executive summary derived from automations + runs
//! - Define the **storage port** (`ports`) that adapters implement, and the
//!   **services** (`services`) that orchestrate persistence over it
//!
//! All randomness flows through the [`choice::ChoiceSource`] seam so tests
//! and demo mode stay deterministic.
//!
//! ## Dependency rule
//! Depends on `flowforge-domain` only (plus `rand`/`regex` for the default
//! choice source and redaction patterns). Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod choice;
pub mod dispatch;
pub mod generate;
pub mod insights;
pub mod ports;
pub mod redact;
pub mod services;
pub mod simulator;
