//! Storage port — the generic key-value persistence contract.
//!
//! The engine's collaborator is deliberately minimal: get/set by string key
//! over JSON-serializable values, whole-collection replace-on-write. Writers
//! are expected to be serialized by a single in-process caller; no locking
//! discipline beyond atomic replacement is part of the contract.

use std::future::Future;

use serde_json::Value;

use flowforge_domain::error::FlowForgeError;

/// Key under which the automations list is stored.
pub const KEY_AUTOMATIONS: &str = "flowforge_automations";
/// Key under which the run history (newest first) is stored.
pub const KEY_RUNS: &str = "flowforge_runs";
/// Key under which the user/settings mapping is stored.
pub const KEY_SETTINGS: &str = "flowforge_settings";
/// Key under which the onboarding-done flag is stored.
pub const KEY_ONBOARDING_DONE: &str = "flowforge_onboarding_done";

/// Generic JSON key-value store implemented by persistence adapters.
pub trait KeyValueStore {
    /// Read the value stored at `key`, `None` when absent.
    fn get(&self, key: &str)
    -> impl Future<Output = Result<Option<Value>, FlowForgeError>> + Send;

    /// Replace the value stored at `key`.
    fn set(&self, key: &str, value: Value)
    -> impl Future<Output = Result<(), FlowForgeError>> + Send;
}
