//! Common error types used across the workspace.
//!
//! Each layer defines its own typed error and converts into [`FlowForgeError`]
//! via `#[from]`. No `String` variants for domain failures.

/// Top-level error for the FlowForge workspace.
#[derive(Debug, thiserror::Error)]
pub enum FlowForgeError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence collaborator failed.
    #[error("storage error")]
    Storage(#[from] StorageError),
}

/// Domain invariant violations raised by builders and services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Automations must carry a human-readable name.
    #[error("automation name must not be empty")]
    EmptyName,
    /// An automation that does nothing cannot be saved.
    #[error("automation must declare at least one action")]
    NoActions,
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Record kind, e.g. `"Automation"` or `"Run"`.
    pub entity: &'static str,
    /// The identifier that missed.
    pub id: String,
}

/// Failures crossing the key-value storage port.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A stored value could not be decoded into its domain shape.
    #[error("failed to decode stored value at key `{key}`")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// A domain value could not be encoded for storage.
    #[error("failed to encode value for key `{key}`")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// The backing store itself failed.
    #[error("storage backend failure: {0}")]
    Backend(String),
}
