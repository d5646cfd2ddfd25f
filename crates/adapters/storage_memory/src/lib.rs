//! # flowforge-adapter-storage-memory
//!
//! In-memory implementation of the [`KeyValueStore`] port.
//!
//! The engine treats persistence as an external collaborator with a generic
//! get/set contract; this adapter keeps the whole dataset in a shared map,
//! which is exactly what a single-session simulator needs. Cloning the store
//! shares the underlying data, so every service wired from the same store
//! sees the same state.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;

use flowforge_app::ports::KeyValueStore;
use flowforge_domain::error::FlowForgeError;

/// Shared in-memory key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Value>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<Value>, FlowForgeError>> + Send {
        let result = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned();
        async { Ok(result) }
    }

    fn set(
        &self,
        key: &str,
        value: Value,
    ) -> impl Future<Output = Result<(), FlowForgeError>> + Send {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
        async { Ok(()) }
    }
}
