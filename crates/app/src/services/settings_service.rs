//! Settings service — the single user/settings mapping plus the onboarding
//! flag.

use serde_json::Value;

use flowforge_domain::error::{FlowForgeError, StorageError};
use flowforge_domain::settings::Settings;

use crate::ports::storage::{KEY_ONBOARDING_DONE, KEY_SETTINGS, KeyValueStore};

/// Application service for user settings.
pub struct SettingsService<S> {
    store: S,
}

impl<S: KeyValueStore> SettingsService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load settings, filling absent keys and fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store, or a decode error
    /// when the stored mapping does not match the settings shape.
    pub async fn load(&self) -> Result<Settings, FlowForgeError> {
        match self.store.get(KEY_SETTINGS).await? {
            Some(value) => serde_json::from_value(value).map_err(|source| {
                StorageError::Decode {
                    key: KEY_SETTINGS.to_string(),
                    source,
                }
                .into()
            }),
            None => Ok(Settings::default()),
        }
    }

    /// Replace the stored settings.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    #[tracing::instrument(skip(self, settings))]
    pub async fn save(&self, settings: &Settings) -> Result<(), FlowForgeError> {
        let value = serde_json::to_value(settings).map_err(|source| StorageError::Encode {
            key: KEY_SETTINGS.to_string(),
            source,
        })?;
        self.store.set(KEY_SETTINGS, value).await
    }

    /// Whether the user finished onboarding.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn onboarding_done(&self) -> Result<bool, FlowForgeError> {
        let flag = self.store.get(KEY_ONBOARDING_DONE).await?;
        Ok(flag.as_ref().and_then(Value::as_bool).unwrap_or(false))
    }

    /// Mark onboarding as finished.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn set_onboarding_done(&self) -> Result<(), FlowForgeError> {
        self.store.set(KEY_ONBOARDING_DONE, Value::Bool(true)).await
    }
}
