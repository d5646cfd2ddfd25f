//! Automation service — use-cases for managing automations.

use flowforge_domain::automation::{Automation, AutomationStatus};
use flowforge_domain::error::{FlowForgeError, NotFoundError, StorageError};
use flowforge_domain::id::AutomationId;
use flowforge_domain::template::Template;
use flowforge_domain::time;

use crate::ports::storage::{KEY_AUTOMATIONS, KeyValueStore};

/// Application service for automation CRUD operations.
pub struct AutomationService<S> {
    store: S,
}

impl<S: KeyValueStore> AutomationService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    async fn load(&self) -> Result<Vec<Automation>, FlowForgeError> {
        match self.store.get(KEY_AUTOMATIONS).await? {
            Some(value) => serde_json::from_value(value).map_err(|source| {
                StorageError::Decode {
                    key: KEY_AUTOMATIONS.to_string(),
                    source,
                }
                .into()
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn persist(&self, automations: &[Automation]) -> Result<(), FlowForgeError> {
        let value = serde_json::to_value(automations).map_err(|source| StorageError::Encode {
            key: KEY_AUTOMATIONS.to_string(),
            source,
        })?;
        self.store.set(KEY_AUTOMATIONS, value).await
    }

    /// List all automations, empty when none were ever stored.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list(&self) -> Result<Vec<Automation>, FlowForgeError> {
        self.load().await
    }

    /// Look up an automation by id.
    ///
    /// # Errors
    ///
    /// Returns [`FlowForgeError::NotFound`] when no automation with `id`
    /// exists, or a storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: AutomationId) -> Result<Automation, FlowForgeError> {
        self.load()
            .await?
            .into_iter()
            .find(|a| a.id == id)
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Automation",
                    id: id.to_string(),
                }
                .into()
            })
    }

    /// Insert or replace an automation, stamping `updated_at` and preserving
    /// the stored `created_at` on replacement.
    ///
    /// # Errors
    ///
    /// Returns [`FlowForgeError::Validation`] if invariants fail, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self, automation), fields(automation_name = %automation.name))]
    pub async fn save(&self, mut automation: Automation) -> Result<Automation, FlowForgeError> {
        automation.validate()?;
        automation.updated_at = time::now();

        let mut automations = self.load().await?;
        if let Some(existing) = automations.iter_mut().find(|a| a.id == automation.id) {
            automation.created_at = existing.created_at;
            *existing = automation.clone();
        } else {
            automations.push(automation.clone());
        }
        self.persist(&automations).await?;
        Ok(automation)
    }

    /// Delete an automation by id. Deleting an absent id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: AutomationId) -> Result<(), FlowForgeError> {
        let mut automations = self.load().await?;
        automations.retain(|a| a.id != id);
        self.persist(&automations).await
    }

    /// Duplicate an automation: fresh identifiers at every level, the name
    /// suffixed " (copy)".
    ///
    /// # Errors
    ///
    /// Returns [`FlowForgeError::NotFound`] when `id` is absent, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn duplicate(&self, id: AutomationId) -> Result<Automation, FlowForgeError> {
        let original = self.get(id).await?;
        self.save(original.duplicated()).await
    }

    /// Toggle or set an automation's status.
    ///
    /// # Errors
    ///
    /// Returns [`FlowForgeError::NotFound`] when `id` is absent, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: AutomationId,
        status: AutomationStatus,
    ) -> Result<Automation, FlowForgeError> {
        let mut automation = self.get(id).await?;
        automation.status = status;
        self.save(automation).await
    }

    /// Import a catalog template as a fresh, paused automation.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid catalog entry, or a storage
    /// error from the store.
    #[tracing::instrument(skip(self, template), fields(template_id = template.id))]
    pub async fn import_template(&self, template: &Template) -> Result<Automation, FlowForgeError> {
        self.save(template.instantiate()?).await
    }
}
