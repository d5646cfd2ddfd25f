//! Run history service — the capped, newest-first run log.

use flowforge_domain::automation::Automation;
use flowforge_domain::error::{FlowForgeError, NotFoundError, StorageError};
use flowforge_domain::id::RunId;
use flowforge_domain::run::{Feedback, RunRecord};

use crate::ports::storage::{KEY_RUNS, KeyValueStore};
use crate::simulator::Simulation;

/// The history keeps at most this many records; the oldest are evicted.
pub const HISTORY_CAP: usize = 500;

/// Application service for the run history.
pub struct RunHistoryService<S> {
    store: S,
}

impl<S: KeyValueStore> RunHistoryService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    async fn load(&self) -> Result<Vec<RunRecord>, FlowForgeError> {
        match self.store.get(KEY_RUNS).await? {
            Some(value) => serde_json::from_value(value).map_err(|source| {
                StorageError::Decode {
                    key: KEY_RUNS.to_string(),
                    source,
                }
                .into()
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn persist(&self, runs: &[RunRecord]) -> Result<(), FlowForgeError> {
        let value = serde_json::to_value(runs).map_err(|source| StorageError::Encode {
            key: KEY_RUNS.to_string(),
            source,
        })?;
        self.store.set(KEY_RUNS, value).await
    }

    /// The full history, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list(&self) -> Result<Vec<RunRecord>, FlowForgeError> {
        self.load().await
    }

    /// Prepend a record, evicting the oldest entries past [`HISTORY_CAP`].
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    #[tracing::instrument(skip(self, record), fields(automation_name = %record.automation_name))]
    pub async fn add(&self, record: RunRecord) -> Result<RunRecord, FlowForgeError> {
        let mut runs = self.load().await?;
        runs.insert(0, record.clone());
        runs.truncate(HISTORY_CAP);
        self.persist(&runs).await?;
        Ok(record)
    }

    /// Convert a completed simulation into a record and add it.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn record(
        &self,
        automation: &Automation,
        simulation: Simulation,
    ) -> Result<RunRecord, FlowForgeError> {
        self.add(simulation.into_record(automation)).await
    }

    /// Set (or overwrite) the feedback on a run.
    ///
    /// # Errors
    ///
    /// Returns [`FlowForgeError::NotFound`] when the run is absent, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn set_feedback(
        &self,
        run_id: RunId,
        feedback: Feedback,
    ) -> Result<RunRecord, FlowForgeError> {
        let mut runs = self.load().await?;
        let Some(run) = runs.iter_mut().find(|r| r.run_id == run_id) else {
            return Err(NotFoundError {
                entity: "Run",
                id: run_id.to_string(),
            }
            .into());
        };
        run.feedback = Some(feedback);
        let updated = run.clone();
        self.persist(&runs).await?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::FixedChoice;
    use crate::simulator::{RunOptions, simulate_run};
    use flowforge_domain::automation::{Action, ActionKind, Trigger, TriggerKind};
    use flowforge_domain::id::AutomationId;
    use flowforge_domain::payload::SamplePayload;
    use flowforge_domain::run::{RunStatus, Step};
    use flowforge_domain::time;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    struct InMemoryStore {
        entries: Mutex<HashMap<String, Value>>,
    }

    impl Default for InMemoryStore {
        fn default() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
            }
        }
    }

    impl KeyValueStore for InMemoryStore {
        fn get(
            &self,
            key: &str,
        ) -> impl Future<Output = Result<Option<Value>, FlowForgeError>> + Send {
            let result = self.entries.lock().unwrap().get(key).cloned();
            async { Ok(result) }
        }

        fn set(
            &self,
            key: &str,
            value: Value,
        ) -> impl Future<Output = Result<(), FlowForgeError>> + Send {
            self.entries.lock().unwrap().insert(key.to_string(), value);
            async { Ok(()) }
        }
    }

    fn make_service() -> RunHistoryService<InMemoryStore> {
        RunHistoryService::new(InMemoryStore::default())
    }

    fn record(name: &str) -> RunRecord {
        RunRecord {
            run_id: RunId::new(),
            automation_id: AutomationId::new(),
            automation_name: name.to_string(),
            status: RunStatus::Success,
            steps_executed: vec![Step::trigger("Trigger fired: email")],
            duration_ms: 10,
            timestamp: time::now(),
            feedback: None,
        }
    }

    #[tokio::test]
    async fn should_prepend_new_records() {
        let svc = make_service();
        svc.add(record("first")).await.unwrap();
        svc.add(record("second")).await.unwrap();

        let runs = svc.list().await.unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].automation_name, "second");
        assert_eq!(runs[1].automation_name, "first");
    }

    #[tokio::test]
    async fn should_evict_oldest_past_the_cap() {
        let svc = make_service();
        for i in 0..=HISTORY_CAP {
            svc.add(record(&format!("run_{i}"))).await.unwrap();
        }

        let runs = svc.list().await.unwrap();
        assert_eq!(runs.len(), HISTORY_CAP);
        // The very first record fell off; the newest survives at the front.
        assert_eq!(runs[0].automation_name, format!("run_{HISTORY_CAP}"));
        assert!(runs.iter().all(|r| r.automation_name != "run_0"));
    }

    #[tokio::test]
    async fn should_record_simulation_with_name_snapshot() {
        let svc = make_service();
        let automation = Automation::builder()
            .name("Reply helper")
            .trigger(Trigger::new(TriggerKind::EmailReceived))
            .action(Action::new(ActionKind::GenerateReply))
            .build()
            .unwrap();
        let sim = simulate_run(
            &automation,
            &SamplePayload::new(),
            &RunOptions::default(),
            &mut FixedChoice::first(),
        );

        let stored = svc.record(&automation, sim).await.unwrap();
        assert_eq!(stored.automation_name, "Reply helper");
        assert_eq!(stored.status, RunStatus::Success);
        assert_eq!(svc.list().await.unwrap()[0].run_id, stored.run_id);
    }

    #[tokio::test]
    async fn should_set_and_overwrite_feedback() {
        let svc = make_service();
        let stored = svc.add(record("judged")).await.unwrap();

        let up = svc.set_feedback(stored.run_id, Feedback::Up).await.unwrap();
        assert_eq!(up.feedback, Some(Feedback::Up));

        let flagged = svc
            .set_feedback(stored.run_id, Feedback::Flag)
            .await
            .unwrap();
        assert_eq!(flagged.feedback, Some(Feedback::Flag));
        assert_eq!(svc.list().await.unwrap()[0].feedback, Some(Feedback::Flag));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_run() {
        let svc = make_service();
        let result = svc.set_feedback(RunId::new(), Feedback::Up).await;
        assert!(matches!(result, Err(FlowForgeError::NotFound(_))));
    }
}
