//! In-process lifecycle tracker.
//!
//! 保存每个模型的下载状态，并在状态变化时广播模型 ID。
//! Holds per-model download state and broadcasts the model id on every change.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use ml_core::catalog::{LifecycleSnapshot, LifecycleState};
use ml_core::ids::ModelId;
use ml_core::ports::LifecycleTrackerPort;
use tokio::sync::broadcast;
use tracing::debug;

const CHANGE_CHANNEL_CAPACITY: usize = 64;

pub struct InMemoryLifecycleTracker {
    states: RwLock<HashMap<ModelId, LifecycleState>>,
    changes: broadcast::Sender<ModelId>,
}

impl InMemoryLifecycleTracker {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            states: RwLock::new(HashMap::new()),
            changes,
        }
    }

    /// Record a new state for `id`. Returns the previous one.
    pub fn set_state(&self, id: impl Into<ModelId>, state: LifecycleState) -> LifecycleState {
        let id = id.into();
        let previous = self
            .states
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone(), state)
            .unwrap_or_default();

        if previous != state {
            debug!(model_id = %id, ?previous, ?state, "Lifecycle state changed");
            self.notify(id);
        }
        previous
    }

    /// Forget `id` entirely; it reads as `None` afterwards.
    pub fn remove(&self, id: &ModelId) -> Option<LifecycleState> {
        let removed = self
            .states
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);

        if removed.is_some() {
            debug!(model_id = %id, "Lifecycle state removed");
            self.notify(id.clone());
        }
        removed
    }

    /// Receiver of model ids whose state changed.
    ///
    /// A lagging receiver loses ids; callers that see `Lagged` should refresh
    /// every row instead.
    pub fn subscribe(&self) -> broadcast::Receiver<ModelId> {
        self.changes.subscribe()
    }

    fn notify(&self, id: ModelId) {
        // No subscribers is fine.
        let _ = self.changes.send(id);
    }
}

impl Default for InMemoryLifecycleTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl LifecycleTrackerPort for InMemoryLifecycleTracker {
    fn snapshot(&self) -> LifecycleSnapshot {
        self.states
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .into()
    }
}
