use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ids::ModelId;

/// Download lifecycle of a single catalog entry.
///
/// Owned by the lifecycle tracker; the projection only ever reads it through
/// a [`LifecycleSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    #[default]
    None,
    Downloading,
    Completed,
    Failed,
}

impl LifecycleState {
    /// A download was started and has not completed.
    pub fn is_unfinished(self) -> bool {
        matches!(self, Self::Downloading | Self::Failed)
    }
}

/// Point-in-time mapping from entry id to lifecycle state.
///
/// Ids missing from the snapshot resolve to [`LifecycleState::None`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleSnapshot {
    states: HashMap<ModelId, LifecycleState>,
}

impl LifecycleSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<ModelId>, state: LifecycleState) {
        self.states.insert(id.into(), state);
    }

    pub fn with(mut self, id: impl Into<ModelId>, state: LifecycleState) -> Self {
        self.insert(id, state);
        self
    }

    /// Resolve the state for `id`, defaulting to `None` when absent.
    pub fn state_of(&self, id: &ModelId) -> LifecycleState {
        self.states.get(id).copied().unwrap_or_default()
    }

    /// Raw lookup, distinguishing "absent" from an explicit `None`.
    pub fn get(&self, id: &ModelId) -> Option<LifecycleState> {
        self.states.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ModelId, LifecycleState)> {
        self.states.iter().map(|(id, state)| (id, *state))
    }
}

impl FromIterator<(ModelId, LifecycleState)> for LifecycleSnapshot {
    fn from_iter<T: IntoIterator<Item = (ModelId, LifecycleState)>>(iter: T) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<ModelId, LifecycleState>> for LifecycleSnapshot {
    fn from(states: HashMap<ModelId, LifecycleState>) -> Self {
        Self { states }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_id_resolves_to_none() {
        let snapshot = LifecycleSnapshot::new().with("id1", LifecycleState::Completed);

        assert_eq!(snapshot.state_of(&"id1".into()), LifecycleState::Completed);
        assert_eq!(snapshot.state_of(&"missing".into()), LifecycleState::None);
        assert_eq!(snapshot.get(&"missing".into()), None);
    }

    #[test]
    fn test_unfinished_states() {
        assert!(LifecycleState::Downloading.is_unfinished());
        assert!(LifecycleState::Failed.is_unfinished());
        assert!(!LifecycleState::Completed.is_unfinished());
        assert!(!LifecycleState::None.is_unfinished());
    }

    #[test]
    fn test_state_serializes_snake_case() {
        let json = serde_json::to_string(&LifecycleState::Downloading).unwrap();
        assert_eq!(json, "\"downloading\"");
    }
}
