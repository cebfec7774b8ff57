use crate::catalog::LifecycleSnapshot;

/// Owner of per-entry download lifecycle state.
///
/// Consumers re-read the whole snapshot on every change notification rather
/// than applying deltas.
pub trait LifecycleTrackerPort: Send + Sync {
    fn snapshot(&self) -> LifecycleSnapshot;
}
