use std::path::PathBuf;

use ml_core::catalog::{CatalogEntry, LifecycleState};
use ml_core::ids::ModelId;

/// What happened when the user tapped a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    /// Model is resident on the device; it was run from its local path.
    RunLocal { path: PathBuf },
    /// Download completed; the model was run from the downloaded files.
    RunDownloaded { path: PathBuf },
    /// A download was started (or restarted after a failure).
    StartedDownload,
    /// Download already in progress; nothing to do.
    AlreadyDownloading,
}

#[derive(Debug, thiserror::Error)]
pub enum ItemActionError {
    #[error("Model not in catalog: {0}")]
    UnknownModel(ModelId),

    #[error("Download control failed for {id}: {message}")]
    Download { id: ModelId, message: String },
}

/// Decision taken before touching any collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlannedAction {
    RunLocal(PathBuf),
    ResolveDownloaded,
    StartDownload,
    Wait,
}

pub(crate) fn plan(entry: &CatalogEntry, state: LifecycleState) -> PlannedAction {
    if let Some(path) = entry.local_path() {
        return PlannedAction::RunLocal(PathBuf::from(path));
    }
    match state {
        LifecycleState::Completed => PlannedAction::ResolveDownloaded,
        LifecycleState::Downloading => PlannedAction::Wait,
        LifecycleState::None | LifecycleState::Failed => PlannedAction::StartDownload,
    }
}
