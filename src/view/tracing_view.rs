use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use ml_core::ids::ModelId;
use ml_core::ports::ModelListViewPort;
use tracing::{debug, error, info};

/// Headless view: reports every callback as a tracing event and keeps the
/// run requests so a caller can act on them.
#[derive(Default)]
pub struct TracingView {
    run_requests: Mutex<Vec<(PathBuf, ModelId)>>,
}

impl TracingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the pending run requests, oldest first.
    pub fn take_run_requests(&self) -> Vec<(PathBuf, ModelId)> {
        std::mem::take(
            &mut *self
                .run_requests
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}

impl ModelListViewPort for TracingView {
    fn on_loading(&self) {
        debug!("view: loading");
    }

    fn on_list_available(&self) {
        debug!("view: list available");
    }

    fn on_list_load_error(&self, message: &str) {
        error!(error = message, "view: list load failed");
    }

    fn on_data_set_changed(&self) {
        debug!("view: data set changed");
    }

    fn on_item_changed(&self, position: usize, id: &ModelId) {
        debug!(position, model_id = %id, "view: item changed");
    }

    fn run_model(&self, path: &Path, id: &ModelId) {
        info!(model_id = %id, path = %path.display(), "view: run model");
        self.run_requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((path.to_path_buf(), id.clone()));
    }
}
