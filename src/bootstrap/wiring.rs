//! # Dependency Injection / 依赖注入模块
//!
//! The only place that depends on `ml-app` and `ml-infra` at the same time.
//! Assembles the adapters into the presenter; makes no decisions.

use std::path::PathBuf;
use std::sync::{Arc, Weak};

use ml_app::{ModelListDeps, ModelListPresenter};
use ml_core::catalog::{CatalogEntryFactory, LastSegmentNamer};
use ml_core::ports::ModelListViewPort;
use ml_core::ModelListConfig;
use ml_infra::{DirectoryDownloadControl, InMemoryLifecycleTracker, JsonCatalogSource};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Presenter plus the concrete adapters that callers still need to drive
/// (the tracker and download control receive progress from outside).
pub struct ModelListRuntime {
    pub presenter: Arc<ModelListPresenter>,
    pub tracker: Arc<InMemoryLifecycleTracker>,
    pub downloads: Arc<DirectoryDownloadControl>,
}

pub fn wire_model_list(
    config: &ModelListConfig,
    downloads_dir: PathBuf,
    view: Arc<dyn ModelListViewPort>,
) -> ModelListRuntime {
    let tracker = Arc::new(InMemoryLifecycleTracker::new());
    let downloads = Arc::new(DirectoryDownloadControl::new(downloads_dir, tracker.clone()));

    let deps = ModelListDeps {
        catalog_source: Arc::new(JsonCatalogSource::new(&config.catalog_path)),
        entry_factory: CatalogEntryFactory::new(
            Arc::new(LastSegmentNamer),
            Arc::new(config.classifier()),
        ),
        lifecycle_tracker: tracker.clone(),
        downloads: downloads.clone(),
        view,
    };

    debug!(catalog = %config.catalog_path.display(), "Model list wired");

    ModelListRuntime {
        presenter: Arc::new(ModelListPresenter::new(deps, config)),
        tracker,
        downloads,
    }
}

/// Forward tracker change notifications to the presenter.
///
/// The task stops at the first notification after the presenter is dropped,
/// or when the tracker's channel closes.
pub fn spawn_lifecycle_forwarder(runtime: &ModelListRuntime) -> JoinHandle<()> {
    let mut changes = runtime.tracker.subscribe();
    let presenter: Weak<ModelListPresenter> = Arc::downgrade(&runtime.presenter);

    tokio::spawn(async move {
        loop {
            let changed = changes.recv().await;
            let Some(presenter) = presenter.upgrade() else {
                break;
            };

            match changed {
                Ok(id) => presenter.on_lifecycle_changed(&id),
                Err(RecvError::Lagged(skipped)) => {
                    // 丢失了部分通知，整体刷新一次
                    warn!(skipped, "Lifecycle notifications lagged, refreshing whole list");
                    presenter.refresh_lifecycle();
                }
                Err(RecvError::Closed) => break,
            }
        }
        debug!("Lifecycle forwarder stopped");
    })
}
