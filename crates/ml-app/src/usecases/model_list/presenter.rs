//! Presenter for the model list screen.
//!
//! Owns the [`ModelListProjection`] and serializes every mutation through a
//! mutex, so a background catalog refresh and a user filter change cannot
//! interleave halfway through a recompute. The lock is never held across an
//! `.await`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use ml_core::catalog::CatalogEntry;
use ml_core::filter::{CategoryFacet, FacetPicker, FilterState, LifecycleFacet};
use ml_core::ids::ModelId;
use ml_core::ports::{DownloadControlPort, LifecycleTrackerPort, ModelListViewPort};
use ml_core::{ModelListConfig, ModelListProjection};
use tracing::{debug, info, info_span, warn, Instrument};

use super::item_action::{plan, ItemAction, ItemActionError, PlannedAction};
use crate::deps::ModelListDeps;
use crate::usecases::{CatalogLoadError, LoadCatalog};

/// Which facet controls are away from `All`, for dimming their triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FacetIndicators {
    pub lifecycle_active: bool,
    pub category_active: bool,
}

pub struct ModelListPresenter {
    projection: Mutex<ModelListProjection>,
    load_catalog: LoadCatalog,
    tracker: Arc<dyn LifecycleTrackerPort>,
    downloads: Arc<dyn DownloadControlPort>,
    view: Arc<dyn ModelListViewPort>,
}

impl ModelListPresenter {
    pub fn new(deps: ModelListDeps, config: &ModelListConfig) -> Self {
        let mut projection =
            ModelListProjection::new().with_local_as_downloaded(config.treat_local_as_downloaded);
        projection.apply_filter_state(config.initial_filter.clone());

        Self {
            projection: Mutex::new(projection),
            load_catalog: LoadCatalog::new(deps.catalog_source, deps.entry_factory),
            tracker: deps.lifecycle_tracker,
            downloads: deps.downloads,
            view: deps.view,
        }
    }

    fn projection(&self) -> MutexGuard<'_, ModelListProjection> {
        // Recompute never panics midway, so a poisoned projection is still consistent.
        self.projection.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load the catalog and make it the canonical list.
    ///
    /// Loading and error states are only surfaced while nothing is shown, so
    /// a failed refresh keeps the previous list on screen.
    pub async fn load(&self) -> Result<usize, CatalogLoadError> {
        let span = info_span!("presenter.model_list.load");

        async {
            if self.projection().is_view_empty() {
                self.view.on_loading();
            }

            let entries = match self.load_catalog.execute().await {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(error = %err, "Catalog load failed");
                    if self.projection().is_view_empty() {
                        self.view.on_list_load_error(&err.to_string());
                    }
                    return Err(err);
                }
            };

            let count = entries.len();
            let snapshot = self.tracker.snapshot();
            self.projection().replace_canonical_list(entries, snapshot);

            info!(entries = count, "Canonical list replaced");
            self.view.on_data_set_changed();
            self.view.on_list_available();
            Ok(count)
        }
        .instrument(span)
        .await
    }

    /// Search text changed (typed or submitted).
    pub fn on_query_changed(&self, query: &str) {
        self.update_filter(|state| state.text_query = query.to_string());
    }

    /// Search closed: drop the text query, keep the facets.
    pub fn on_search_closed(&self) {
        self.projection().clear_text_query();
        self.view.on_data_set_changed();
    }

    pub fn select_lifecycle_facet(&self, facet: LifecycleFacet) {
        debug!(?facet, "Lifecycle facet selected");
        self.update_filter(|state| state.lifecycle = facet);
    }

    pub fn select_category_facet(&self, facet: CategoryFacet) {
        debug!(?facet, "Category facet selected");
        self.update_filter(|state| state.category = facet);
    }

    /// Replace all three facets in one recompute and one notification.
    pub fn apply_filter(&self, filter: FilterState) {
        debug!(?filter, "Filter state applied");
        self.projection().apply_filter_state(filter);
        self.view.on_data_set_changed();
    }

    fn update_filter(&self, change: impl FnOnce(&mut FilterState)) {
        {
            let mut projection = self.projection();
            let mut state = projection.filter_state().clone();
            change(&mut state);
            projection.apply_filter_state(state);
        }
        self.view.on_data_set_changed();
    }

    pub fn filter_state(&self) -> FilterState {
        self.projection().filter_state().clone()
    }

    pub fn facet_indicators(&self) -> FacetIndicators {
        let projection = self.projection();
        let state = projection.filter_state();
        FacetIndicators {
            lifecycle_active: state.is_lifecycle_active(),
            category_active: state.is_category_active(),
        }
    }

    /// Picker for the lifecycle facet, wired back to this presenter.
    pub fn lifecycle_picker(self: &Arc<Self>) -> FacetPicker<LifecycleFacet> {
        let presenter = Arc::downgrade(self);
        FacetPicker::new(
            "Download state",
            self.filter_state().lifecycle,
            move |facet| {
                if let Some(presenter) = Weak::upgrade(&presenter) {
                    presenter.select_lifecycle_facet(facet);
                }
            },
        )
    }

    /// Picker for the category facet, wired back to this presenter.
    pub fn category_picker(self: &Arc<Self>) -> FacetPicker<CategoryFacet> {
        let presenter = Arc::downgrade(self);
        FacetPicker::new("Modality", self.filter_state().category, move |facet| {
            if let Some(presenter) = Weak::upgrade(&presenter) {
                presenter.select_category_facet(facet);
            }
        })
    }

    /// Rows to render, in canonical order.
    pub fn current_view(&self) -> Vec<CatalogEntry> {
        self.projection()
            .current_view()
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn item_position(&self, id: &ModelId) -> Option<usize> {
        self.projection().position_of(id)
    }

    /// Run, download or ignore the tapped entry depending on where it lives
    /// and how far its download got.
    pub async fn on_item_clicked(&self, id: &ModelId) -> Result<ItemAction, ItemActionError> {
        let entry = self
            .projection()
            .entry(id)
            .cloned()
            .ok_or_else(|| ItemActionError::UnknownModel(id.clone()))?;
        let state = self.tracker.snapshot().state_of(id);

        let download_error = |e: anyhow::Error| ItemActionError::Download {
            id: id.clone(),
            message: format!("{e:#}"),
        };

        match plan(&entry, state) {
            PlannedAction::RunLocal(path) => {
                info!(model_id = %id, path = %path.display(), "Running local model");
                self.view.run_model(&path, id);
                Ok(ItemAction::RunLocal { path })
            }
            PlannedAction::ResolveDownloaded => {
                match self.downloads.downloaded_path(id).await.map_err(download_error)? {
                    Some(path) => {
                        info!(model_id = %id, path = %path.display(), "Running downloaded model");
                        self.view.run_model(&path, id);
                        Ok(ItemAction::RunDownloaded { path })
                    }
                    None => {
                        warn!(model_id = %id, "Downloaded files missing, downloading again");
                        self.downloads.start_download(id).await.map_err(download_error)?;
                        Ok(ItemAction::StartedDownload)
                    }
                }
            }
            PlannedAction::StartDownload => {
                info!(model_id = %id, ?state, "Starting download");
                self.downloads.start_download(id).await.map_err(download_error)?;
                Ok(ItemAction::StartedDownload)
            }
            PlannedAction::Wait => {
                debug!(model_id = %id, "Download already in progress");
                Ok(ItemAction::AlreadyDownloading)
            }
        }
    }

    /// The tracker reported a change for `id` (started, progressed, finished,
    /// failed or removed). Re-reads the whole snapshot.
    pub fn on_lifecycle_changed(&self, id: &ModelId) {
        let snapshot = self.tracker.snapshot();
        let (position, filtered) = {
            let mut projection = self.projection();
            projection.replace_lifecycle_snapshot(snapshot);
            (
                projection.position_of(id),
                !projection.filter_state().is_default(),
            )
        };

        // A lifecycle facet may have moved the entry in or out of the view.
        if filtered {
            self.view.on_data_set_changed();
        } else if let Some(position) = position {
            self.view.on_item_changed(position, id);
        }
    }

    /// Re-read the whole lifecycle snapshot when the changed ids are unknown
    /// (for example after missed notifications). Notifies the view once.
    pub fn refresh_lifecycle(&self) {
        let snapshot = self.tracker.snapshot();
        self.projection().replace_lifecycle_snapshot(snapshot);
        self.view.on_data_set_changed();
    }

    /// Entries whose download started but did not complete.
    pub fn unfinished_download_count(&self) -> usize {
        let snapshot = self.tracker.snapshot();
        self.projection()
            .canonical()
            .iter()
            .filter(|entry| snapshot.state_of(entry.id()).is_unfinished())
            .count()
    }

    /// Restart every unfinished download. Failures are logged and skipped;
    /// returns how many downloads were started.
    pub async fn resume_all_downloads(&self) -> usize {
        let snapshot = self.tracker.snapshot();
        let pending: Vec<ModelId> = self
            .projection()
            .canonical()
            .iter()
            .filter(|entry| snapshot.state_of(entry.id()).is_unfinished())
            .map(|entry| entry.id().clone())
            .collect();

        let mut started = 0;
        for id in &pending {
            match self.downloads.start_download(id).await {
                Ok(()) => started += 1,
                Err(err) => warn!(model_id = %id, error = %err, "Failed to resume download"),
            }
        }

        info!(pending = pending.len(), started, "Resumed unfinished downloads");
        started
    }
}
