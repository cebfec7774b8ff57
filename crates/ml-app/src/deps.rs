//! # Model list dependencies
//!
//! Parameter grouping for presenter construction. Not a builder: every field
//! is required and nothing is defaulted here.

use std::sync::Arc;

use ml_core::catalog::CatalogEntryFactory;
use ml_core::ports::{
    CatalogSourcePort, DownloadControlPort, LifecycleTrackerPort, ModelListViewPort,
};

pub struct ModelListDeps {
    // Catalog
    pub catalog_source: Arc<dyn CatalogSourcePort>,
    pub entry_factory: CatalogEntryFactory,

    // Downloads
    pub lifecycle_tracker: Arc<dyn LifecycleTrackerPort>,
    pub downloads: Arc<dyn DownloadControlPort>,

    // UI
    pub view: Arc<dyn ModelListViewPort>,
}
