//! Port interfaces for the application layer
//!
//! Ports define the contract between the model list use cases and the
//! collaborators around them: where the catalog comes from, who tracks
//! download lifecycle, who performs downloads and who renders the list.

mod catalog_source;
mod download_control;
mod lifecycle_tracker;
mod view;

pub use catalog_source::CatalogSourcePort;
pub use download_control::DownloadControlPort;
pub use lifecycle_tracker::LifecycleTrackerPort;
pub use view::ModelListViewPort;
