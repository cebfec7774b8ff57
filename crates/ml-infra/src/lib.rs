pub mod catalog;
pub mod config;
pub mod downloads;
pub mod fs;
pub mod lifecycle;

pub use catalog::JsonCatalogSource;
pub use config::FileConfigLoader;
pub use downloads::DirectoryDownloadControl;
pub use lifecycle::InMemoryLifecycleTracker;
