pub mod load_catalog;
pub mod model_list;

pub use load_catalog::{CatalogLoadError, LoadCatalog};
