//! Model list application layer
//!
//! This crate contains the use cases and the presenter that coordinate the
//! catalog source, lifecycle tracker, downloads and view around the
//! filtered list projection.

pub mod deps;
pub mod usecases;

pub use deps::ModelListDeps;
pub use usecases::model_list::{FacetIndicators, ItemAction, ItemActionError, ModelListPresenter};
pub use usecases::{CatalogLoadError, LoadCatalog};
