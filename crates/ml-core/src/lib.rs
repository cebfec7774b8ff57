//! # ml-core
//!
//! Core domain models and filtering logic for the model list.
//!
//! This crate contains pure logic without any infrastructure dependencies.

// Public module exports
pub mod catalog;
pub mod config;
pub mod filter;
pub mod ids;
pub mod ports;
pub mod projection;

// Re-export commonly used types at the crate root
pub use catalog::{
    CatalogEntry, CatalogEntryBuilder, CatalogEntryFactory, CatalogRecord, LifecycleSnapshot,
    LifecycleState,
};
pub use config::{ConfigError, ModelListConfig};
pub use filter::{CategoryFacet, Facet, FacetError, FacetPicker, FilterState, LifecycleFacet};
pub use ids::ModelId;
pub use projection::ModelListProjection;
