//! Filter facets and the combined filter state.

mod error;
mod facet;
mod picker;
mod state;

pub use error::FacetError;
pub use facet::{CategoryFacet, Facet, LifecycleFacet};
pub use picker::{FacetOption, FacetPicker};
pub use state::FilterState;
