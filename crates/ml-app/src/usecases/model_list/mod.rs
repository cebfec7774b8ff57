//! Model list screen coordination.

mod item_action;
mod presenter;

pub use item_action::{ItemAction, ItemActionError};
pub use presenter::{FacetIndicators, ModelListPresenter};
