use serde::{Deserialize, Serialize};

use crate::filter::{CategoryFacet, Facet, LifecycleFacet};

/// The three facets applied together to the canonical list.
///
/// `{"", All, All}` is the default and means "no filtering at all".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub text_query: String,
    pub lifecycle: LifecycleFacet,
    pub category: CategoryFacet,
}

impl FilterState {
    pub fn new(
        text_query: impl Into<String>,
        lifecycle: LifecycleFacet,
        category: CategoryFacet,
    ) -> Self {
        Self {
            text_query: text_query.into(),
            lifecycle,
            category,
        }
    }

    pub fn is_default(&self) -> bool {
        self.text_query.is_empty() && self.lifecycle.is_all() && self.category.is_all()
    }

    pub fn is_lifecycle_active(&self) -> bool {
        !self.lifecycle.is_all()
    }

    pub fn is_category_active(&self) -> bool {
        !self.category.is_all()
    }
}
