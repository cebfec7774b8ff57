//! Catalog domain models.
//!
//! A catalog entry is a value object: its derived tags and category flag are
//! computed once, when the entry is built, and never change afterwards.

mod classifier;
mod entry;
mod lifecycle;
mod naming;
mod record;

pub use classifier::{KeywordClassifier, TagClassifier, DEFAULT_CATEGORY_KEYWORDS};
pub use entry::{CatalogEntry, CatalogEntryBuilder, CatalogEntryFactory};
pub use lifecycle::{LifecycleSnapshot, LifecycleState};
pub use naming::{LastSegmentNamer, ModelNamer};
pub use record::CatalogRecord;
