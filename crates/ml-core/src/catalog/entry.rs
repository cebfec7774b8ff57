use std::sync::Arc;

use crate::catalog::{
    CatalogRecord, KeywordClassifier, LastSegmentNamer, ModelNamer, TagClassifier,
};
use crate::ids::ModelId;

/// Immutable catalog entry.
///
/// Built through [`CatalogEntryBuilder`]; derived tags and the category flag
/// are computed in `build()` and cached for the entry's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    id: ModelId,
    display_name: String,
    tags: Vec<String>,
    derived_tags: Vec<String>,
    category_flagged: bool,
    local_path: Option<String>,
}

impl CatalogEntry {
    pub fn builder(id: impl Into<ModelId>) -> CatalogEntryBuilder {
        CatalogEntryBuilder::new(id)
    }

    pub fn id(&self) -> &ModelId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Raw tags in insertion order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn derived_tags(&self) -> &[String] {
        &self.derived_tags
    }

    pub fn is_category_flagged(&self) -> bool {
        self.category_flagged
    }

    /// Local path, if the entry is resident on this device.
    pub fn local_path(&self) -> Option<&str> {
        self.local_path.as_deref().filter(|p| !p.is_empty())
    }

    pub fn is_local(&self) -> bool {
        self.local_path().is_some()
    }

    /// Case-insensitive containment of an already-lowercased query in the
    /// display name or any derived tag.
    pub(crate) fn matches_lowercase_query(&self, lowered_query: &str) -> bool {
        self.display_name.to_lowercase().contains(lowered_query)
            || self
                .derived_tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(lowered_query))
    }
}

/// Collects the append-only parts of an entry before it is frozen.
#[derive(Debug, Clone)]
pub struct CatalogEntryBuilder {
    id: ModelId,
    tags: Vec<String>,
    local_path: Option<String>,
}

impl CatalogEntryBuilder {
    pub fn new(id: impl Into<ModelId>) -> Self {
        Self {
            id: id.into(),
            tags: Vec::new(),
            local_path: None,
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn local_path(mut self, path: impl Into<String>) -> Self {
        self.local_path = Some(path.into());
        self
    }

    pub fn build(self, namer: &dyn ModelNamer, classifier: &dyn TagClassifier) -> CatalogEntry {
        let display_name = namer.display_name(&self.id);
        let derived_tags = classifier.derive_tags(&display_name, &self.tags);
        let category_flagged = if derived_tags.is_empty() {
            classifier.is_flagged(&self.tags)
        } else {
            classifier.is_flagged(&derived_tags)
        };

        CatalogEntry {
            id: self.id,
            display_name,
            tags: self.tags,
            derived_tags,
            category_flagged,
            local_path: self.local_path,
        }
    }
}

/// Builds entries with a fixed naming and classification strategy.
#[derive(Clone)]
pub struct CatalogEntryFactory {
    namer: Arc<dyn ModelNamer>,
    classifier: Arc<dyn TagClassifier>,
}

impl CatalogEntryFactory {
    pub fn new(namer: Arc<dyn ModelNamer>, classifier: Arc<dyn TagClassifier>) -> Self {
        Self { namer, classifier }
    }

    pub fn build(&self, builder: CatalogEntryBuilder) -> CatalogEntry {
        builder.build(self.namer.as_ref(), self.classifier.as_ref())
    }

    pub fn from_record(&self, record: CatalogRecord) -> CatalogEntry {
        let mut builder = CatalogEntryBuilder::new(record.id).tags(record.tags);
        if let Some(path) = record.local_path {
            builder = builder.local_path(path);
        }
        self.build(builder)
    }

    /// Entry for a model that only exists on this device.
    pub fn local(&self, id: impl Into<ModelId>, path: impl Into<String>) -> CatalogEntry {
        self.build(CatalogEntryBuilder::new(id).local_path(path))
    }

    pub fn from_records<I>(&self, records: I) -> Vec<CatalogEntry>
    where
        I: IntoIterator<Item = CatalogRecord>,
    {
        records.into_iter().map(|r| self.from_record(r)).collect()
    }
}

impl Default for CatalogEntryFactory {
    fn default() -> Self {
        Self::new(Arc::new(LastSegmentNamer), Arc::new(KeywordClassifier::default()))
    }
}

impl std::fmt::Debug for CatalogEntryFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEntryFactory").finish_non_exhaustive()
    }
}
