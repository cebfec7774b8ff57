//! Filtered list projection.
//!
//! Keeps the canonical catalog list and derives the filtered view from it.
//! The view is recomputed eagerly and in full on every mutating call; there
//! is no incremental update path.

use crate::catalog::{CatalogEntry, LifecycleSnapshot, LifecycleState};
use crate::filter::{CategoryFacet, FilterState, LifecycleFacet};
use crate::ids::ModelId;

/// Canonical list + lifecycle snapshot + filter state → view.
///
/// Mutation takes `&mut self`, so a shared projection has to be serialized by
/// its owner.
#[derive(Debug, Clone, Default)]
pub struct ModelListProjection {
    canonical: Vec<CatalogEntry>,
    states: LifecycleSnapshot,
    filter: FilterState,
    /// Indices into `canonical`; `None` while the filter state is default.
    filtered: Option<Vec<usize>>,
    local_as_downloaded: bool,
}

impl ModelListProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled, entries with a local path resolve to `Completed` for the
    /// lifecycle facet regardless of the snapshot.
    pub fn with_local_as_downloaded(mut self, enabled: bool) -> Self {
        self.local_as_downloaded = enabled;
        self.recompute();
        self
    }

    /// Replace the canonical list and the lifecycle snapshot together, then
    /// recompute under the current filter.
    pub fn replace_canonical_list(&mut self, entries: Vec<CatalogEntry>, states: LifecycleSnapshot) {
        self.canonical = entries;
        self.states = states;
        self.recompute();
    }

    /// Replace only the lifecycle snapshot, keeping the canonical list.
    pub fn replace_lifecycle_snapshot(&mut self, states: LifecycleSnapshot) {
        self.states = states;
        self.recompute();
    }

    /// Replace all three facets at once.
    pub fn set_filter(
        &mut self,
        text_query: impl Into<String>,
        lifecycle: LifecycleFacet,
        category: CategoryFacet,
    ) {
        self.filter = FilterState::new(text_query, lifecycle, category);
        self.recompute();
    }

    pub fn apply_filter_state(&mut self, filter: FilterState) {
        self.filter = filter;
        self.recompute();
    }

    /// Reset the text query, keeping the lifecycle and category facets.
    pub fn clear_text_query(&mut self) {
        self.filter.text_query.clear();
        self.recompute();
    }

    /// Filtered view, or the canonical list when no filter is active.
    pub fn current_view(&self) -> Vec<&CatalogEntry> {
        match &self.filtered {
            Some(indices) => indices.iter().map(|&i| &self.canonical[i]).collect(),
            None => self.canonical.iter().collect(),
        }
    }

    /// The filtered view itself; `None` means "show the canonical list",
    /// which is not the same as an empty result.
    pub fn filtered_view(&self) -> Option<Vec<&CatalogEntry>> {
        self.filtered
            .as_ref()
            .map(|indices| indices.iter().map(|&i| &self.canonical[i]).collect())
    }

    pub fn view_len(&self) -> usize {
        match &self.filtered {
            Some(indices) => indices.len(),
            None => self.canonical.len(),
        }
    }

    pub fn is_view_empty(&self) -> bool {
        self.view_len() == 0
    }

    /// Position of `id` in the current view.
    pub fn position_of(&self, id: &ModelId) -> Option<usize> {
        match &self.filtered {
            Some(indices) => indices.iter().position(|&i| self.canonical[i].id() == id),
            None => self.canonical.iter().position(|e| e.id() == id),
        }
    }

    pub fn canonical(&self) -> &[CatalogEntry] {
        &self.canonical
    }

    pub fn entry(&self, id: &ModelId) -> Option<&CatalogEntry> {
        self.canonical.iter().find(|e| e.id() == id)
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn lifecycle_snapshot(&self) -> &LifecycleSnapshot {
        &self.states
    }

    /// Lifecycle state the lifecycle facet sees for `entry`.
    pub fn lifecycle_of(&self, entry: &CatalogEntry) -> LifecycleState {
        if self.local_as_downloaded && entry.is_local() {
            return LifecycleState::Completed;
        }
        self.states.state_of(entry.id())
    }

    fn recompute(&mut self) {
        if self.filter.is_default() {
            self.filtered = None;
            #[cfg(feature = "tracing")]
            tracing::debug!(
                canonical = self.canonical.len(),
                "filter state is default, showing canonical list"
            );
            return;
        }

        let lowered_query = self.filter.text_query.to_lowercase();
        let indices: Vec<usize> = self
            .canonical
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.keeps(entry, &lowered_query))
            .map(|(i, _)| i)
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            canonical = self.canonical.len(),
            visible = indices.len(),
            lifecycle = ?self.filter.lifecycle,
            category = ?self.filter.category,
            query_len = self.filter.text_query.len(),
            "recomputed filtered view"
        );

        self.filtered = Some(indices);
    }

    fn keeps(&self, entry: &CatalogEntry, lowered_query: &str) -> bool {
        if !self.filter.lifecycle.accepts(self.lifecycle_of(entry)) {
            return false;
        }
        if !self.filter.category.accepts(entry.is_category_flagged()) {
            return false;
        }
        lowered_query.is_empty() || entry.matches_lowercase_query(lowered_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntryFactory, CatalogRecord};

    fn ids<'a>(view: &[&'a CatalogEntry]) -> Vec<&'a str> {
        view.iter().map(|e| e.id().as_str()).collect()
    }

    fn sample() -> ModelListProjection {
        let factory = CatalogEntryFactory::default();
        let entries = factory.from_records([
            CatalogRecord::new("owner/Alpha-VL").with_tags(["chat"]),
            CatalogRecord::new("owner/Beta").with_tags(["llm"]),
            CatalogRecord::new("owner/Gamma").with_local_path("/models/gamma"),
        ]);
        let states = LifecycleSnapshot::new()
            .with("owner/Alpha-VL", LifecycleState::Completed)
            .with("owner/Beta", LifecycleState::Downloading);

        let mut projection = ModelListProjection::new();
        projection.replace_canonical_list(entries, states);
        projection
    }

    #[test]
    fn test_default_filter_has_absent_view() {
        let projection = sample();

        assert!(projection.filtered_view().is_none());
        assert_eq!(
            ids(&projection.current_view()),
            vec!["owner/Alpha-VL", "owner/Beta", "owner/Gamma"]
        );
    }

    #[test]
    fn test_non_matching_filter_has_empty_view() {
        let mut projection = sample();
        projection.set_filter("nothing-matches", LifecycleFacet::All, CategoryFacet::All);

        assert_eq!(projection.filtered_view().map(|v| v.len()), Some(0));
        assert!(projection.is_view_empty());
    }

    #[test]
    fn test_back_to_default_clears_view() {
        let mut projection = sample();
        projection.set_filter("beta", LifecycleFacet::All, CategoryFacet::All);
        assert!(projection.filtered_view().is_some());

        projection.clear_text_query();
        assert!(projection.filtered_view().is_none());
    }

    #[test]
    fn test_query_is_case_insensitive_over_name() {
        let mut projection = sample();
        projection.set_filter("ALPHA", LifecycleFacet::All, CategoryFacet::All);

        assert_eq!(ids(&projection.current_view()), vec!["owner/Alpha-VL"]);
    }

    #[test]
    fn test_name_marker_flags_category() {
        let mut projection = sample();
        projection.set_filter("", LifecycleFacet::All, CategoryFacet::Flagged);

        assert_eq!(ids(&projection.current_view()), vec!["owner/Alpha-VL"]);
    }

    #[test]
    fn test_local_entries_are_not_exempt_by_default() {
        let mut projection = sample();
        projection.set_filter("", LifecycleFacet::Downloaded, CategoryFacet::All);

        assert_eq!(ids(&projection.current_view()), vec!["owner/Alpha-VL"]);
    }

    #[test]
    fn test_local_entries_count_as_downloaded_when_enabled() {
        let mut projection = sample().with_local_as_downloaded(true);
        projection.set_filter("", LifecycleFacet::Downloaded, CategoryFacet::All);

        assert_eq!(
            ids(&projection.current_view()),
            vec!["owner/Alpha-VL", "owner/Gamma"]
        );
    }

    #[test]
    fn test_snapshot_refresh_recomputes() {
        let mut projection = sample();
        projection.set_filter("", LifecycleFacet::Downloading, CategoryFacet::All);
        assert_eq!(ids(&projection.current_view()), vec!["owner/Beta"]);

        projection.replace_lifecycle_snapshot(
            LifecycleSnapshot::new().with("owner/Beta", LifecycleState::Completed),
        );
        assert!(projection.is_view_empty());
    }

    #[test]
    fn test_position_of_follows_current_view() {
        let mut projection = sample();
        assert_eq!(projection.position_of(&"owner/Gamma".into()), Some(2));

        projection.set_filter("", LifecycleFacet::NotDownloaded, CategoryFacet::All);
        assert_eq!(projection.position_of(&"owner/Gamma".into()), Some(0));
        assert_eq!(projection.position_of(&"owner/Beta".into()), None);
    }

    #[test]
    fn test_empty_canonical_list() {
        let mut projection = ModelListProjection::new();
        projection.replace_canonical_list(Vec::new(), LifecycleSnapshot::new());
        assert!(projection.current_view().is_empty());

        projection.set_filter("x", LifecycleFacet::All, CategoryFacet::All);
        assert!(projection.current_view().is_empty());
    }
}
