//! Use case for loading the catalog and turning records into entries.

use std::sync::Arc;

use ml_core::catalog::{CatalogEntry, CatalogEntryFactory};
use ml_core::ports::CatalogSourcePort;
use tracing::{info, info_span, Instrument};

#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("Failed to fetch catalog: {0}")]
    Fetch(String),
}

/// Fetches catalog records and builds immutable entries from them.
///
/// Records with an id already seen earlier in the list are dropped, keeping
/// the first occurrence, so the canonical list never holds two entries with
/// the same id.
pub struct LoadCatalog {
    source: Arc<dyn CatalogSourcePort>,
    factory: CatalogEntryFactory,
}

impl LoadCatalog {
    pub fn new(source: Arc<dyn CatalogSourcePort>, factory: CatalogEntryFactory) -> Self {
        Self { source, factory }
    }

    pub async fn execute(&self) -> Result<Vec<CatalogEntry>, CatalogLoadError> {
        let span = info_span!("usecase.load_catalog.execute");

        async {
            let records = self
                .source
                .fetch()
                .await
                .map_err(|e| CatalogLoadError::Fetch(format!("{e:#}")))?;

            let fetched = records.len();
            let mut seen = std::collections::HashSet::with_capacity(fetched);
            let entries: Vec<CatalogEntry> = records
                .into_iter()
                .filter(|record| {
                    let fresh = seen.insert(record.id.clone());
                    if !fresh {
                        tracing::warn!(model_id = %record.id, "Duplicate catalog id dropped");
                    }
                    fresh
                })
                .map(|record| self.factory.from_record(record))
                .collect();

            info!(fetched, kept = entries.len(), "Catalog loaded");
            Ok(entries)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ml_core::catalog::CatalogRecord;

    struct FixedSource {
        records: Vec<CatalogRecord>,
        should_fail: bool,
    }

    #[async_trait]
    impl CatalogSourcePort for FixedSource {
        async fn fetch(&self) -> anyhow::Result<Vec<CatalogRecord>> {
            if self.should_fail {
                anyhow::bail!("network unreachable");
            }
            Ok(self.records.clone())
        }
    }

    #[tokio::test]
    async fn test_load_builds_entries_in_source_order() {
        let source = FixedSource {
            records: vec![
                CatalogRecord::new("owner/Qwen2-VL").with_tags(["chat"]),
                CatalogRecord::new("owner/Llama").with_tags(["llm"]),
            ],
            should_fail: false,
        };

        let uc = LoadCatalog::new(Arc::new(source), CatalogEntryFactory::default());
        let entries = uc.execute().await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].display_name(), "Qwen2-VL");
        assert!(entries[0].is_category_flagged());
        assert!(!entries[1].is_category_flagged());
    }

    #[tokio::test]
    async fn test_load_drops_duplicate_ids() {
        let source = FixedSource {
            records: vec![
                CatalogRecord::new("id1").with_tags(["first"]),
                CatalogRecord::new("id2"),
                CatalogRecord::new("id1").with_tags(["second"]),
            ],
            should_fail: false,
        };

        let uc = LoadCatalog::new(Arc::new(source), CatalogEntryFactory::default());
        let entries = uc.execute().await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tags(), &["first".to_string()]);
    }

    #[tokio::test]
    async fn test_load_maps_source_failure() {
        let source = FixedSource {
            records: Vec::new(),
            should_fail: true,
        };

        let uc = LoadCatalog::new(Arc::new(source), CatalogEntryFactory::default());
        let err = uc.execute().await.unwrap_err();

        assert!(matches!(err, CatalogLoadError::Fetch(msg) if msg.contains("network unreachable")));
    }
}
