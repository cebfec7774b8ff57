use async_trait::async_trait;

use crate::catalog::CatalogRecord;

/// Supplies the catalog, in the order it should be displayed.
#[async_trait]
pub trait CatalogSourcePort: Send + Sync {
    async fn fetch(&self) -> anyhow::Result<Vec<CatalogRecord>>;
}
