use anyhow::{Context, Result};
use async_trait::async_trait;
use ml_core::{catalog::CatalogRecord, ports::CatalogSourcePort};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Catalog stored as a JSON array of records.
///
/// ```json
/// [
///   { "id": "Qwen/Qwen2-VL-2B", "tags": ["vision", "chat"] },
///   { "id": "my-model", "local_path": "/data/models/my-model" }
/// ]
/// ```
///
/// The file is re-read on every fetch, so edits show up on the next refresh.
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSourcePort for JsonCatalogSource {
    async fn fetch(&self) -> Result<Vec<CatalogRecord>> {
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read catalog failed: {}", self.path.display()))?;

        let records: Vec<CatalogRecord> = serde_json::from_str(&content)
            .with_context(|| format!("parse catalog failed: {}", self.path.display()))?;

        debug!(path = %self.path.display(), records = records.len(), "Catalog file read");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fetch_keeps_file_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("models.json");
        std::fs::write(
            &path,
            r#"[{"id":"b","tags":["audio"]},{"id":"a"},{"id":"c","local_path":"/m/c"}]"#,
        )
        .unwrap();

        let records = JsonCatalogSource::new(&path).fetch().await.unwrap();

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(records[0].tags, vec!["audio".to_string()]);
        assert!(records[1].tags.is_empty());
        assert_eq!(records[2].local_path.as_deref(), Some("/m/c"));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let source = JsonCatalogSource::new(dir.path().join("absent.json"));

        let err = source.fetch().await.unwrap_err();
        assert!(format!("{err:#}").contains("read catalog failed"));
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("models.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonCatalogSource::new(&path).fetch().await.unwrap_err();
        assert!(format!("{err:#}").contains("parse catalog failed"));
    }
}
