use anyhow::{Context, Result};
use ml_core::ModelListConfig;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Loads [`ModelListConfig`] from a TOML file.
///
/// A missing file is not an error: the defaults are used, with the catalog
/// expected next to the config file. A relative `catalog.path` is resolved
/// against the config file's directory.
pub struct FileConfigLoader {
    path: PathBuf,
}

impl FileConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn base_dir(&self) -> PathBuf {
        self.path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    pub async fn load(&self) -> Result<ModelListConfig> {
        let base_dir = self.base_dir();

        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "Config file not found, using defaults");
                return Ok(ModelListConfig::with_system_defaults(base_dir));
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read config failed: {}", self.path.display()))
            }
        };

        let mut config = ModelListConfig::from_toml_str(&content)
            .with_context(|| format!("parse config failed: {}", self.path.display()))?;

        if config.catalog_path.as_os_str().is_empty() {
            config.catalog_path = ModelListConfig::with_system_defaults(base_dir).catalog_path;
        } else if config.catalog_path.is_relative() {
            config.catalog_path = base_dir.join(&config.catalog_path);
        }

        debug!(
            path = %self.path.display(),
            catalog = %config.catalog_path.display(),
            "Config loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ml_core::{CategoryFacet, LifecycleFacet};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let loader = FileConfigLoader::new(dir.path().join("modelist.toml"));

        let config = loader.load().await.unwrap();

        assert_eq!(config.catalog_path, dir.path().join("models.json"));
        assert!(config.initial_filter.is_default());
        assert!(!config.treat_local_as_downloaded);
    }

    #[tokio::test]
    async fn test_file_values_and_relative_catalog_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("modelist.toml");
        std::fs::write(
            &path,
            r#"
[filter]
lifecycle = "not_downloaded"
category = "multimodal"
treat_local_as_downloaded = true

[catalog]
path = "catalog/models.json"
"#,
        )
        .unwrap();

        let config = FileConfigLoader::new(&path).load().await.unwrap();

        assert_eq!(config.initial_filter.lifecycle, LifecycleFacet::NotDownloaded);
        assert_eq!(config.initial_filter.category, CategoryFacet::Flagged);
        assert!(config.treat_local_as_downloaded);
        assert_eq!(config.catalog_path, dir.path().join("catalog/models.json"));
    }

    #[tokio::test]
    async fn test_absolute_catalog_path_is_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("modelist.toml");
        std::fs::write(&path, "[catalog]\npath = \"/srv/models.json\"\n").unwrap();

        let config = FileConfigLoader::new(&path).load().await.unwrap();

        assert_eq!(config.catalog_path, PathBuf::from("/srv/models.json"));
    }

    #[tokio::test]
    async fn test_unknown_facet_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("modelist.toml");
        std::fs::write(&path, "[filter]\nlifecycle = \"paused\"\n").unwrap();

        let err = FileConfigLoader::new(&path).load().await.unwrap_err();

        assert!(format!("{err:#}").contains("parse config failed"));
    }
}
