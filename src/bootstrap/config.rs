//! # Configuration Loader / 配置加载器
//!
//! Resolves which config file to read and hands it to the infra loader.
//! No validation happens here.

use anyhow::Context;
use ml_core::ModelListConfig;
use ml_infra::fs::config_file_path;
use ml_infra::FileConfigLoader;
use std::path::PathBuf;

/// Load the model list configuration.
///
/// `None` reads `modelist.toml` from the application data directory. A
/// missing file yields the defaults, with the catalog expected next to it.
pub async fn load_config(config_path: Option<PathBuf>) -> anyhow::Result<ModelListConfig> {
    let path = match config_path {
        Some(path) => path,
        None => config_file_path().context("Failed to resolve default config path")?,
    };

    FileConfigLoader::new(path).load().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_load_config_reads_explicit_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[classifier]\nkeywords = [\"vision\"]\n")
            .unwrap();

        let config = load_config(Some(temp_file.path().to_path_buf()))
            .await
            .unwrap();

        assert_eq!(config.category_keywords, vec!["vision".to_string()]);
    }

    #[tokio::test]
    async fn test_load_config_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[filter\n").unwrap();

        let result = load_config(Some(temp_file.path().to_path_buf())).await;

        assert!(result.is_err());
    }
}
