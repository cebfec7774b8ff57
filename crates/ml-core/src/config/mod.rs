//! Model list configuration DTO.
//!
//! Maps the TOML configuration file onto plain data. Missing keys fall back to
//! the built-in defaults; keys of the wrong type or unknown facet names are
//! reported as [`ConfigError`].

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::{KeywordClassifier, DEFAULT_CATEGORY_KEYWORDS};
use crate::filter::{CategoryFacet, FacetError, FilterState, LifecycleFacet};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config key `{key}` must be {expected}")]
    InvalidType { key: &'static str, expected: &'static str },

    #[error(transparent)]
    InvalidFacet(#[from] FacetError),
}

/// Model list configuration (pure data).
#[derive(Debug, Clone, PartialEq)]
pub struct ModelListConfig {
    /// Keywords marking an entry as multimodal
    pub category_keywords: Vec<String>,

    /// Filter applied before the user touches any control
    pub initial_filter: FilterState,

    /// Treat locally-resident entries as downloaded for the lifecycle facet
    pub treat_local_as_downloaded: bool,

    /// Catalog file path (path info only, no existence check)
    pub catalog_path: PathBuf,
}

impl ModelListConfig {
    /// Build the config from a parsed TOML document.
    ///
    /// ```toml
    /// [classifier]
    /// keywords = ["vision", "audio"]
    ///
    /// [filter]
    /// lifecycle = "downloaded"
    /// category = "all"
    /// treat_local_as_downloaded = false
    ///
    /// [catalog]
    /// path = "/data/models.json"
    /// ```
    pub fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let mut config = Self::empty();

        if let Some(keywords) = value.get("classifier").and_then(|c| c.get("keywords")) {
            let array = keywords.as_array().ok_or(ConfigError::InvalidType {
                key: "classifier.keywords",
                expected: "an array of strings",
            })?;
            config.category_keywords = array
                .iter()
                .map(|k| {
                    k.as_str().map(str::to_string).ok_or(ConfigError::InvalidType {
                        key: "classifier.keywords",
                        expected: "an array of strings",
                    })
                })
                .collect::<Result<_, _>>()?;
        }

        let filter = value.get("filter");
        if let Some(lifecycle) = filter.and_then(|f| f.get("lifecycle")) {
            let raw = lifecycle.as_str().ok_or(ConfigError::InvalidType {
                key: "filter.lifecycle",
                expected: "a string",
            })?;
            config.initial_filter.lifecycle = raw.parse::<LifecycleFacet>()?;
        }
        if let Some(category) = filter.and_then(|f| f.get("category")) {
            let raw = category.as_str().ok_or(ConfigError::InvalidType {
                key: "filter.category",
                expected: "a string",
            })?;
            config.initial_filter.category = raw.parse::<CategoryFacet>()?;
        }
        if let Some(flag) = filter.and_then(|f| f.get("treat_local_as_downloaded")) {
            config.treat_local_as_downloaded = flag.as_bool().ok_or(ConfigError::InvalidType {
                key: "filter.treat_local_as_downloaded",
                expected: "a boolean",
            })?;
        }

        if let Some(path) = value.get("catalog").and_then(|c| c.get("path")) {
            let raw = path.as_str().ok_or(ConfigError::InvalidType {
                key: "catalog.path",
                expected: "a string",
            })?;
            config.catalog_path = PathBuf::from(raw);
        }

        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let value: toml::Value = toml::from_str(raw)?;
        Self::from_toml(&value)
    }

    /// Default keywords, default filter, empty catalog path.
    pub fn empty() -> Self {
        Self {
            category_keywords: DEFAULT_CATEGORY_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            initial_filter: FilterState::default(),
            treat_local_as_downloaded: false,
            catalog_path: PathBuf::new(),
        }
    }

    /// Defaults with the catalog file placed under `data_dir`.
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            catalog_path: data_dir.join("models.json"),
            ..Self::empty()
        }
    }

    pub fn classifier(&self) -> KeywordClassifier {
        KeywordClassifier::new(&self.category_keywords)
    }
}

impl Default for ModelListConfig {
    fn default() -> Self {
        Self::empty()
    }
}
