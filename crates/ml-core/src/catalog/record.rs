use serde::{Deserialize, Serialize};

use crate::ids::ModelId;

/// Raw catalog record as delivered by a catalog source, before naming and
/// classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// 模型 ID（例如 `taobao-mnn/Qwen-7B-MNN`）
    pub id: ModelId,

    #[serde(default)]
    pub tags: Vec<String>,

    /// 本地模型路径，非空时表示模型已在本地
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
}

impl CatalogRecord {
    pub fn new(id: impl Into<ModelId>) -> Self {
        Self {
            id: id.into(),
            tags: Vec::new(),
            local_path: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_local_path(mut self, path: impl Into<String>) -> Self {
        self.local_path = Some(path.into());
        self
    }
}
