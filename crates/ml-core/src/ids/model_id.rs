use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Catalog identifier of a model, e.g. `taobao-mnn/Qwen2-VL-2B-Instruct-MNN`.
///
/// Opaque to this crate: it is compared and hashed, never parsed, except by
/// the naming collaborator that turns it into a display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ModelId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ModelId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ModelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for ModelId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_model_id_from_str() {
        let id: ModelId = "taobao-mnn/Qwen-7B".into();
        assert_eq!(id.as_str(), "taobao-mnn/Qwen-7B");
        assert_eq!(id.to_string(), "taobao-mnn/Qwen-7B");
    }

    #[test]
    fn test_model_id_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(ModelId::from("id1"), 1);
        assert_eq!(map.get("id1"), Some(&1));
    }

    #[test]
    fn test_model_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ModelId::from("id1")).unwrap();
        assert_eq!(json, "\"id1\"");
    }
}
