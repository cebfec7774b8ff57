use crate::ids::ModelId;

/// Turns a catalog id into the name shown to the user.
pub trait ModelNamer: Send + Sync {
    fn display_name(&self, id: &ModelId) -> String;
}

/// Uses the last `/`-separated segment of the id, so
/// `taobao-mnn/Qwen-7B-MNN` becomes `Qwen-7B-MNN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastSegmentNamer;

impl ModelNamer for LastSegmentNamer {
    fn display_name(&self, id: &ModelId) -> String {
        let raw = id.as_str().trim_end_matches('/');
        raw.rsplit('/').next().unwrap_or(raw).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_owner_prefix() {
        let name = LastSegmentNamer.display_name(&"taobao-mnn/Qwen-7B-MNN".into());
        assert_eq!(name, "Qwen-7B-MNN");
    }

    #[test]
    fn test_plain_id_is_its_own_name() {
        assert_eq!(LastSegmentNamer.display_name(&"id1".into()), "id1");
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(LastSegmentNamer.display_name(&"owner/model/".into()), "model");
    }
}
