use std::path::PathBuf;

use async_trait::async_trait;

use crate::ids::ModelId;

#[async_trait]
pub trait DownloadControlPort: Send + Sync {
    /// Start (or resume) downloading `id`.
    async fn start_download(&self, id: &ModelId) -> anyhow::Result<()>;

    /// Path of the downloaded model, if the download completed and the files
    /// are still present.
    async fn downloaded_path(&self, id: &ModelId) -> anyhow::Result<Option<PathBuf>>;
}
