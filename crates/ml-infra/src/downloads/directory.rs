//! Download control backed by a downloads directory.
//!
//! The transfer itself is driven outside this crate; this adapter owns where
//! finished models live on disk and keeps the lifecycle tracker in step with
//! the requests it receives.

use anyhow::{Context, Result};
use async_trait::async_trait;
use ml_core::catalog::LifecycleState;
use ml_core::ids::ModelId;
use ml_core::ports::DownloadControlPort;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::{info, warn};

use crate::lifecycle::InMemoryLifecycleTracker;

/// Marker written once the files of a model are complete.
const COMPLETE_MARKER: &str = ".complete";

pub struct DirectoryDownloadControl {
    root: PathBuf,
    tracker: Arc<InMemoryLifecycleTracker>,
}

impl DirectoryDownloadControl {
    pub fn new(root: impl Into<PathBuf>, tracker: Arc<InMemoryLifecycleTracker>) -> Self {
        Self {
            root: root.into(),
            tracker,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the files of `id`.
    ///
    /// The directory name is the hex encoding of the id, so distinct ids never
    /// share a directory and no id can leave the root. Empty, `.` and `..`
    /// are rejected.
    pub fn model_dir(&self, id: &ModelId) -> Result<PathBuf> {
        match id.as_str() {
            "" | "." | ".." => anyhow::bail!("invalid model id for download: {id:?}"),
            raw => Ok(self.root.join(hex::encode(raw))),
        }
    }

    /// Mark the transfer of `id` as finished.
    ///
    /// 文件必须已经写入 `model_dir(id)`。
    pub async fn mark_completed(&self, id: &ModelId) -> Result<()> {
        let dir = self.model_dir(id)?;
        let present = fs::try_exists(&dir)
            .await
            .with_context(|| format!("check model dir failed: {}", dir.display()))?;
        if !present {
            anyhow::bail!("model files missing: {}", dir.display());
        }

        let marker = dir.join(COMPLETE_MARKER);
        fs::write(&marker, id.as_str())
            .await
            .with_context(|| format!("write completion marker failed: {}", marker.display()))?;

        self.tracker.set_state(id.clone(), LifecycleState::Completed);
        info!(model_id = %id, "Download completed");
        Ok(())
    }

    /// Mark the transfer of `id` as failed.
    pub fn mark_failed(&self, id: &ModelId) {
        self.tracker.set_state(id.clone(), LifecycleState::Failed);
        warn!(model_id = %id, "Download failed");
    }
}

#[async_trait]
impl DownloadControlPort for DirectoryDownloadControl {
    async fn start_download(&self, id: &ModelId) -> Result<()> {
        let dir = self.model_dir(id)?;
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("create model dir failed: {}", dir.display()))?;

        // 重新下载时旧的完成标记失效
        let marker = dir.join(COMPLETE_MARKER);
        match fs::remove_file(&marker).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("remove completion marker failed: {}", marker.display())
                })
            }
        }

        let previous = self.tracker.set_state(id.clone(), LifecycleState::Downloading);
        info!(model_id = %id, ?previous, dir = %dir.display(), "Download requested");
        Ok(())
    }

    /// Only a directory carrying the completion marker counts as downloaded.
    async fn downloaded_path(&self, id: &ModelId) -> Result<Option<PathBuf>> {
        let dir = self.model_dir(id)?;
        let marker = dir.join(COMPLETE_MARKER);
        let complete = fs::try_exists(&marker)
            .await
            .with_context(|| format!("check completion marker failed: {}", marker.display()))?;

        Ok(complete.then_some(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ml_core::ports::LifecycleTrackerPort;
    use tempfile::TempDir;

    fn control(dir: &TempDir) -> (DirectoryDownloadControl, Arc<InMemoryLifecycleTracker>) {
        let tracker = Arc::new(InMemoryLifecycleTracker::new());
        (
            DirectoryDownloadControl::new(dir.path(), tracker.clone()),
            tracker,
        )
    }

    #[test]
    fn test_model_dir_stays_under_root() {
        let dir = TempDir::new().unwrap();
        let (control, _) = control(&dir);

        let path = control.model_dir(&"taobao-mnn/Qwen-7B-MNN".into()).unwrap();

        assert_eq!(path.parent(), Some(dir.path()));
    }

    #[test]
    fn test_similar_ids_get_distinct_dirs() {
        let dir = TempDir::new().unwrap();
        let (control, _) = control(&dir);

        let slash = control.model_dir(&"org/model".into()).unwrap();
        let underscores = control.model_dir(&"org__model".into()).unwrap();
        let backslash = control.model_dir(&"org\\model".into()).unwrap();

        assert_ne!(slash, underscores);
        assert_ne!(slash, backslash);
        assert_ne!(underscores, backslash);
    }

    #[tokio::test]
    async fn test_dot_ids_are_rejected() {
        let dir = TempDir::new().unwrap();
        let (control, tracker) = control(&dir);

        for raw in ["", ".", ".."] {
            let id = ModelId::from(raw);
            assert!(control.model_dir(&id).is_err());
            assert!(control.start_download(&id).await.is_err());
            assert!(control.downloaded_path(&id).await.is_err());
        }
        assert!(tracker.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_start_download_marks_downloading() {
        let dir = TempDir::new().unwrap();
        let (control, tracker) = control(&dir);
        let id = ModelId::from("org/model");

        control.start_download(&id).await.unwrap();

        assert_eq!(tracker.snapshot().state_of(&id), LifecycleState::Downloading);
        assert!(control.model_dir(&id).unwrap().is_dir());
    }

    #[tokio::test]
    async fn test_unfinished_download_is_not_downloaded() {
        let dir = TempDir::new().unwrap();
        let (control, _) = control(&dir);
        let id = ModelId::from("org/model");

        assert_eq!(control.downloaded_path(&id).await.unwrap(), None);
        control.start_download(&id).await.unwrap();

        assert_eq!(control.downloaded_path(&id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_completed_download_resolves_its_dir() {
        let dir = TempDir::new().unwrap();
        let (control, tracker) = control(&dir);
        let id = ModelId::from("org/model");

        assert!(control.mark_completed(&id).await.is_err());

        control.start_download(&id).await.unwrap();
        control.mark_completed(&id).await.unwrap();

        assert_eq!(
            control.downloaded_path(&id).await.unwrap(),
            Some(control.model_dir(&id).unwrap())
        );
        assert_eq!(tracker.snapshot().state_of(&id), LifecycleState::Completed);
    }

    #[tokio::test]
    async fn test_completion_does_not_leak_to_similar_id() {
        let dir = TempDir::new().unwrap();
        let (control, _) = control(&dir);
        let done = ModelId::from("org/model");
        let other = ModelId::from("org__model");

        control.start_download(&done).await.unwrap();
        control.mark_completed(&done).await.unwrap();

        assert_eq!(control.downloaded_path(&other).await.unwrap(), None);
        assert!(control.mark_completed(&other).await.is_err());
    }

    #[tokio::test]
    async fn test_restart_clears_completion() {
        let dir = TempDir::new().unwrap();
        let (control, _) = control(&dir);
        let id = ModelId::from("org/model");
        control.start_download(&id).await.unwrap();
        control.mark_completed(&id).await.unwrap();

        control.start_download(&id).await.unwrap();

        assert_eq!(control.downloaded_path(&id).await.unwrap(), None);
    }

    #[test]
    fn test_mark_failed() {
        let dir = TempDir::new().unwrap();
        let (control, tracker) = control(&dir);
        let id = ModelId::from("m");

        control.mark_failed(&id);

        assert!(tracker.snapshot().state_of(&id).is_unfinished());
    }
}
