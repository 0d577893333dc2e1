use std::path::{Path, PathBuf};

use async_trait::async_trait;
use papersync_core::ArchiveStore;
use papersync_domain::{PaperSyncError, Result};
use tokio::fs;
use tracing::debug;

use crate::errors::InfraError;

/// Archive laid out as `<root>/<channel>/<file>`.
#[derive(Debug, Clone)]
pub struct FsArchiveStore {
    root: PathBuf,
}

impl FsArchiveStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn channel_dir(&self, channel: &str) -> Result<PathBuf> {
        ensure_plain_name(channel)?;
        Ok(self.root.join(channel))
    }

    fn file_path(&self, channel: &str, file_name: &str) -> Result<PathBuf> {
        ensure_plain_name(file_name)?;
        Ok(self.channel_dir(channel)?.join(file_name))
    }
}

/// Single path component only.
fn ensure_plain_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(PaperSyncError::InvalidInput(format!(
            "unsafe archive path component '{name}'"
        )));
    }
    Ok(())
}

fn io_error(err: std::io::Error) -> PaperSyncError {
    InfraError::from(err).into()
}

#[async_trait]
impl ArchiveStore for FsArchiveStore {
    async fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await.map_err(io_error)
    }

    async fn channel_exists(&self, channel: &str) -> Result<bool> {
        fs::try_exists(self.channel_dir(channel)?).await.map_err(io_error)
    }

    async fn create_channel_dir(&self, channel: &str) -> Result<()> {
        let dir = self.channel_dir(channel)?;
        fs::create_dir(&dir).await.map_err(io_error)?;
        debug!(path = %dir.display(), "archive folder created");
        Ok(())
    }

    async fn write_text(&self, channel: &str, file_name: &str, contents: &str) -> Result<()> {
        self.write_bytes(channel, file_name, contents.as_bytes()).await
    }

    async fn write_bytes(&self, channel: &str, file_name: &str, contents: &[u8]) -> Result<()> {
        let path = self.file_path(channel, file_name)?;
        fs::write(&path, contents).await.map_err(io_error)?;
        debug!(path = %path.display(), size = contents.len(), "archive file written");
        Ok(())
    }
}
