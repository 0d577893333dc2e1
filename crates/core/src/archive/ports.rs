//! Port interfaces for slide downloads, thumbnails and the archive tree

use async_trait::async_trait;
use papersync_domain::Result;

/// Raw response of a slide export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDownload {
    pub status: u16,
    pub bytes: Vec<u8>,
}

impl SlideDownload {
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Trait for downloading exported slide decks
#[async_trait]
pub trait SlideFetcher: Send + Sync {
    /// GET `url`. Non-200 statuses are returned, not raised; `Err` means the
    /// request itself failed.
    async fn fetch(&self, url: &str) -> Result<SlideDownload>;
}

/// Trait for turning the first page of a PDF into a PNG thumbnail
pub trait SlideRenderer: Send + Sync {
    /// Render page one at `width` pixels wide, aspect ratio preserved.
    fn render_thumbnail(&self, pdf: &[u8], width: u32) -> Result<Vec<u8>>;
}

/// Trait for the on-disk archive, addressed by channel folder name
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    /// Create the archive root if absent.
    async fn ensure_root(&self) -> Result<()>;

    async fn channel_exists(&self, channel: &str) -> Result<bool>;

    async fn create_channel_dir(&self, channel: &str) -> Result<()>;

    async fn write_text(&self, channel: &str, file_name: &str, contents: &str) -> Result<()>;

    async fn write_bytes(&self, channel: &str, file_name: &str, contents: &[u8]) -> Result<()>;
}
