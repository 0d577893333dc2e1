use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use papersync_core::{ArchiveStore, SlideDownload, SlideFetcher, SlideRenderer};
use papersync_domain::{PaperSyncError, Result as DomainResult};

/// Archive tree kept in memory: channel folder -> file name -> bytes.
#[derive(Default, Clone)]
pub struct MemoryArchive {
    folders: Arc<Mutex<BTreeMap<String, BTreeMap<String, Vec<u8>>>>>,
}

impl MemoryArchive {
    pub fn with_folder(self, channel: &str) -> Self {
        self.folders.lock().unwrap().entry(channel.to_string()).or_default();
        self
    }

    pub fn folders(&self) -> Vec<String> {
        self.folders.lock().unwrap().keys().cloned().collect()
    }

    pub fn files(&self, channel: &str) -> Vec<String> {
        self.folders
            .lock()
            .unwrap()
            .get(channel)
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn read(&self, channel: &str, file: &str) -> Option<Vec<u8>> {
        self.folders.lock().unwrap().get(channel)?.get(file).cloned()
    }
}

#[async_trait]
impl ArchiveStore for MemoryArchive {
    async fn ensure_root(&self) -> DomainResult<()> {
        Ok(())
    }

    async fn channel_exists(&self, channel: &str) -> DomainResult<bool> {
        Ok(self.folders.lock().unwrap().contains_key(channel))
    }

    async fn create_channel_dir(&self, channel: &str) -> DomainResult<()> {
        self.folders.lock().unwrap().entry(channel.to_string()).or_default();
        Ok(())
    }

    async fn write_text(&self, channel: &str, file_name: &str, contents: &str) -> DomainResult<()> {
        self.write_bytes(channel, file_name, contents.as_bytes()).await
    }

    async fn write_bytes(
        &self,
        channel: &str,
        file_name: &str,
        contents: &[u8],
    ) -> DomainResult<()> {
        let mut folders = self.folders.lock().unwrap();
        let folder = folders
            .get_mut(channel)
            .ok_or_else(|| PaperSyncError::Storage(format!("missing folder {channel}")))?;
        folder.insert(file_name.to_string(), contents.to_vec());
        Ok(())
    }
}

/// Canned slide exports keyed by URL; unknown URLs answer 404.
#[derive(Default, Clone)]
pub struct CannedFetcher {
    responses: Arc<Mutex<HashMap<String, DomainResult<SlideDownload>>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl CannedFetcher {
    pub fn respond(self, url: &str, status: u16, bytes: &[u8]) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), Ok(SlideDownload { status, bytes: bytes.to_vec() }));
        self
    }

    pub fn fail(self, url: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), Err(PaperSyncError::Network("connection reset".into())));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlideFetcher for CannedFetcher {
    async fn fetch(&self, url: &str) -> DomainResult<SlideDownload> {
        self.requested.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or(Ok(SlideDownload { status: 404, bytes: Vec::new() }))
    }
}

/// Renders `b"png:<width>:<pdf>"`; PDFs starting with `broken` fail.
pub struct EchoRenderer;

impl SlideRenderer for EchoRenderer {
    fn render_thumbnail(&self, pdf: &[u8], width: u32) -> DomainResult<Vec<u8>> {
        if pdf.starts_with(b"broken") {
            return Err(PaperSyncError::Render("not a PDF".into()));
        }
        let mut png = format!("png:{width}:").into_bytes();
        png.extend_from_slice(pdf);
        Ok(png)
    }
}
