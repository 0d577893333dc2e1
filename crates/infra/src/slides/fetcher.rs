use std::time::Duration;

use async_trait::async_trait;
use papersync_core::{SlideDownload, SlideFetcher};
use papersync_domain::Result;
use tracing::debug;

use crate::http::HttpClient;

/// Downloads exported decks over plain HTTP GET.
///
/// A new client is built for every request so one deck's connection state
/// never leaks into the next.
#[derive(Debug, Clone)]
pub struct HttpSlideFetcher {
    timeout: Duration,
    ignore_proxy_env: bool,
}

impl HttpSlideFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout, ignore_proxy_env: false }
    }

    #[cfg(test)]
    fn local(timeout: Duration) -> Self {
        Self { timeout, ignore_proxy_env: true }
    }
}

impl Default for HttpSlideFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(60))
    }
}

#[async_trait]
impl SlideFetcher for HttpSlideFetcher {
    async fn fetch(&self, url: &str) -> Result<SlideDownload> {
        let client = HttpClient::builder()
            .timeout(self.timeout)
            .ignore_proxy_env(self.ignore_proxy_env)
            .build()?;
        let response = client.get(url).await?;
        debug!(%url, status = response.status, "slide export fetched");
        Ok(SlideDownload { status: response.status, bytes: response.body })
    }
}
