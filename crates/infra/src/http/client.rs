use std::time::Duration;

use papersync_domain::{PaperSyncError, Result};
use reqwest::Client;
use tracing::debug;

use crate::errors::InfraError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_USER_AGENT: &str = concat!("papersync/", env!("CARGO_PKG_VERSION"));

/// Status and fully buffered body of a GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferedResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Thin wrapper over `reqwest` for one-shot downloads.
///
/// Each call is a single attempt; a failed request is returned to the caller
/// as a domain error.
#[derive(Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// GET `url` and buffer the body. Any status is returned as-is.
    pub async fn get(&self, url: &str) -> Result<BufferedResponse> {
        debug!(%url, "GET");
        let response = self.inner.get(url).send().await.map_err(|err| {
            debug!(%url, error = %err, "GET failed");
            to_domain(err)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(to_domain)?.to_vec();
        debug!(%url, status, size = body.len(), "GET finished");
        Ok(BufferedResponse { status, body })
    }
}

fn to_domain(err: reqwest::Error) -> PaperSyncError {
    InfraError::from(err).into()
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    ignore_proxy_env: bool,
}

impl HttpClientBuilder {
    fn new() -> Self {
        Self { timeout: DEFAULT_TIMEOUT, ignore_proxy_env: false }
    }

    /// Whole-request timeout, body included.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Skip `HTTP_PROXY`-style variables; used against local test servers.
    pub fn ignore_proxy_env(mut self, ignore: bool) -> Self {
        self.ignore_proxy_env = ignore;
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let mut builder = Client::builder().timeout(self.timeout).user_agent(DEFAULT_USER_AGENT);
        if self.ignore_proxy_env {
            builder = builder.no_proxy();
        }
        Ok(HttpClient { inner: builder.build().map_err(to_domain)? })
    }
}
