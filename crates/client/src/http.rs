//! Authenticated access to the TestLab API

use crate::error::{Error, Result};
use crate::retry::{DEFAULT_MAX_RETRIES, RetryTransport};
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use url::Url;

/// Header carrying the static API key.
pub const HEADER_API_KEY: &str = "X-API-Key";

/// Per-request timeout of the underlying HTTP client.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Content type of uploaded archives.
pub(crate) const ARCHIVE_CONTENT_TYPE: &str = "application/zstd";

/// Typed access to the TestLab API with authentication and retries.
pub struct Api {
    base: Url,
    key: String,
    client: reqwest::Client,
    transport: RetryTransport,
}

impl Api {
    /// Create a client for `server`, authenticating with `api_key`.
    pub fn new(server: &str, api_key: &str) -> Result<Self> {
        let base = Url::parse(server)
            .map_err(|e| Error::config(format!("invalid server url {server:?}: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("testlab-record/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::config(format!("failed to create HTTP client: {e}")))?;

        let transport = RetryTransport::new(Box::new(client.clone()), DEFAULT_MAX_RETRIES);

        Ok(Self {
            base,
            key: api_key.to_string(),
            client,
            transport,
        })
    }

    /// Build an authenticated request against an API path.
    pub(crate) fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder> {
        let url = self
            .base
            .join(path)
            .map_err(|e| Error::config(format!("invalid api path {path:?}: {e}")))?;

        Ok(self
            .client
            .request(method, url)
            .header(HEADER_API_KEY, &self.key))
    }

    /// Build an unauthenticated PUT of raw archive bytes to a pre-signed URL.
    pub(crate) fn put_archive(&self, url: &str, data: Vec<u8>) -> reqwest::RequestBuilder {
        self.client
            .put(url)
            .header(CONTENT_TYPE, ARCHIVE_CONTENT_TYPE)
            .body(data)
    }

    /// Send a request through the retrying transport.
    pub(crate) async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let req = builder
            .build()
            .map_err(|e| Error::config(format!("failed to build request: {e}")))?;
        self.transport.execute(req).await
    }
}
