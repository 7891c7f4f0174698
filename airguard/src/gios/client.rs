//! GIOŚ HTTP client.
//!
//! Issues unauthenticated GETs against a fixed base URL and decodes the
//! JSON bodies. One call, one request: there are no retries.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use super::error::FetchError;

/// Default base URL of the GIOŚ air-quality REST API.
const DEFAULT_BASE_URL: &str = "https://api.gios.gov.pl/pjp-api/rest";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Longest response body kept in an error.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Configuration for the GIOŚ client.
#[derive(Debug, Clone)]
pub struct GiosConfig {
    /// Base URL for the API (defaults to production GIOŚ)
    pub base_url: String,
    /// Request timeout; `None` keeps the HTTP client's default
    pub timeout: Option<Duration>,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
}

impl GiosConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }

    /// Build a config from `GIOS_BASE_URL` and `GIOS_TIMEOUT_SECS`.
    ///
    /// Unset variables keep their defaults; an unparsable timeout is ignored.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(url) = std::env::var("GIOS_BASE_URL") {
            config = config.with_base_url(url);
        }
        if let Ok(secs) = std::env::var("GIOS_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) => config = config.with_timeout(Duration::from_secs(secs)),
                Err(e) => warn!(value = %secs, error = %e, "Ignoring invalid GIOS_TIMEOUT_SECS"),
            }
        }
        config
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for GiosConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// GIOŚ air-quality API client.
///
/// Uses a semaphore to limit concurrent requests so that enriching many
/// stations at once doesn't flood the API.
#[derive(Debug, Clone)]
pub struct GiosClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl GiosClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GiosConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}{path}` and decode the body as `T`.
    ///
    /// Anything but 200 OK is an error, as is a body that doesn't decode.
    pub async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| FetchError::Status {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: snippet(&body),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| FetchError::Json {
            message: e.to_string(),
            body: Some(snippet(&body)),
        })
    }
}

/// Truncate a response body for inclusion in an error.
fn snippet(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
