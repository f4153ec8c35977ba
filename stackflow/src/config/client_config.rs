//! Client config: backend base URL and optional request timeout. Filled from env / .env.
//!
//! Interacts with [`HttpStackApi`](crate::api::HttpStackApi), which builds its reqwest client
//! from this record.

use std::time::Duration;

/// Error type used for config loading.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Where the backend lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without trailing slash, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
    /// Per-request timeout. `None` waits until the transport gives up.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Full URL of an API path such as `/api/search`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fill config from env vars (and .env, when the caller loaded it).
    ///
    /// `STACKFLOW_API_URL` defaults to [`DEFAULT_API_URL`]; `STACKFLOW_TIMEOUT_SECS` is optional
    /// and must be a whole number of seconds.
    pub fn from_env() -> Result<Self, Error> {
        let base_url =
            std::env::var("STACKFLOW_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let mut config = Self::new(base_url);
        if let Ok(raw) = std::env::var("STACKFLOW_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("STACKFLOW_TIMEOUT_SECS must be a number of seconds, got {:?}", raw),
                )
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
