use crate::store::CITY_STORAGE_KEY;
use std::time::Duration;

/// Path of the advice endpoint, relative to the backend root.
pub const ADVICE_ENDPOINT_PATH: &str = "/api/advice/";

/// Backend root used by the CLI when none is given.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Interval between frames of the "Analyzing" animation.
pub const DOTS_INTERVAL: Duration = Duration::from_millis(400);

/// Default request timeout for the native client.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client-side settings shared by the web app and the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend root. `None` means page-relative (web).
    pub base_url: Option<String>,
    pub endpoint_path: String,
    /// Key the last submitted city is stored under
    pub storage_key: String,
    pub dots_interval: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            endpoint_path: ADVICE_ENDPOINT_PATH.to_string(),
            storage_key: CITY_STORAGE_KEY.to_string(),
            dots_interval: DOTS_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Config pointing at an absolute backend root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }

    /// Full URL (or page-relative path) of the advice endpoint.
    pub fn endpoint_url(&self) -> String {
        match &self.base_url {
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                self.endpoint_path.trim_start_matches('/')
            ),
            None => self.endpoint_path.clone(),
        }
    }
}
