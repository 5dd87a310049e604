//! HTTP client for the weather endpoint.

use devnotes_core::error::{DevNotesError, Result};
use devnotes_core::Config;

use crate::report::{WeatherReport, WttrResponse};

/// Weather accessor bound to one endpoint base URL.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.weather_base_url.clone())
    }

    /// `<base>/<percent-encoded location>?format=j1`
    pub fn request_url(&self, location: &str) -> String {
        format!("{}/{}?format=j1", self.base_url, urlencoding::encode(location))
    }

    /// Fetch and render current conditions for `location`.
    ///
    /// # Errors
    ///
    /// Returns [`DevNotesError::Weather`] on a transport failure, a non-2xx
    /// status, or a body without a usable current-condition record.
    pub async fn current(&self, location: &str) -> Result<WeatherReport> {
        let url = self.request_url(location);
        let failure = |reason: String| {
            tracing::debug!(%location, %reason, "weather lookup failed");
            DevNotesError::Weather {
                location: location.to_string(),
                reason,
            }
        };

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| failure(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(failure(format!("HTTP {status}")));
        }

        let body: WttrResponse = response
            .json()
            .await
            .map_err(|e| failure(format!("invalid body: {e}")))?;

        WeatherReport::from_response(location, body)
            .ok_or_else(|| failure("no current_condition in body".to_string()))
    }
}
