use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{QueryError, TemperatureUnit, WeatherRecord};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

#[derive(Clone)]
pub struct WeatherApiProvider {
    api_key: Option<String>,
    base_url: String,
    http: Client,
}

// Hand-written so the key never ends up in debug output.
impl std::fmt::Debug for WeatherApiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiProvider")
            .field("credential_present", &self.api_key.is_some())
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl WeatherApiProvider {
    /// An empty key is treated the same as no key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    async fn fetch_current(&self, api_key: &str, location: &str) -> Result<WeatherRecord, QueryError> {
        let url = format!("{}/current.json", self.base_url);

        // The key travels in the query string, so transport errors are
        // stripped of their URL before they reach the user.
        let res = self
            .http
            .get(&url)
            .query(&[("key", api_key), ("q", location)])
            .send()
            .await
            .map_err(|e| QueryError::unexpected(e.without_url()))?;

        let status = res.status();
        if !status.is_success() {
            let err = QueryError::from_status(status.as_u16());
            warn!(status = status.as_u16(), kind = ?err.kind(), "WeatherAPI current request failed");
            return Err(err);
        }

        let body = res.text().await.map_err(|e| QueryError::unexpected(e.without_url()))?;
        let parsed: WaResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, body = %truncate_body(&body), "Failed to parse WeatherAPI current JSON");
            QueryError::unexpected(e)
        })?;

        Ok(WeatherRecord {
            temperature: parsed.current.temp_c,
            description: parsed.current.condition.text,
            location: parsed.location.name,
            unit: TemperatureUnit::Celsius,
        })
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn query(&self, location: &str) -> Result<WeatherRecord, QueryError> {
        debug!(credential_present = self.has_credential(), location, "querying WeatherAPI current conditions");

        let Some(api_key) = self.api_key.as_deref() else {
            return Err(QueryError::MissingCredential);
        };

        self.fetch_current(api_key, location).await
    }
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body;
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_counts_as_missing() {
        assert!(!WeatherApiProvider::new(Some(String::new())).has_credential());
        assert!(!WeatherApiProvider::new(None).has_credential());
        assert!(WeatherApiProvider::new(Some("KEY".into())).has_credential());
    }

    #[test]
    fn debug_output_hides_key() {
        let provider = WeatherApiProvider::new(Some("super-secret".into()));
        let out = format!("{provider:?}");
        assert!(!out.contains("super-secret"));
        assert!(out.contains("credential_present: true"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(150);
        let cut = truncate_body(&body);
        assert!(cut.len() <= 200);
        assert!(cut.chars().all(|c| c == 'é'));
        assert_eq!(truncate_body("short"), "short");
    }
}
