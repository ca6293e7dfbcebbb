use crate::{Config, QueryError, WeatherRecord, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// A remote source of current conditions.
///
/// Implementations perform at most one outbound call per `query` and never
/// retry or cache.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// `location` is already trimmed and non-empty.
    async fn query(&self, location: &str) -> Result<WeatherRecord, QueryError>;
}

/// Construct the WeatherAPI.com provider from config and environment.
///
/// A missing credential is not an error here; the provider reports it as
/// [`QueryError::MissingCredential`] on first use.
pub fn provider_from_config(config: &Config) -> WeatherApiProvider {
    let provider = WeatherApiProvider::new(config.credential());
    match config.base_url.as_deref() {
        Some(url) => provider.with_base_url(url),
        None => provider,
    }
}
