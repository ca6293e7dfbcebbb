//! Core library for the `weather-widget` tool.
//!
//! This crate defines:
//! - Temperature classification into human-readable bands
//! - The WeatherAPI.com query service and its error taxonomy
//! - The search form controller and the view it renders to
//! - Configuration & credentials handling
//!
//! It is used by `widget-cli`, but the controller and view are host-agnostic.

pub mod classify;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod provider;
pub mod view;

pub use classify::{Band, Phrase, TemperatureUnit, classify, classify_code};
pub use config::Config;
pub use controller::{
    Completion, PendingSearch, RequestId, SearchFormController, SearchResult, SearchState,
    StaleResponsePolicy, Status,
};
pub use error::{QueryError, QueryErrorKind};
pub use model::WeatherRecord;
pub use provider::{WeatherProvider, provider_from_config, weatherapi::WeatherApiProvider};
pub use view::{View, ViewLine};
