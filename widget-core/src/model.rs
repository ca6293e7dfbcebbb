use serde::{Deserialize, Serialize};

use crate::classify::{self, Phrase, TemperatureUnit};

/// Normalized result of a successful weather lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub temperature: f64,
    /// Free-text condition, e.g. "Partly cloudy".
    pub description: String,
    /// Place name as resolved by the provider; may differ from what was typed.
    pub location: String,
    pub unit: TemperatureUnit,
}

impl WeatherRecord {
    pub fn phrase(&self) -> Phrase {
        classify::classify(self.temperature, self.unit)
    }
}
