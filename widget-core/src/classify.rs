use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unit a temperature value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
        }
    }

    /// Lower bounds of the chilly, pleasant and warm bands. Freezing covers
    /// everything up to and including the first bound.
    const fn bounds(&self) -> (f64, f64, f64) {
        match self {
            TemperatureUnit::Celsius => (0.0, 15.0, 25.0),
            TemperatureUnit::Fahrenheit => (32.0, 59.0, 77.0),
        }
    }

    pub fn band(&self, temperature: f64) -> Band {
        let (freezing_max, pleasant_min, warm_min) = self.bounds();

        if temperature <= freezing_max {
            Band::Freezing
        } else if temperature < pleasant_min {
            Band::Chilly
        } else if temperature < warm_min {
            Band::Pleasant
        } else {
            Band::Warm
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureUnit {
    type Err = UnknownUnit;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "C" => Ok(TemperatureUnit::Celsius),
            "F" => Ok(TemperatureUnit::Fahrenheit),
            other => Err(UnknownUnit(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown temperature unit '{0}'")]
pub struct UnknownUnit(pub String);

/// Qualitative temperature category, ordered from coldest to warmest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Band {
    Freezing,
    Chilly,
    Pleasant,
    Warm,
}

/// Human-readable outcome of classifying a temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    Band(Band),
    UnknownUnit,
}

impl Phrase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phrase::Band(Band::Freezing) => "It's freezing!",
            Phrase::Band(Band::Chilly) => "It's a bit chilly.",
            Phrase::Band(Band::Pleasant) => "The weather is pleasant.",
            Phrase::Band(Band::Warm) => "It's warm!",
            Phrase::UnknownUnit => "Unknown temperature unit.",
        }
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify(temperature: f64, unit: TemperatureUnit) -> Phrase {
    Phrase::Band(unit.band(temperature))
}

/// Classify using a raw unit code such as `"C"` or `"F"`.
///
/// Codes other than `C` and `F` produce [`Phrase::UnknownUnit`]; this never fails.
pub fn classify_code(temperature: f64, code: &str) -> Phrase {
    match code.parse::<TemperatureUnit>() {
        Ok(unit) => classify(temperature, unit),
        Err(_) => Phrase::UnknownUnit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(t: f64, unit: TemperatureUnit) -> Band {
        match classify(t, unit) {
            Phrase::Band(b) => b,
            Phrase::UnknownUnit => panic!("known unit classified as unknown"),
        }
    }

    #[test]
    fn celsius_boundaries() {
        use TemperatureUnit::Celsius;

        assert_eq!(band(-10.0, Celsius), Band::Freezing);
        assert_eq!(band(0.0, Celsius), Band::Freezing);
        assert_eq!(band(0.1, Celsius), Band::Chilly);
        assert_eq!(band(14.99, Celsius), Band::Chilly);
        assert_eq!(band(15.0, Celsius), Band::Pleasant);
        assert_eq!(band(24.99, Celsius), Band::Pleasant);
        assert_eq!(band(25.0, Celsius), Band::Warm);
        assert_eq!(band(40.0, Celsius), Band::Warm);
    }

    #[test]
    fn fahrenheit_boundaries() {
        use TemperatureUnit::Fahrenheit;

        assert_eq!(band(0.0, Fahrenheit), Band::Freezing);
        assert_eq!(band(32.0, Fahrenheit), Band::Freezing);
        assert_eq!(band(32.5, Fahrenheit), Band::Chilly);
        assert_eq!(band(58.9, Fahrenheit), Band::Chilly);
        assert_eq!(band(59.0, Fahrenheit), Band::Pleasant);
        assert_eq!(band(76.9, Fahrenheit), Band::Pleasant);
        assert_eq!(band(77.0, Fahrenheit), Band::Warm);
        assert_eq!(band(100.0, Fahrenheit), Band::Warm);
    }

    #[test]
    fn bands_never_get_colder_as_temperature_rises() {
        for unit in [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit] {
            let mut previous = Band::Freezing;
            // -50.0 ..= 120.0 in quarter-degree steps
            for step in -200..=480 {
                let t = f64::from(step) / 4.0;
                let current = band(t, unit);
                assert!(current >= previous, "{unit}: {t} went from {previous:?} to {current:?}");
                previous = current;
            }
        }
    }

    #[test]
    fn unknown_unit_code_never_fails() {
        for code in ["K", "", "c", "celsius", "FF"] {
            for t in [-40.0, 0.0, 22.5, 1e9, f64::MIN, f64::MAX] {
                assert_eq!(classify_code(t, code), Phrase::UnknownUnit);
            }
        }
        assert_eq!(Phrase::UnknownUnit.to_string(), "Unknown temperature unit.");
    }

    #[test]
    fn known_codes_match_typed_units() {
        assert_eq!(classify_code(22.5, "C"), Phrase::Band(Band::Pleasant));
        assert_eq!(classify_code(22.5, "F"), Phrase::Band(Band::Freezing));
        assert_eq!(classify_code(15.0, "C").to_string(), "The weather is pleasant.");
    }

    #[test]
    fn unit_code_roundtrip() {
        for unit in [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit] {
            assert_eq!(unit.as_str().parse::<TemperatureUnit>(), Ok(unit));
        }
        assert_eq!("K".parse::<TemperatureUnit>(), Err(UnknownUnit("K".into())));
    }
}
