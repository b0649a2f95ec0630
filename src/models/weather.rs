use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::error::EngineError;

/// Classified weather condition the engine scores garments against
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Windy,
}

impl WeatherCondition {
    /// All recognized conditions
    pub const ALL: [WeatherCondition; 5] = [
        WeatherCondition::Sunny,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
        WeatherCondition::Snowy,
        WeatherCondition::Windy,
    ];

    /// Lower-case name, as clients send it
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Snowy => "snowy",
            WeatherCondition::Windy => "windy",
        }
    }

    /// Classifies a free-text weather description into a condition.
    ///
    /// Case-insensitive substring rules; anything unrecognized falls back to
    /// cloudy.
    pub fn classify(description: &str) -> Self {
        const RAINY: &[&str] = &["rain", "shower", "drizzle", "precipitation"];
        const SUNNY: &[&str] = &["sun", "clear", "fair"];
        const SNOWY: &[&str] = &["snow", "sleet", "blizzard", "ice"];
        const WINDY: &[&str] = &["wind", "gale", "storm"];

        let description = description.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|k| description.contains(k));

        if matches(RAINY) {
            WeatherCondition::Rainy
        } else if matches(SUNNY) {
            WeatherCondition::Sunny
        } else if matches(SNOWY) {
            WeatherCondition::Snowy
        } else if matches(WINDY) {
            WeatherCondition::Windy
        } else {
            WeatherCondition::Cloudy
        }
    }

    /// Whether outfits for this condition carry an outerwear layer
    pub fn wants_outerwear(&self) -> bool {
        !matches!(self, WeatherCondition::Sunny)
    }
}

impl Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WeatherCondition {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sunny" => Ok(WeatherCondition::Sunny),
            "cloudy" => Ok(WeatherCondition::Cloudy),
            "rainy" => Ok(WeatherCondition::Rainy),
            "snowy" => Ok(WeatherCondition::Snowy),
            "windy" => Ok(WeatherCondition::Windy),
            _ => Err(EngineError::UnknownWeather(s.to_string())),
        }
    }
}

/// Weather observation handed over by a weather provider.
///
/// The engine only reads `condition`; the rest is context for providers and
/// callers (a provider may, for example, adjust its classification on extreme
/// temperatures before building the report).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    /// Classified condition the engine scores against
    pub condition: WeatherCondition,
    /// Air temperature in degrees Celsius
    pub temperature_c: f64,
    /// Raw observation text the condition was classified from
    pub description: String,
    /// Relative humidity percentage, when reported
    #[serde(default)]
    pub humidity: Option<u8>,
    /// Wind speed in km/h, when reported
    #[serde(default)]
    pub wind_speed_kmh: Option<f64>,
    /// When the observation was taken
    pub observed_at: DateTime<Utc>,
}

impl WeatherReport {
    /// Builds a report from a raw observation, classifying its description
    pub fn from_observation(description: impl Into<String>, temperature_c: f64) -> Self {
        let description = description.into();
        Self {
            condition: WeatherCondition::classify(&description),
            temperature_c,
            description,
            humidity: None,
            wind_speed_kmh: None,
            observed_at: Utc::now(),
        }
    }

    /// Sets the reported humidity percentage
    pub fn with_humidity(mut self, humidity: u8) -> Self {
        self.humidity = Some(humidity);
        self
    }

    /// Sets the reported wind speed in km/h
    pub fn with_wind_speed(mut self, wind_speed_kmh: f64) -> Self {
        self.wind_speed_kmh = Some(wind_speed_kmh);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_precipitation_first() {
        assert_eq!(
            WeatherCondition::classify("Light rain shower"),
            WeatherCondition::Rainy
        );
        assert_eq!(
            WeatherCondition::classify("Patchy light drizzle"),
            WeatherCondition::Rainy
        );
    }

    #[test]
    fn test_classify_clear_and_frozen() {
        assert_eq!(WeatherCondition::classify("Sunny"), WeatherCondition::Sunny);
        assert_eq!(
            WeatherCondition::classify("Clear skies"),
            WeatherCondition::Sunny
        );
        assert_eq!(
            WeatherCondition::classify("Blizzard"),
            WeatherCondition::Snowy
        );
        assert_eq!(
            WeatherCondition::classify("Light sleet"),
            WeatherCondition::Snowy
        );
    }

    #[test]
    fn test_classify_wind_and_default() {
        assert_eq!(WeatherCondition::classify("Gale"), WeatherCondition::Windy);
        assert_eq!(
            WeatherCondition::classify("Thundery outbreaks"),
            WeatherCondition::Cloudy
        );
        assert_eq!(
            WeatherCondition::classify("Overcast"),
            WeatherCondition::Cloudy
        );
    }

    #[test]
    fn test_from_observation_classifies_description() {
        let report = WeatherReport::from_observation("Moderate rain", 14.0)
            .with_humidity(82)
            .with_wind_speed(19.0);

        assert_eq!(report.condition, WeatherCondition::Rainy);
        assert_eq!(report.temperature_c, 14.0);
        assert_eq!(report.humidity, Some(82));
        assert_eq!(report.wind_speed_kmh, Some(19.0));
    }

    #[test]
    fn test_condition_from_str_rejects_unknown() {
        assert_eq!(
            "Snowy".parse::<WeatherCondition>().unwrap(),
            WeatherCondition::Snowy
        );
        assert!(matches!(
            "hailing".parse::<WeatherCondition>(),
            Err(EngineError::UnknownWeather(_))
        ));
    }

    #[test]
    fn test_only_sunny_skips_outerwear() {
        assert!(!WeatherCondition::Sunny.wants_outerwear());
        for condition in [
            WeatherCondition::Cloudy,
            WeatherCondition::Rainy,
            WeatherCondition::Snowy,
            WeatherCondition::Windy,
        ] {
            assert!(condition.wants_outerwear());
        }
    }
}
