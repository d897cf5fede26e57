use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, de};
use std::fmt;

/// Decoded body of the OpenWeather "current weather" endpoint.
///
/// Every group is optional on the wire: error payloads only carry `cod` and
/// `message`, so missing fields fall back to zero/empty values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WeatherReport {
    pub coord: Coord,
    pub weather: Vec<WeatherEntry>,
    pub base: String,
    pub main: MainReadings,
    pub visibility: i64,
    pub wind: Wind,
    pub clouds: Clouds,
    pub dt: i64,
    pub sys: Sys,
    pub timezone: i64,
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "status_code")]
    pub cod: i64,
    /// Free-form upstream diagnostic; its type varies between responses.
    pub message: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WeatherEntry {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: i64,
    pub humidity: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Wind {
    pub speed: f64,
    pub deg: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Clouds {
    pub all: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Sys {
    #[serde(rename = "type")]
    pub kind: i64,
    pub id: i64,
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

impl WeatherReport {
    /// Main condition of the first `weather` entry.
    pub fn condition(&self) -> Condition {
        self.weather
            .first()
            .map(|w| Condition::from(w.main.as_str()))
            .unwrap_or(Condition::Other(String::new()))
    }

    /// `message` as text, whatever JSON type the upstream used.
    pub fn message_text(&self) -> Option<String> {
        match self.message.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        if self.dt == 0 {
            return None;
        }
        DateTime::from_timestamp(self.dt, 0)
    }
}

/// Main weather condition, as reported in `weather[0].main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Other(String),
}

impl Condition {
    /// Lowercase label printed after `Weather:`.
    pub fn label(&self) -> String {
        match self {
            Condition::Clear => "clear".to_string(),
            Condition::Clouds => "clouds".to_string(),
            Condition::Rain => "rain".to_string(),
            Condition::Snow => "snow".to_string(),
            Condition::Thunderstorm => "storm".to_string(),
            Condition::Other(s) if s.is_empty() => "unknown".to_string(),
            Condition::Other(s) => s.to_lowercase(),
        }
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        match value {
            "Clear" => Condition::Clear,
            "Clouds" => Condition::Clouds,
            "Rain" => Condition::Rain,
            "Snow" => Condition::Snow,
            "Thunderstorm" => Condition::Thunderstorm,
            other => Condition::Other(other.to_string()),
        }
    }
}

/// Unit system requested from the upstream API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
    Other(String),
}

impl Units {
    pub fn wind_speed_suffix(&self) -> &'static str {
        match self {
            Units::Imperial => "mph",
            Units::Metric | Units::Other(_) => "m/s",
        }
    }
}

impl From<&str> for Units {
    fn from(value: &str) -> Self {
        match value {
            "metric" => Units::Metric,
            "imperial" => Units::Imperial,
            other => Units::Other(other.to_string()),
        }
    }
}

// The upstream sends `cod` as a number on success and as a string ("404") on
// most error responses.
fn status_code<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct StatusCode;

    impl de::Visitor<'_> for StatusCode {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer status code or a numeric string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(E::custom)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            v.trim().parse().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(StatusCode)
}
