use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::model::{WeatherLookup, WeatherReport};

use super::{WeatherError, WeatherProvider};

const API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// The menu blocks on every lookup, so the request must not hang forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The API reports temperatures in Kelvin; the menu shows Celsius.
const KELVIN_OFFSET: f64 = 273.15;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherLookup, WeatherError> {
        debug!(%city, "requesting current weather");

        let res = self
            .http
            .get(API_URL)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        // OpenWeather answers unknown cities with 404 and a JSON error body.
        if status == StatusCode::NOT_FOUND {
            debug!(%city, "no match for city");
            return Ok(WeatherLookup::NotFound { city: city.to_string() });
        }

        if !status.is_success() {
            warn!(%city, %status, "current weather request failed");
            return Err(WeatherError::Api { status, body: truncate_body(&body) });
        }

        lookup_from_body(city, &body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    dt: Option<i64>,
    main: Option<OwMain>,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: Option<OwWind>,
}

/// Translate a raw response body into a lookup outcome.
///
/// Kept separate from the transport so conversion and formatting are
/// testable without network access. A body without a `main` section is
/// the provider's "no data for this city" answer.
fn lookup_from_body(city: &str, body: &str) -> Result<WeatherLookup, WeatherError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;

    let Some(main) = parsed.main else {
        return Ok(WeatherLookup::NotFound { city: city.to_string() });
    };

    let condition = parsed
        .weather
        .first()
        .map(|w| w.description.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    Ok(WeatherLookup::Found(WeatherReport {
        city: city.to_string(),
        temperature_c: main.temp - KELVIN_OFFSET,
        condition,
        humidity_pct: main.humidity,
        pressure_hpa: main.pressure,
        wind_speed_mps: parsed.wind.and_then(|w| w.speed),
        observation_time: parsed.dt.and_then(unix_to_utc),
    }))
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherLookup, WeatherError> {
        self.fetch_current(city).await
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_with_main_becomes_a_report() {
        let body = r#"{"main":{"temp":300.0,"humidity":50,"pressure":1000},
                       "weather":[{"description":"clear"}],"wind":{"speed":3}}"#;

        let lookup = lookup_from_body("Paris", body).expect("body parses");
        let WeatherLookup::Found(report) = lookup else {
            panic!("expected a report");
        };

        assert!((report.temperature_c - 26.85).abs() < 1e-9);
        assert_eq!(report.condition, "clear");
        assert_eq!(report.humidity_pct, 50);
        assert_eq!(report.pressure_hpa, 1000);
        assert_eq!(report.wind_speed_mps, Some(3.0));
        assert_eq!(report.observation_time, None);

        assert_eq!(
            report.to_string(),
            "Weather for Paris:\n\
             Temperature: 26.85°C\n\
             Weather condition: clear\n\
             Humidity: 50%\n\
             Pressure: 1000 hPa\n\
             Wind Speed: 3 m/s"
        );
    }

    #[test]
    fn body_without_main_is_not_found() {
        let body = r#"{"cod":"404","message":"city not found"}"#;

        let lookup = lookup_from_body("Gotham", body).expect("body parses");

        assert_eq!(lookup.to_string(), "Weather data not found for City name: Gotham.");
    }

    #[test]
    fn missing_wind_is_reported_as_not_available() {
        let body = r#"{"main":{"temp":280.5,"humidity":81,"pressure":1013},
                       "weather":[{"description":"light rain"}]}"#;

        let lookup = lookup_from_body("Bergen", body).expect("body parses");
        let WeatherLookup::Found(report) = lookup else {
            panic!("expected a report");
        };

        assert_eq!(report.wind_speed_mps, None);
        assert!(report.to_string().contains("Wind Speed: N/A m/s"));
    }

    #[test]
    fn missing_description_falls_back_to_unknown() {
        let body = r#"{"main":{"temp":280.5,"humidity":81,"pressure":1013},"weather":[]}"#;

        let lookup = lookup_from_body("Bergen", body).expect("body parses");
        let WeatherLookup::Found(report) = lookup else {
            panic!("expected a report");
        };

        assert_eq!(report.condition, "Unknown");
    }

    #[test]
    fn observation_time_comes_from_dt() {
        let body = r#"{"dt":1700000000,
                       "main":{"temp":280.5,"humidity":81,"pressure":1013},
                       "weather":[{"description":"mist"}]}"#;

        let lookup = lookup_from_body("Bergen", body).expect("body parses");
        let WeatherLookup::Found(report) = lookup else {
            panic!("expected a report");
        };

        assert_eq!(report.observation_time, DateTime::from_timestamp(1_700_000_000, 0));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = lookup_from_body("Paris", "not json").unwrap_err();

        assert!(matches!(err, WeatherError::Parse(_)));
    }
}
