use crate::{Config, WeatherLookup, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Failures while talking to the weather service. All of these are
/// recoverable at the menu boundary; an unknown city is not an error
/// (see [`WeatherLookup::NotFound`]).
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Failed to reach the weather service: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Weather service request failed with status {status}: {body}")]
    Api { status: reqwest::StatusCode, body: String },
    #[error("Failed to parse weather service JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<WeatherLookup, WeatherError>;
}

/// Construct the OpenWeather-backed provider from config.
pub fn from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.require_api_key()?;
    Ok(Box::new(OpenWeatherProvider::new(api_key.to_owned())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = from_config(&cfg).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("Hint: run `cityweather configure`"));
    }

    #[test]
    fn from_config_works_when_key_is_set() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        let provider = from_config(&cfg);
        assert!(provider.is_ok());
    }
}
