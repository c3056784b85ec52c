use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single current-weather reading, produced fresh per query and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// City name exactly as the user typed it.
    pub city: String,
    pub temperature_c: f64,
    pub condition: String,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    /// Missing when the provider response carried no wind section.
    pub wind_speed_mps: Option<f64>,
    pub observation_time: Option<DateTime<Utc>>,
}

/// Outcome of a weather query. An unknown city is a normal result, not an error.
#[derive(Debug, Clone)]
pub enum WeatherLookup {
    Found(WeatherReport),
    NotFound { city: String },
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weather for {}:", self.city)?;
        writeln!(f, "Temperature: {:.2}°C", self.temperature_c)?;
        writeln!(f, "Weather condition: {}", self.condition)?;
        writeln!(f, "Humidity: {}%", self.humidity_pct)?;
        write!(f, "Pressure: {} hPa", self.pressure_hpa)?;
        match self.wind_speed_mps {
            Some(speed) => write!(f, "\nWind Speed: {speed} m/s")?,
            None => write!(f, "\nWind Speed: N/A m/s")?,
        }
        if let Some(observed) = self.observation_time {
            write!(f, "\nObserved at: {}", observed.format("%Y-%m-%d %H:%M:%S UTC"))?;
        }
        Ok(())
    }
}

impl fmt::Display for WeatherLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherLookup::Found(report) => report.fmt(f),
            WeatherLookup::NotFound { city } => {
                write!(f, "Weather data not found for City name: {city}.")
            }
        }
    }
}
