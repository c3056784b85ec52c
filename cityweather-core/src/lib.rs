//! Core library for the `cityweather` menu app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The in-memory favorites store
//! - Abstraction over the weather provider
//! - Shared domain models (reports, lookup outcomes)
//!
//! It is used by `cityweather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod favorites;
pub mod model;
pub mod provider;

pub use config::Config;
pub use favorites::{FavoritesError, FavoritesStore, MAX_FAVORITES};
pub use model::{WeatherLookup, WeatherReport};
pub use provider::{WeatherError, WeatherProvider};
