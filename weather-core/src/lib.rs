//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration loading (environment, `.env`, `config.json`)
//! - The OpenWeather "current weather" client
//! - The decoded report model
//! - The colorized ASCII-art renderer
//!
//! It is used by `weather-cli`, but can also be reused by other binaries.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod render;

pub use config::Config;
pub use error::{ConfigError, UpstreamError};
pub use model::{Condition, Units, WeatherReport};
pub use provider::{OpenWeatherClient, check_status};
pub use render::render;
