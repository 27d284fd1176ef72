//! Core library for the `climapp` dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client and the capability traits behind it
//! - View state, screen regions, and the city-search workflow
//!
//! It is used by `climapp-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod dashboard;
pub mod history;
pub mod icon;
pub mod model;
pub mod provider;
pub mod screen;
pub mod state;

pub use config::Config;
pub use dashboard::Dashboard;
pub use history::{HistoricalRange, HistoricalSource, StaticHistory};
pub use icon::IconCategory;
pub use model::{CurrentConditions, ForecastPoint, ForecastSeries, HistoricalSeries};
pub use provider::{ProviderError, WeatherProvider};
pub use screen::{MapLayer, Screen};
pub use state::{Location, ViewState};
