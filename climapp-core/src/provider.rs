use crate::{
    Config,
    model::{CurrentConditions, ForecastSeries},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Failures raised by a weather provider. One attempt per call; there is no
/// retry or backoff anywhere above this layer.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to the weather service failed: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("weather service returned status {status}: {body}")]
    BadStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse weather service response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Source of current conditions and the multi-day forecast for a city name.
///
/// The trait is the substitution seam: production wires `OpenWeatherProvider`,
/// the workflow tests wire stubs.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<CurrentConditions, ProviderError>;

    async fn forecast(&self, city: &str) -> Result<ForecastSeries, ProviderError>;
}

/// Construct the production provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.require_api_key()?;
    let provider = OpenWeatherProvider::new(api_key.to_owned())?;

    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();

        assert!(err.to_string().contains("No OpenWeather API key configured"));
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let cfg = Config {
            api_key: Some("KEY".to_string()),
            ..Config::default()
        };

        assert!(provider_from_config(&cfg).is_ok());
    }

    #[test]
    fn bad_status_error_mentions_status_and_body() {
        let err = ProviderError::BadStatus {
            status: reqwest::StatusCode::NOT_FOUND,
            body: "{\"cod\":\"404\"}".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("cod"));
    }
}
