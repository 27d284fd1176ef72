use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::model::{CurrentConditions, ForecastPoint, ForecastSeries};

use super::{ProviderError, WeatherProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Condition code assumed when the service omits the `weather` block.
const CLEAR_SKY: i64 = 800;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different host; the HTTP tests use this.
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, ProviderError> {
        let http = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            api_key,
            base_url,
            http,
        })
    }

    async fn fetch_current(&self, city: &str) -> Result<CurrentConditions, ProviderError> {
        let url = format!("{}/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::BadStatus {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OwCurrent = serde_json::from_str(&body)?;

        let observation_time = unix_to_utc(parsed.dt).unwrap_or_else(Utc::now);
        let condition_code = parsed.weather.first().map_or(CLEAR_SKY, |w| w.id);

        Ok(CurrentConditions {
            city: parsed.name,
            country_code: parsed.sys.country,
            temperature_c: parsed.main.temp,
            temp_max_c: parsed.main.temp_max,
            temp_min_c: parsed.main.temp_min,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            pressure_hpa: parsed.main.pressure,
            condition_code,
            observation_time,
        })
    }

    async fn fetch_forecast(&self, city: &str) -> Result<ForecastSeries, ProviderError> {
        let url = format!("{}/forecast", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::BadStatus {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OwForecast = serde_json::from_str(&body)?;

        let points = parsed
            .list
            .into_iter()
            .map(|entry| ForecastPoint {
                at: unix_to_utc(entry.dt).unwrap_or_else(Utc::now),
                condition_code: entry.weather.first().map_or(CLEAR_SKY, |w| w.id),
                temp_max_c: entry.main.temp_max,
                temp_min_c: entry.main.temp_min,
            })
            .collect();

        Ok(ForecastSeries {
            city: parsed.city.name,
            country_code: parsed.city.country,
            points,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    temp_max: f64,
    temp_min: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrent {
    name: String,
    dt: i64,
    sys: OwSys,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecast {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<CurrentConditions, ProviderError> {
        self.fetch_current(city).await
    }

    async fn forecast(&self, city: &str) -> Result<ForecastSeries, ProviderError> {
        self.fetch_forecast(city).await
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let head: String = body.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}
