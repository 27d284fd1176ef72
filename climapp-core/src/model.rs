use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single point-in-time weather reading for a city, already converted to
/// metric units by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub city: String,
    pub country_code: String,
    pub temperature_c: f64,
    pub temp_max_c: f64,
    pub temp_min_c: f64,
    pub humidity_pct: u8,
    /// Wind speed as reported upstream (meters per second with
    /// `units=metric`); the renderer converts to km/h.
    pub wind_speed_mps: f64,
    pub pressure_hpa: u32,
    pub condition_code: i64,
    pub observation_time: DateTime<Utc>,
}

/// One step of the 5-day / 3-hour forecast series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub at: DateTime<Utc>,
    pub condition_code: i64,
    pub temp_max_c: f64,
    pub temp_min_c: f64,
}

/// The raw forecast series in chronological order, plus the location the
/// service echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub city: String,
    pub country_code: String,
    pub points: Vec<ForecastPoint>,
}

/// Twelve month labels with one value per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}
