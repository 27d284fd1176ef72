use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::model::HistoricalSeries;

/// Tabs of the historical chart. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoricalRange {
    #[default]
    Temperature,
    Precipitation,
    Humidity,
}

impl HistoricalRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoricalRange::Temperature => "temperatura",
            HistoricalRange::Precipitation => "precipitaciones",
            HistoricalRange::Humidity => "humedad",
        }
    }

    pub const fn all() -> &'static [HistoricalRange] {
        &[
            HistoricalRange::Temperature,
            HistoricalRange::Precipitation,
            HistoricalRange::Humidity,
        ]
    }
}

impl std::fmt::Display for HistoricalRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of month-by-month historical readings for a city.
///
/// Callers must not assume the arguments influence the result: the only
/// implementation today returns a fixed series until a real archive backend
/// exists.
#[async_trait]
pub trait HistoricalSource: Send + Sync + Debug {
    async fn monthly(&self, city: &str, range: HistoricalRange) -> HistoricalSeries;
}

const MONTH_LABELS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// Placeholder backend: one synthetic year of data, independent of input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticHistory;

#[async_trait]
impl HistoricalSource for StaticHistory {
    async fn monthly(&self, _city: &str, _range: HistoricalRange) -> HistoricalSeries {
        HistoricalSeries {
            labels: MONTH_LABELS.iter().map(|label| (*label).to_string()).collect(),
            values: vec![
                10.0, 12.0, 15.0, 18.0, 22.0, 26.0, 28.0, 29.0, 25.0, 20.0, 15.0, 12.0,
            ],
        }
    }
}
