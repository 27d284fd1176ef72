use chrono::{DateTime, Datelike, Local, Timelike};

use crate::history::HistoricalRange;
use crate::icon::IconCategory;
use crate::model::{CurrentConditions, ForecastPoint, ForecastSeries, HistoricalSeries};

/// Layers offered by the map selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapLayer {
    #[default]
    Temperature,
    Precipitation,
    Clouds,
    Wind,
}

impl MapLayer {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapLayer::Temperature => "temperatura",
            MapLayer::Precipitation => "precipitación",
            MapLayer::Clouds => "nubes",
            MapLayer::Wind => "viento",
        }
    }

    pub const fn all() -> &'static [MapLayer] {
        &[
            MapLayer::Temperature,
            MapLayer::Precipitation,
            MapLayer::Clouds,
            MapLayer::Wind,
        ]
    }
}

impl std::fmt::Display for MapLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rendered weather card, one field per slot of the fixed layout.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCard {
    pub title: String,
    pub date_line: String,
    pub updated_line: String,
    pub temperature: String,
    pub icon: IconCategory,
    pub max_min: String,
    pub humidity: String,
    pub wind: String,
    pub pressure: String,
}

/// One card of the forecast strip.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastCard {
    pub day: String,
    pub icon: IconCategory,
    pub temp_max: String,
    pub temp_min: String,
}

/// Named render regions of the dashboard.
///
/// Each projection overwrites its own region and leaves the rest untouched,
/// so a failed fetch simply keeps the previous render on screen.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub weather_card: Option<WeatherCard>,
    pub forecast: Vec<ForecastCard>,
    pub map: String,
    pub chart: String,
}

impl Screen {
    /// Project a snapshot into the weather card. The "last updated" stamp
    /// comes from `now` (wall clock at render time), not from the snapshot's
    /// observation time.
    pub fn render_weather_card(&mut self, snapshot: &CurrentConditions, now: DateTime<Local>) {
        self.weather_card = Some(WeatherCard {
            title: format!("{}, {}", snapshot.city, snapshot.country_code),
            date_line: long_date(&now),
            updated_line: format!(
                "Última actualización: {:02}:{:02}",
                now.hour(),
                now.minute()
            ),
            temperature: format!("{}°C", snapshot.temperature_c.round()),
            icon: IconCategory::from_condition_code(snapshot.condition_code),
            max_min: format!(
                "{}°C / {}°C",
                snapshot.temp_max_c.round(),
                snapshot.temp_min_c.round()
            ),
            humidity: format!("{}%", snapshot.humidity_pct),
            // Upstream reports meters per second; the card shows km/h.
            wind: format!("{} km/h", (snapshot.wind_speed_mps * 3.6).round()),
            pressure: format!("{} hPa", snapshot.pressure_hpa),
        });
    }

    /// Rebuild the forecast strip from a raw series. An empty series leaves
    /// the previous strip in place; anything else replaces it wholesale.
    pub fn render_forecast(&mut self, series: &ForecastSeries) {
        if series.points.is_empty() {
            return;
        }

        self.forecast = daily_cards(&series.points);
    }

    /// The chart is still a placeholder naming the active range; the fetched
    /// series is ignored until a real chart backend lands.
    pub fn render_chart_placeholder(&mut self, range: HistoricalRange, _series: &HistoricalSeries) {
        self.chart = format!("Gráfico de {range}");
    }

    pub fn render_map_placeholder(&mut self, layer: MapLayer) {
        self.map = format!("Mapa del clima cargando... (capa: {layer})");
    }
}

/// Collapse the raw 3-hour series into daily cards: keep the first point
/// seen for each distinct weekday, stop at five days. Later points for an
/// already-seen weekday never displace the first one.
fn daily_cards(points: &[ForecastPoint]) -> Vec<ForecastCard> {
    let mut seen: Vec<&str> = Vec::new();
    let mut cards = Vec::new();

    for point in points {
        let day = weekday_label(&point.at);
        if seen.contains(&day) {
            continue;
        }
        if cards.len() == 5 {
            break;
        }

        seen.push(day);
        cards.push(ForecastCard {
            day: day.to_string(),
            icon: IconCategory::from_condition_code(point.condition_code),
            temp_max: format!("{}°C", point.temp_max_c.round()),
            temp_min: format!("{}°C", point.temp_min_c.round()),
        });
    }

    cards
}

// chrono ships no locale data on the stable API, so the Spanish names the
// dashboard renders with live here.
const WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

fn weekday_label(date: &impl Datelike) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

/// Long-form Spanish date, e.g. "lunes, 3 de marzo".
fn long_date(date: &impl Datelike) -> String {
    format!(
        "{}, {} de {}",
        weekday_label(date),
        date.day(),
        MONTHS[date.month0() as usize]
    )
}
