use anyhow::Result;
use chrono::Local;
use tracing::{info, warn};

use crate::config::Config;
use crate::history::{HistoricalRange, HistoricalSource, StaticHistory};
use crate::model::{CurrentConditions, ForecastSeries};
use crate::provider::{self, WeatherProvider};
use crate::screen::{MapLayer, Screen};
use crate::state::ViewState;

/// Event-driven glue between the capability objects, the view state and the
/// screen regions. All mutation happens on the caller's task; the only
/// suspension points are the fetches.
#[derive(Debug)]
pub struct Dashboard {
    provider: Box<dyn WeatherProvider>,
    history: Box<dyn HistoricalSource>,
    state: ViewState,
    screen: Screen,
    map_layer: MapLayer,
}

impl Dashboard {
    /// Production wiring: OpenWeather plus the fixed historical series.
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = provider::provider_from_config(config)?;

        Ok(Self::new(
            provider,
            Box::new(StaticHistory),
            &config.default_city,
        ))
    }

    pub fn new(
        provider: Box<dyn WeatherProvider>,
        history: Box<dyn HistoricalSource>,
        initial_city: &str,
    ) -> Self {
        Self {
            provider,
            history,
            state: ViewState::new(initial_city),
            screen: Screen::default(),
            map_layer: MapLayer::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Initial load: put up the map placeholder and search the configured
    /// city.
    pub async fn init(&mut self) {
        info!("dashboard initialized");

        self.screen.render_map_placeholder(self.map_layer);

        let city = self.state.current_city.clone();
        self.search_city(&city).await;
    }

    /// Re-fetch whatever city is current.
    pub async fn refresh(&mut self) {
        let city = self.state.current_city.clone();
        self.search_city(&city).await;
    }

    /// The search workflow.
    ///
    /// Blank input and fetch failures are silent no-ops: state stays as it
    /// was and the previous render remains on screen. On success the state
    /// takes the *canonical* city name from the response, so typo input
    /// snaps to the service's spelling.
    pub async fn search_city(&mut self, raw: &str) {
        let query = raw.trim();
        if query.is_empty() {
            return;
        }

        let Some(snapshot) = self.fetch_current(query).await else {
            return;
        };

        self.state.current_city = snapshot.city.clone();
        self.state.current_country = snapshot.country_code.clone();
        self.screen.render_weather_card(&snapshot, Local::now());

        // Forecast and historical data depend only on the fetched city; the
        // two fetches run concurrently and may land in either order.
        let range = self.state.active_range;
        let (forecast, series) = tokio::join!(
            self.fetch_forecast(&snapshot.city),
            self.history.monthly(&snapshot.city, range),
        );

        if let Some(forecast) = forecast {
            self.screen.render_forecast(&forecast);
        }
        self.screen.render_chart_placeholder(range, &series);

        self.state.remember(&snapshot.city, &snapshot.country_code);
        self.state.activate(&snapshot.city);
    }

    /// Activate a remembered location and re-run the full search for it.
    pub async fn select_location(&mut self, city: &str) {
        self.state.activate(city);
        self.search_city(city).await;
    }

    /// Exclusive tab switch plus a chart refresh for the new range.
    pub async fn select_range(&mut self, range: HistoricalRange) {
        self.state.active_range = range;

        let city = self.state.current_city.clone();
        let series = self.history.monthly(&city, range).await;
        self.screen.render_chart_placeholder(range, &series);
    }

    /// The map is still a placeholder; switching layers repaints it with the
    /// new layer name.
    pub fn select_map_layer(&mut self, layer: MapLayer) {
        info!(layer = layer.as_str(), "switching map layer");

        self.map_layer = layer;
        self.screen.render_map_placeholder(layer);
    }

    /// One attempt; failures are logged and collapse to "no data".
    async fn fetch_current(&self, city: &str) -> Option<CurrentConditions> {
        match self.provider.current(city).await {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!(city, "current conditions fetch failed: {err}");
                None
            }
        }
    }

    async fn fetch_forecast(&self, city: &str) -> Option<ForecastSeries> {
        match self.provider.forecast(city).await {
            Ok(series) => Some(series),
            Err(err) => {
                warn!(city, "forecast fetch failed: {err}");
                None
            }
        }
    }
}
