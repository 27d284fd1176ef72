use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::{Password, Select, Text};

use climapp_core::{Config, Dashboard, HistoricalRange, MapLayer};

use crate::paint;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "climapp", version, about = "Weather dashboard for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and the default city.
    Configure,

    /// Run the interactive dashboard.
    Run {
        /// City to load on startup instead of the configured default.
        city: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Run { city } => run_dashboard(city).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()?;
    let default_city = Text::new("Ciudad por defecto:")
        .with_default(&config.default_city)
        .prompt()?;

    config.api_key = Some(api_key);
    config.default_city = default_city;
    config.save()?;

    println!(
        "Configuración guardada en {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Refresh,
    Search,
    Locations,
    Historical,
    MapLayer,
    Quit,
}

impl MenuAction {
    const fn all() -> &'static [MenuAction] {
        &[
            MenuAction::Refresh,
            MenuAction::Search,
            MenuAction::Locations,
            MenuAction::Historical,
            MenuAction::MapLayer,
            MenuAction::Quit,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            MenuAction::Refresh => "Actualizar",
            MenuAction::Search => "Buscar ciudad",
            MenuAction::Locations => "Ubicaciones",
            MenuAction::Historical => "Histórico",
            MenuAction::MapLayer => "Capa del mapa",
            MenuAction::Quit => "Salir",
        }
    }
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

async fn run_dashboard(city_override: Option<String>) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(city) = city_override {
        config.default_city = city;
    }

    let mut dashboard = Dashboard::from_config(&config)?;
    dashboard.init().await;
    paint::draw(&dashboard);

    loop {
        let action = Select::new("ClimApp", MenuAction::all().to_vec()).prompt()?;

        match action {
            MenuAction::Refresh => dashboard.refresh().await,
            MenuAction::Search => {
                // Blank input is a no-op inside the workflow, same as an
                // empty search box.
                let city = Text::new("Ciudad:").prompt()?;
                dashboard.search_city(&city).await;
            }
            MenuAction::Locations => {
                let cities: Vec<String> = dashboard
                    .state()
                    .locations()
                    .iter()
                    .map(|l| l.city.clone())
                    .collect();
                if cities.is_empty() {
                    continue;
                }

                let city = Select::new("Ubicaciones:", cities).prompt()?;
                dashboard.select_location(&city).await;
            }
            MenuAction::Historical => {
                let range =
                    Select::new("Histórico:", HistoricalRange::all().to_vec()).prompt()?;
                dashboard.select_range(range).await;
            }
            MenuAction::MapLayer => {
                let layer = Select::new("Capa del mapa:", MapLayer::all().to_vec()).prompt()?;
                dashboard.select_map_layer(layer);
            }
            MenuAction::Quit => break,
        }

        paint::draw(&dashboard);
    }

    Ok(())
}
