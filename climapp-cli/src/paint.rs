//! Draws the screen regions and the location list to stdout. Pure
//! formatting: every decision about *what* to show was already made by the
//! projections in `climapp-core`.

use climapp_core::Dashboard;

pub fn draw(dashboard: &Dashboard) {
    let screen = dashboard.screen();
    let state = dashboard.state();

    println!();
    if let Some(card) = &screen.weather_card {
        println!("{}", card.title);
        println!("{}", card.date_line);
        println!("{}", card.updated_line);
        println!();
        println!("  {}  [{}]", card.temperature, card.icon.css_class());
        println!("  Máx/Mín: {}", card.max_min);
        println!("  Humedad: {}", card.humidity);
        println!("  Viento:  {}", card.wind);
        println!("  Presión: {}", card.pressure);
    } else {
        println!("Sin datos del clima todavía.");
    }

    if !screen.forecast.is_empty() {
        println!();
        println!("Pronóstico:");
        for card in &screen.forecast {
            println!(
                "  {:<10} [{}] {} / {}",
                card.day,
                card.icon.css_class(),
                card.temp_max,
                card.temp_min
            );
        }
    }

    if !state.locations().is_empty() {
        println!();
        println!("Ubicaciones:");
        for (index, location) in state.locations().iter().enumerate() {
            let marker = if state.is_active(index) { ">" } else { " " };
            println!("{} {} ({})", marker, location.city, location.country);
        }
    }

    println!();
    if !screen.map.is_empty() {
        println!("[mapa]    {}", screen.map);
    }
    if !screen.chart.is_empty() {
        println!("[gráfico] {}", screen.chart);
    }
}
