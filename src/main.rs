//! Global Food Waste Analytics - interactive dashboard
//!
//! Filters a food waste dataset and charts waste volume, economic loss and trends.

use anyhow::{anyhow, Context};
use eframe::egui;
use food_waste_dashboard::config::{DashboardConfig, CONFIG_FILE};
use food_waste_dashboard::gui::DashboardApp;
use food_waste_dashboard::logging;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::load_or_default(CONFIG_FILE)
        .with_context(|| format!("loading {CONFIG_FILE}"))?;

    logging::init(&config.log_level);
    info!(dataset = %config.dataset_path.display(), "starting dashboard");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([1000.0, 650.0])
            .with_title("Global Food Waste Analytics"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Global Food Waste Analytics",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("dashboard window failed: {e}"))
}
