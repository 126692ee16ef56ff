//! GUI module - User interface components

mod app;
mod dashboard_view;
mod filter_panel;

pub use app::DashboardApp;
pub use dashboard_view::{DashboardTab, DashboardView};
pub use filter_panel::{FilterPanel, FilterPanelAction};
