//! Dashboard Main Application
//! Main window with the filter panel and the dashboard view.

use crate::config::DashboardConfig;
use crate::data::{filter_indices, Dataset, DatasetLoader, FilteredView};
use crate::export::Exporter;
use crate::gui::{DashboardView, FilterPanel, FilterPanelAction};
use crate::stats::Aggregator;
use egui::SidePanel;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error};

/// Main application window.
pub struct DashboardApp {
    config: DashboardConfig,
    dataset: Option<Arc<Dataset>>,
    /// Rows of `dataset` passing the current selection.
    filtered_rows: Vec<usize>,
    filter_panel: FilterPanel,
    dashboard: DashboardView,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let mut app = Self::headless(config);
        let path = app.config.dataset_path.clone();
        app.load_dataset(&path);
        app
    }

    /// Application state without a window, used at startup and in tests.
    pub fn headless(config: DashboardConfig) -> Self {
        Self {
            config,
            dataset: None,
            filtered_rows: Vec::new(),
            filter_panel: FilterPanel::new(),
            dashboard: DashboardView::new(),
        }
    }

    /// Load (or fetch from cache) a dataset and reset the filters to select everything.
    pub fn load_dataset(&mut self, path: &Path) {
        self.filter_panel.csv_path = Some(path.to_path_buf());

        match DatasetLoader::load(path) {
            Ok(dataset) => {
                self.filter_panel.update_options(&dataset);
                self.filter_panel.set_status(format!(
                    "Loaded {} rows, {} countries",
                    dataset.len(),
                    self.filter_panel.countries.len()
                ));
                self.dataset = Some(dataset);
                self.recompute();
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "dataset load failed");
                self.dataset = None;
                self.filtered_rows.clear();
                self.filter_panel.clear_options();
                self.filter_panel.set_status(format!("Error: {e}"));
                self.dashboard.clear();
            }
        }
    }

    /// Re-run the filter and every aggregate for the current selection.
    pub fn recompute(&mut self) {
        let Some(dataset) = self.dataset.as_ref() else {
            return;
        };

        self.filtered_rows = filter_indices(dataset, &self.filter_panel.selection);
        let view = FilteredView::from_indices(dataset, &self.filtered_rows);
        let aggregates = Aggregator::compute(&view);

        debug!(
            rows = view.len(),
            total_waste = aggregates.total_waste,
            "selection recomputed"
        );
        self.dashboard.set_aggregates(aggregates);
    }

    pub fn filter_panel_mut(&mut self) -> &mut FilterPanel {
        &mut self.filter_panel
    }

    pub fn dashboard(&self) -> &DashboardView {
        &self.dashboard
    }

    pub fn filtered_rows(&self) -> &[usize] {
        &self.filtered_rows
    }

    fn handle_browse_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.load_dataset(&path);
        }
    }

    fn handle_export(&mut self) {
        let Some(dataset) = self.dataset.clone() else {
            self.filter_panel.set_status("No data loaded");
            return;
        };

        let Some(dir) = rfd::FileDialog::new()
            .set_title("Choose export folder")
            .pick_folder()
        else {
            return; // User cancelled
        };

        let view = FilteredView::from_indices(&dataset, &self.filtered_rows);
        match Exporter::export(&dir, &view, &self.dashboard.aggregates, self.config.export_size()) {
            Ok(files) => {
                self.filter_panel
                    .set_status(format!("Exported {} files to {}", files.len(), dir.display()));
                if let Err(e) = open::that(&dir) {
                    debug!(error = %e, "could not open export folder");
                }
            }
            Err(e) => {
                error!(error = %e, "export failed");
                self.filter_panel.set_status(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Filters
        SidePanel::left("filter_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.filter_panel.show(ui);

                    match action {
                        FilterPanelAction::BrowseCsv => self.handle_browse_csv(),
                        FilterPanelAction::SelectionChanged => self.recompute(),
                        FilterPanelAction::Export => self.handle_export(),
                        FilterPanelAction::None => {}
                    }
                });
            });

        // Central panel - Dashboard
        egui::CentralPanel::default().show(ctx, |ui| {
            let view = match self.dataset.as_ref() {
                Some(dataset) => FilteredView::from_indices(dataset, &self.filtered_rows),
                None => FilteredView::new(Vec::new()),
            };
            self.dashboard.show(ui, view.records());
        });
    }
}
