//! Filter Panel Widget
//! Left side panel with the data source, the three multi-select filters and export.

use crate::data::{Dataset, FilterSelection};
use egui::{Color32, RichText, ScrollArea};
use std::collections::BTreeSet;
use std::path::PathBuf;

const LIST_HEIGHT: f32 = 150.0;

/// Left side panel holding the current filter selection.
pub struct FilterPanel {
    pub csv_path: Option<PathBuf>,
    pub countries: Vec<String>,
    pub years: Vec<i64>,
    pub categories: Vec<String>,
    pub selection: FilterSelection,
    pub status: String,
    pub export_enabled: bool,
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self {
            csv_path: None,
            countries: Vec::new(),
            years: Vec::new(),
            categories: Vec::new(),
            selection: FilterSelection::none(),
            status: "Ready".to_string(),
            export_enabled: false,
        }
    }
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer every distinct value of the dataset and select all of them.
    pub fn update_options(&mut self, dataset: &Dataset) {
        self.countries = dataset.countries();
        self.years = dataset.years();
        self.categories = dataset.categories();
        self.selection = FilterSelection::all(dataset);
        self.export_enabled = !dataset.is_empty();
    }

    /// Forget the loaded dataset's options.
    pub fn clear_options(&mut self) {
        self.countries.clear();
        self.years.clear();
        self.categories.clear();
        self.selection = FilterSelection::none();
        self.export_enabled = false;
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Draw the filter panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> FilterPanelAction {
        let mut action = FilterPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🍽 Food Waste Analytics")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.csv_path.is_some() {
                            ui.visuals().text_color()
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = FilterPanelAction::BrowseCsv;
                        }
                    });
                });
            });

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Filters =====
        ui.label(RichText::new("Filters").size(14.0).strong());
        ui.add_space(5.0);

        let mut changed = false;
        changed |= multi_select(
            ui,
            "Select Country",
            &self.countries,
            &mut self.selection.countries,
        );
        changed |= multi_select(ui, "Select Year", &self.years, &mut self.selection.years);
        changed |= multi_select(
            ui,
            "Food Category",
            &self.categories,
            &mut self.selection.categories,
        );
        if changed {
            action = FilterPanelAction::SelectionChanged;
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.export_enabled, |ui| {
                let button = egui::Button::new(RichText::new("📄 Export Report").size(14.0))
                    .min_size(egui::vec2(180.0, 30.0));
                if ui.add(button).clicked() {
                    action = FilterPanelAction::Export;
                }
            });
        });

        ui.add_space(10.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Checkbox list with Select All / Clear All. Returns whether the selection changed.
fn multi_select<T>(ui: &mut egui::Ui, title: &str, options: &[T], selected: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone + ToString,
{
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label(RichText::new(title).strong());
        ui.label(
            RichText::new(format!("{}/{}", selected.len(), options.len()))
                .size(11.0)
                .color(Color32::GRAY),
        );
    });

    egui::Frame::none()
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .rounding(5.0)
        .inner_margin(5.0)
        .show(ui, |ui| {
            ScrollArea::vertical()
                .id_salt(title)
                .max_height(LIST_HEIGHT)
                .show(ui, |ui| {
                    for option in options {
                        let mut checked = selected.contains(option);
                        if ui.checkbox(&mut checked, option.to_string()).changed() {
                            if checked {
                                selected.insert(option.clone());
                            } else {
                                selected.remove(option);
                            }
                            changed = true;
                        }
                    }
                });
        });

    ui.horizontal(|ui| {
        if ui.small_button("Select All").clicked() {
            selected.extend(options.iter().cloned());
            changed = true;
        }
        if ui.small_button("Clear All").clicked() {
            selected.clear();
            changed = true;
        }
    });
    ui.add_space(6.0);

    changed
}

/// Actions triggered by the filter panel
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPanelAction {
    None,
    BrowseCsv,
    SelectionChanged,
    Export,
}
