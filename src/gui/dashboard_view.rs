//! Dashboard View Widget
//! Central panel: KPI tiles, tabbed charts, insights and the data preview.

use crate::charts::{ChartData, ChartPlotter};
use crate::data::Record;
use crate::stats::{format, AggregateResult, Insights, POLICY_RECOMMENDATIONS};
use egui::{Color32, RichText, ScrollArea};

const TILE_HEIGHT: f32 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Country,
    Category,
    Trends,
    Insights,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Country,
        DashboardTab::Category,
        DashboardTab::Trends,
        DashboardTab::Insights,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Country => "🌍 Country Analysis",
            DashboardTab::Category => "📦 Category Analysis",
            DashboardTab::Trends => "📈 Trends",
            DashboardTab::Insights => "💡 Insights",
        }
    }
}

/// Rendered state of the current filter selection.
#[derive(Default)]
pub struct DashboardView {
    pub tab: DashboardTab,
    pub aggregates: AggregateResult,
    pub chart_data: ChartData,
    pub insights: Option<Insights>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed aggregates.
    pub fn set_aggregates(&mut self, aggregates: AggregateResult) {
        self.chart_data = ChartData::from_aggregates(&aggregates);
        self.insights = Some(Insights::from_aggregates(&aggregates));
        self.aggregates = aggregates;
    }

    pub fn clear(&mut self) {
        self.aggregates = AggregateResult::default();
        self.chart_data = ChartData::default();
        self.insights = None;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, records: &[&Record]) {
        let Some(insights) = self.insights.clone() else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(RichText::new("🍽 Global Food Waste Analytics Dashboard").strong());
                ui.label("Data-driven insights for policy makers & sustainability teams");
                ui.add_space(10.0);

                self.draw_kpi_tiles(ui);
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    for tab in DashboardTab::ALL {
                        ui.selectable_value(&mut self.tab, tab, RichText::new(tab.label()).size(14.0));
                    }
                });
                ui.separator();

                match self.tab {
                    DashboardTab::Country => {
                        ui.label(RichText::new("Food Waste by Country").size(16.0).strong());
                        Self::chart_or_empty(ui, self.chart_data.country_bars.is_empty(), |ui| {
                            ChartPlotter::draw_country_bar_chart(ui, &self.chart_data)
                        });
                    }
                    DashboardTab::Category => {
                        ui.label(
                            RichText::new("Economic Loss by Food Category")
                                .size(16.0)
                                .strong(),
                        );
                        Self::chart_or_empty(ui, self.chart_data.category_shares().is_empty(), |ui| {
                            ChartPlotter::draw_category_pie_chart(ui, &self.chart_data)
                        });
                    }
                    DashboardTab::Trends => {
                        ui.label(RichText::new("Yearly Waste Trend").size(16.0).strong());
                        Self::chart_or_empty(ui, self.chart_data.year_points.is_empty(), |ui| {
                            ChartPlotter::draw_year_trend_chart(ui, &self.chart_data)
                        });
                    }
                    DashboardTab::Insights => Self::draw_insights(ui, &insights),
                }

                ui.add_space(15.0);
                ui.label(
                    RichText::new(format!("📄 Data Preview ({} rows)", records.len()))
                        .size(16.0)
                        .strong(),
                );
                ChartPlotter::draw_records_table(ui, records);
            });
    }

    fn draw_kpi_tiles(&self, ui: &mut egui::Ui) {
        let tiles = format::kpi_tiles(&self.aggregates);
        ui.columns(tiles.len(), |columns| {
            for (col, (label, value)) in columns.iter_mut().zip(tiles.iter()) {
                egui::Frame::none()
                    .rounding(8.0)
                    .fill(col.visuals().widgets.noninteractive.bg_fill)
                    .inner_margin(10.0)
                    .show(col, |ui| {
                        ui.set_min_height(TILE_HEIGHT);
                        ui.label(RichText::new(*label).size(12.0).color(Color32::GRAY));
                        ui.label(RichText::new(value).size(22.0).strong());
                    });
            }
        });
    }

    fn draw_insights(ui: &mut egui::Ui, insights: &Insights) {
        ui.label(RichText::new("Actionable Insights").size(16.0).strong());
        ui.add_space(8.0);

        ui.label(RichText::new("Key Findings").strong());
        for (subject, rest) in insights.key_findings() {
            ui.horizontal_wrapped(|ui| {
                ui.label("•");
                ui.label(RichText::new(subject).strong());
                ui.label(rest);
            });
        }

        ui.add_space(8.0);
        ui.label(RichText::new("Policy Recommendations").strong());
        for rec in POLICY_RECOMMENDATIONS {
            ui.label(format!("• {rec}"));
        }
    }

    fn chart_or_empty(ui: &mut egui::Ui, empty: bool, draw: impl FnOnce(&mut egui::Ui)) {
        if empty {
            ui.add_space(20.0);
            ui.label(
                RichText::new("No records match the current filters")
                    .size(14.0)
                    .color(Color32::GRAY),
            );
            ui.add_space(20.0);
        } else {
            draw(ui);
        }
    }
}
