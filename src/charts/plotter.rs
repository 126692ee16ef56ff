//! Chart Plotter Module
//! Interactive dashboard charts using egui_plot.

use crate::charts::series::{padded_max, ChartData};
use crate::data::{Record, REQUIRED_COLUMNS};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};
use std::f64::consts::{FRAC_PI_2, TAU};
use std::ops::Range;

/// Color palette for countries and categories
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219), // Blue
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

pub const PRIMARY_COLOR: Color32 = Color32::from_rgb(52, 152, 219);

const CHART_HEIGHT: f32 = 380.0;

const ROW_HEIGHT: f32 = 18.0;
const COL_WIDTH: f32 = 140.0;

/// Largest arc drawn as one polygon; egui only fills convex shapes.
const MAX_ARC: f64 = FRAC_PI_2;
const ARC_STEPS_PER_TURN: f64 = 96.0;

/// Draws the dashboard charts.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn color_for(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Bar chart of total waste per country.
    pub fn draw_country_bar_chart(ui: &mut egui::Ui, data: &ChartData) {
        let labels: Vec<String> = data.country_bars.iter().map(|(c, _)| c.clone()).collect();
        let y_max = padded_max(data.country_bars.iter().map(|(_, v)| v));

        Plot::new("waste_by_country")
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_y(0.0)
            .include_y(y_max)
            .x_axis_label("Country")
            .y_axis_label("Total Waste (Tons)")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() < 1e-6 && idx >= 0.0 {
                    labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                let bars: Vec<Bar> = data
                    .country_bars
                    .iter()
                    .enumerate()
                    .map(|(i, (country, value))| {
                        Bar::new(i as f64, *value)
                            .name(country)
                            .width(0.6)
                            .fill(PRIMARY_COLOR)
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).name("Total Waste (Tons)"));

                // Value labels above each bar
                for (i, (_, value)) in data.country_bars.iter().enumerate() {
                    plot_ui.text(Text::new(
                        PlotPoint::new(i as f64, *value + y_max * 0.03),
                        RichText::new(format!("{value:.0}")).size(11.0),
                    ));
                }
            });
    }

    /// Pie chart of economic loss share per food category.
    pub fn draw_category_pie_chart(ui: &mut egui::Ui, data: &ChartData) {
        let shares = data.category_shares();

        Plot::new("loss_by_category")
            .height(CHART_HEIGHT)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_x(-1.6)
            .include_x(1.6)
            .include_y(-1.2)
            .include_y(1.2)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                let mut start = FRAC_PI_2;
                for (i, (category, share)) in shares.iter().enumerate() {
                    let sweep = share * TAU;
                    let color = Self::color_for(i);

                    for polygon in pie_slice_polygons(start, sweep, 1.0) {
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::from(polygon))
                                .fill_color(color)
                                .stroke(egui::Stroke::new(1.0, Color32::WHITE))
                                .name(category),
                        );
                    }

                    if *share >= 0.03 {
                        let mid = start - sweep / 2.0;
                        plot_ui.text(Text::new(
                            PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                            RichText::new(format!("{:.1}%", share * 100.0))
                                .size(12.0)
                                .color(Color32::WHITE),
                        ));
                    }

                    // Slices run clockwise from twelve o'clock
                    start -= sweep;
                }
            });
    }

    /// Line chart of total waste per year with markers.
    pub fn draw_year_trend_chart(ui: &mut egui::Ui, data: &ChartData) {
        let points: Vec<[f64; 2]> = data
            .year_points
            .iter()
            .map(|&(year, value)| [year as f64, value])
            .collect();
        let y_max = padded_max(data.year_points.iter().map(|(_, v)| v));

        Plot::new("waste_trend")
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_y(0.0)
            .include_y(y_max)
            .x_axis_label("Year")
            .y_axis_label("Total Waste (Tons)")
            .x_axis_formatter(|mark, _range| {
                if mark.value.fract().abs() < 1e-6 {
                    format!("{:.0}", mark.value)
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points.iter().copied()))
                        .color(PRIMARY_COLOR)
                        .width(2.0)
                        .name("Total Waste (Tons)"),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points.iter().copied()))
                        .radius(4.0)
                        .color(PRIMARY_COLOR),
                );
            });
    }

    /// Scrollable preview of the filtered records.
    ///
    /// Only the rows inside the visible scroll window are laid out each frame.
    pub fn draw_records_table(ui: &mut egui::Ui, records: &[&Record]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::ScrollArea::both()
                    .id_salt("records_preview")
                    .max_height(300.0)
                    .auto_shrink([false, true])
                    .show_rows(ui, ROW_HEIGHT, records.len() + 1, |ui, rows| {
                        if rows.start == 0 {
                            ui.horizontal(|ui| {
                                for header in REQUIRED_COLUMNS {
                                    Self::table_cell(ui, RichText::new(header).strong().size(11.0));
                                }
                            });
                        }
                        for r in &records[preview_record_range(rows, records.len())] {
                            ui.horizontal(|ui| {
                                for cell in preview_cells(r) {
                                    Self::table_cell(ui, RichText::new(cell).size(11.0));
                                }
                            });
                        }
                    });
            });
    }

    fn table_cell(ui: &mut egui::Ui, text: RichText) {
        ui.add_sized([COL_WIDTH, ROW_HEIGHT], egui::Label::new(text).truncate());
    }
}

/// Records covered by the table rows in `rows`; row 0 is the header.
fn preview_record_range(rows: Range<usize>, len: usize) -> Range<usize> {
    let start = rows.start.saturating_sub(1).min(len);
    let end = rows.end.saturating_sub(1).clamp(start, len);
    start..end
}

fn preview_cells(r: &Record) -> [String; 7] {
    [
        r.country.clone(),
        r.year.to_string(),
        r.food_category.clone(),
        format!("{:.2}", r.total_waste_tons),
        format!("{:.2}", r.economic_loss_musd),
        format!("{:.2}", r.avg_waste_per_capita_kg),
        format!("{:.2}", r.household_waste_pct),
    ]
}

/// Convex polygons covering one pie slice, starting at angle `start` and
/// sweeping clockwise by `sweep` radians.
pub fn pie_slice_polygons(start: f64, sweep: f64, radius: f64) -> Vec<Vec<[f64; 2]>> {
    if sweep <= 0.0 {
        return Vec::new();
    }

    let pieces = (sweep / MAX_ARC).ceil().max(1.0) as usize;
    let piece_sweep = sweep / pieces as f64;
    let steps = ((piece_sweep / TAU) * ARC_STEPS_PER_TURN).ceil().max(1.0) as usize;

    (0..pieces)
        .map(|p| {
            let from = start - p as f64 * piece_sweep;
            let mut polygon = Vec::with_capacity(steps + 2);
            polygon.push([0.0, 0.0]);
            for s in 0..=steps {
                let angle = from - piece_sweep * s as f64 / steps as f64;
                polygon.push([radius * angle.cos(), radius * angle.sin()]);
            }
            polygon
        })
        .collect()
}
