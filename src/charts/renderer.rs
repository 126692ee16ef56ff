//! Static Chart Renderer
//! Renders the dashboard charts to PNG with plotters for export.
//!
//! Layout matches the interactive view:
//! 1. "Total Food Waste by Country" - vertical bars, alphabetical
//! 2. "Economic Loss Contribution" - pie with percentage labels
//! 3. "Total Food Waste Over Time" - line with markers, ascending year

use crate::charts::plotter::PALETTE;
use crate::charts::series::{padded_max, ChartData};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use std::io::Cursor;
use thiserror::Error;

const PRIMARY: RGBColor = RGBColor(52, 152, 219);
const FONT: &str = "sans-serif";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Chart drawing failed: {0}")]
    Draw(String),
    #[error("Pixel buffer does not match {0}x{1}")]
    Buffer(u32, u32),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// The three exported charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    CountryBar,
    CategoryPie,
    YearTrend,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::CountryBar,
        ChartKind::CategoryPie,
        ChartKind::YearTrend,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::CountryBar => "Total Food Waste by Country",
            ChartKind::CategoryPie => "Economic Loss Contribution",
            ChartKind::YearTrend => "Total Food Waste Over Time",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::CountryBar => "waste_by_country.png",
            ChartKind::CategoryPie => "loss_by_category.png",
            ChartKind::YearTrend => "waste_trend.png",
        }
    }
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render one chart to PNG bytes.
    pub fn render_png(
        kind: ChartKind,
        data: &ChartData,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            Self::draw(&root, kind, data).map_err(|e| RenderError::Draw(e.to_string()))?;
            root.present()
                .map_err(|e| RenderError::Draw(e.to_string()))?;
        }

        let img = RgbImage::from_raw(width, height, buffer).ok_or(RenderError::Buffer(width, height))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Draw a chart onto any plotters backend.
    pub fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        kind: ChartKind,
        data: &ChartData,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let empty = match kind {
            ChartKind::CountryBar => data.country_bars.is_empty(),
            ChartKind::CategoryPie => data.category_shares().is_empty(),
            ChartKind::YearTrend => data.year_points.is_empty(),
        };
        if empty {
            return Self::draw_no_data(root, kind);
        }

        match kind {
            ChartKind::CountryBar => Self::draw_country_bars(root, data),
            ChartKind::CategoryPie => Self::draw_category_pie(root, data),
            ChartKind::YearTrend => Self::draw_year_trend(root, data),
        }
    }

    fn draw_no_data<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        kind: ChartKind,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        let area = root.titled(kind.title(), (FONT, 28))?;
        let (w, h) = area.dim_in_pixel();
        area.draw(&Text::new(
            "No Data",
            (w as i32 / 2 - 40, h as i32 / 2),
            (FONT, 24).into_font().color(&BLACK.mix(0.6)),
        ))
    }

    fn draw_country_bars<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        data: &ChartData,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        let n = data.country_bars.len() as u32;
        let y_max = padded_max(data.country_bars.iter().map(|(_, v)| v));
        let labels: Vec<&str> = data.country_bars.iter().map(|(c, _)| c.as_str()).collect();

        let mut chart = ChartBuilder::on(root)
            .caption(ChartKind::CountryBar.title(), (FONT, 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d((0u32..n).into_segmented(), 0f64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len())
            .x_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) => {
                    labels.get(*i as usize).map(|s| s.to_string()).unwrap_or_default()
                }
                _ => String::new(),
            })
            .x_desc("Country")
            .y_desc("Total Waste (Tons)")
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(PRIMARY.filled())
                .margin(10)
                .data(
                    data.country_bars
                        .iter()
                        .enumerate()
                        .map(|(i, (_, v))| (i as u32, *v)),
                ),
        )?;

        Ok(())
    }

    fn draw_category_pie<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        data: &ChartData,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        let area = root.titled(ChartKind::CategoryPie.title(), (FONT, 28))?;
        let (w, h) = area.dim_in_pixel();
        let center = (w as i32 / 2, h as i32 / 2);
        let radius = w.min(h) as f64 * 0.35;

        let sizes: Vec<f64> = data.category_slices.iter().map(|(_, v)| *v).collect();
        let labels: Vec<&str> = data.category_slices.iter().map(|(c, _)| c.as_str()).collect();
        let colors: Vec<RGBColor> = (0..sizes.len())
            .map(|i| {
                let c = PALETTE[i % PALETTE.len()];
                RGBColor(c.r(), c.g(), c.b())
            })
            .collect();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style((FONT, 16).into_font().color(&BLACK));
        pie.percentages((FONT, 14).into_font().color(&WHITE));
        area.draw(&pie)
    }

    fn draw_year_trend<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        data: &ChartData,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        let (x_min, x_max) = year_bounds(&data.year_points);
        let y_max = padded_max(data.year_points.iter().map(|(_, v)| v));

        let mut chart = ChartBuilder::on(root)
            .caption(ChartKind::YearTrend.title(), (FONT, 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d(x_min..x_max, 0f64..y_max)?;

        chart
            .configure_mesh()
            .x_labels(((x_max - x_min) as usize + 1).min(12))
            .x_label_formatter(&|y| y.to_string())
            .x_desc("Year")
            .y_desc("Total Waste (Tons)")
            .draw()?;

        chart.draw_series(LineSeries::new(
            data.year_points.iter().copied(),
            PRIMARY.stroke_width(2),
        ))?;
        chart.draw_series(
            data.year_points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 5, PRIMARY.filled())),
        )?;

        Ok(())
    }
}

/// X-axis range for the trend chart; a single year is padded by one each side.
pub fn year_bounds(points: &[(i64, f64)]) -> (i64, i64) {
    let min = points.iter().map(|(y, _)| *y).min().unwrap_or(0);
    let max = points.iter().map(|(y, _)| *y).max().unwrap_or(0);
    if min == max {
        (min - 1, max + 1)
    } else {
        (min, max)
    }
}
