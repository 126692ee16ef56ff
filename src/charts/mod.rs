//! Charts module - Chart rendering

mod plotter;
mod renderer;
mod series;

pub use plotter::{pie_slice_polygons, ChartPlotter, PALETTE};
pub use renderer::{ChartKind, RenderError, StaticChartRenderer};
pub use series::ChartData;
