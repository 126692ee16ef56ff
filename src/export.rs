//! Report Export Module
//! Writes the current dashboard state to a directory: PNG charts, a JSON
//! summary and the filtered rows as CSV.

use crate::charts::{ChartData, ChartKind, RenderError, StaticChartRenderer};
use crate::data::{DatasetLoader, FilteredView};
use crate::stats::{AggregateResult, Insights};
use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const SUMMARY_FILE: &str = "summary.json";
pub const RECORDS_FILE: &str = "filtered_records.csv";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Failed to write summary: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] PolarsError),
}

#[derive(Serialize)]
struct Summary<'a> {
    #[serde(flatten)]
    aggregates: &'a AggregateResult,
    insights: String,
}

pub struct Exporter;

impl Exporter {
    /// Export everything into `dir`, creating it if needed.
    /// Returns the written file paths.
    pub fn export(
        dir: &Path,
        view: &FilteredView<'_>,
        aggregates: &AggregateResult,
        size: (u32, u32),
    ) -> Result<Vec<PathBuf>, ExportError> {
        fs::create_dir_all(dir)?;

        let mut written = Self::export_charts_as_png(dir, aggregates, size)?;
        written.push(Self::export_summary(dir, aggregates)?);
        written.push(Self::export_records(dir, view)?);

        info!(dir = %dir.display(), files = written.len(), "dashboard exported");
        Ok(written)
    }

    /// Render the three charts in parallel and write them as PNG files.
    pub fn export_charts_as_png(
        dir: &Path,
        aggregates: &AggregateResult,
        (width, height): (u32, u32),
    ) -> Result<Vec<PathBuf>, ExportError> {
        let data = ChartData::from_aggregates(aggregates);

        let rendered: Vec<(ChartKind, Vec<u8>)> = ChartKind::ALL
            .par_iter()
            .map(|&kind| {
                StaticChartRenderer::render_png(kind, &data, width, height).map(|png| (kind, png))
            })
            .collect::<Result<_, _>>()?;

        let mut paths = Vec::with_capacity(rendered.len());
        for (kind, png) in rendered {
            let path = dir.join(kind.file_name());
            fs::write(&path, png)?;
            paths.push(path);
        }
        Ok(paths)
    }

    /// Aggregates plus the insights narrative as pretty JSON.
    pub fn export_summary(dir: &Path, aggregates: &AggregateResult) -> Result<PathBuf, ExportError> {
        let path = dir.join(SUMMARY_FILE);
        let summary = Summary {
            aggregates,
            insights: Insights::from_aggregates(aggregates).to_markdown(),
        };
        serde_json::to_writer_pretty(File::create(&path)?, &summary)?;
        Ok(path)
    }

    /// Filtered rows with the dataset's column headers.
    pub fn export_records(dir: &Path, view: &FilteredView<'_>) -> Result<PathBuf, ExportError> {
        let path = dir.join(RECORDS_FILE);
        let mut df = DatasetLoader::to_dataframe(view.records())?;
        let mut file = File::create(&path)?;
        CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
        Ok(path)
    }
}
