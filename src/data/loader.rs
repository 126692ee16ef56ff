//! CSV Dataset Loader Module
//! Reads the food waste CSV with Polars and caches the parsed dataset per path.

use crate::data::record::{
    Dataset, Record, COL_CATEGORY, COL_COUNTRY, COL_ECONOMIC_LOSS, COL_HOUSEHOLD, COL_PER_CAPITA,
    COL_TOTAL_WASTE, COL_YEAR, REQUIRED_COLUMNS,
};
use polars::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Dataset file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Required column missing: {0}")]
    MissingColumn(String),
    #[error("Missing or unparsable value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },
}

type DatasetCache = Mutex<HashMap<PathBuf, Arc<Dataset>>>;

static CACHE: OnceLock<DatasetCache> = OnceLock::new();

fn cache() -> &'static DatasetCache {
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Loads the dataset from disk, once per path for the lifetime of the process.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load a dataset, returning the cached copy if this path was read before.
    ///
    /// Failed loads are not cached, so a later call retries the read.
    pub fn load(path: impl AsRef<Path>) -> Result<Arc<Dataset>, DataLoadError> {
        let path = path.as_ref();
        let mut cached = cache().lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(dataset) = cached.get(path) {
            debug!(path = %path.display(), "dataset cache hit");
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(Self::read_csv(path)?);
        cached.insert(path.to_path_buf(), Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Whether a dataset for this path is already cached.
    pub fn is_cached(path: impl AsRef<Path>) -> bool {
        cache()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains_key(path.as_ref())
    }

    /// Read and parse a CSV file without touching the cache.
    pub fn read_csv(path: &Path) -> Result<Dataset, DataLoadError> {
        if !path.is_file() {
            return Err(DataLoadError::NotFound(path.to_path_buf()));
        }

        let started = Instant::now();

        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        let dataset = Self::from_dataframe(&df)?;

        info!(
            path = %path.display(),
            rows = dataset.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "dataset loaded"
        );

        Ok(dataset)
    }

    /// Convert a DataFrame holding the required columns into a dataset.
    /// Additional columns are ignored.
    pub fn from_dataframe(df: &DataFrame) -> Result<Dataset, DataLoadError> {
        let present: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|name| !present.iter().any(|p| p == *name))
        {
            return Err(DataLoadError::MissingColumn(missing.to_string()));
        }

        let country = df.column(COL_COUNTRY)?.cast(&DataType::String)?;
        let year = df.column(COL_YEAR)?.cast(&DataType::Int64)?;
        let category = df.column(COL_CATEGORY)?.cast(&DataType::String)?;
        let total_waste = df.column(COL_TOTAL_WASTE)?.cast(&DataType::Float64)?;
        let economic_loss = df.column(COL_ECONOMIC_LOSS)?.cast(&DataType::Float64)?;
        let per_capita = df.column(COL_PER_CAPITA)?.cast(&DataType::Float64)?;
        let household = df.column(COL_HOUSEHOLD)?.cast(&DataType::Float64)?;

        let country = country.str()?;
        let year = year.i64()?;
        let category = category.str()?;
        let total_waste = total_waste.f64()?;
        let economic_loss = economic_loss.f64()?;
        let per_capita = per_capita.f64()?;
        let household = household.f64()?;

        let missing = |column: &str, row: usize| DataLoadError::MissingValue {
            column: column.to_string(),
            row,
        };

        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            records.push(Record {
                country: country.get(i).ok_or_else(|| missing(COL_COUNTRY, i))?.to_string(),
                year: year.get(i).ok_or_else(|| missing(COL_YEAR, i))?,
                food_category: category
                    .get(i)
                    .ok_or_else(|| missing(COL_CATEGORY, i))?
                    .to_string(),
                total_waste_tons: total_waste
                    .get(i)
                    .ok_or_else(|| missing(COL_TOTAL_WASTE, i))?,
                economic_loss_musd: economic_loss
                    .get(i)
                    .ok_or_else(|| missing(COL_ECONOMIC_LOSS, i))?,
                avg_waste_per_capita_kg: per_capita
                    .get(i)
                    .ok_or_else(|| missing(COL_PER_CAPITA, i))?,
                household_waste_pct: household
                    .get(i)
                    .ok_or_else(|| missing(COL_HOUSEHOLD, i))?,
            });
        }

        Ok(Dataset::new(records))
    }

    /// Build a DataFrame with the seven dataset columns from a slice of records.
    pub fn to_dataframe(records: &[&Record]) -> PolarsResult<DataFrame> {
        let countries: Vec<&str> = records.iter().map(|r| r.country.as_str()).collect();
        let years: Vec<i64> = records.iter().map(|r| r.year).collect();
        let categories: Vec<&str> = records.iter().map(|r| r.food_category.as_str()).collect();
        let total_waste: Vec<f64> = records.iter().map(|r| r.total_waste_tons).collect();
        let economic_loss: Vec<f64> = records.iter().map(|r| r.economic_loss_musd).collect();
        let per_capita: Vec<f64> = records.iter().map(|r| r.avg_waste_per_capita_kg).collect();
        let household: Vec<f64> = records.iter().map(|r| r.household_waste_pct).collect();

        DataFrame::new(vec![
            Column::new(COL_COUNTRY.into(), countries),
            Column::new(COL_YEAR.into(), years),
            Column::new(COL_CATEGORY.into(), categories),
            Column::new(COL_TOTAL_WASTE.into(), total_waste),
            Column::new(COL_ECONOMIC_LOSS.into(), economic_loss),
            Column::new(COL_PER_CAPITA.into(), per_capita),
            Column::new(COL_HOUSEHOLD.into(), household),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new(COL_COUNTRY.into(), vec!["USA", "India"]),
            Column::new(COL_YEAR.into(), vec![2020i64, 2021]),
            Column::new(COL_CATEGORY.into(), vec!["Fruit", "Grain"]),
            Column::new(COL_TOTAL_WASTE.into(), vec![100.0, 150.0]),
            Column::new(COL_ECONOMIC_LOSS.into(), vec![10.0, 5.0]),
            Column::new(COL_PER_CAPITA.into(), vec![5.0, 3.0]),
            Column::new(COL_HOUSEHOLD.into(), vec![20.0, 15.0]),
            Column::new("Population (Million)".into(), vec![331.0, 1380.0]),
        ])
        .unwrap()
    }

    #[test]
    fn from_dataframe_keeps_row_order_and_ignores_extra_columns() {
        let ds = DatasetLoader::from_dataframe(&sample_frame()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0], Record::new("USA", 2020, "Fruit", 100.0, 10.0, 5.0, 20.0));
        assert_eq!(ds.records()[1].country, "India");
    }

    #[test]
    fn from_dataframe_reports_missing_column() {
        let df = sample_frame().drop(COL_HOUSEHOLD).unwrap();
        match DatasetLoader::from_dataframe(&df) {
            Err(DataLoadError::MissingColumn(name)) => assert_eq!(name, COL_HOUSEHOLD),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn to_dataframe_round_trips_through_from_dataframe() {
        let ds = DatasetLoader::from_dataframe(&sample_frame()).unwrap();
        let refs: Vec<&Record> = ds.records().iter().collect();
        let df = DatasetLoader::to_dataframe(&refs).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(DatasetLoader::from_dataframe(&df).unwrap(), ds);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = DatasetLoader::load("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, DataLoadError::NotFound(_)));
        assert!(!DatasetLoader::is_cached("does/not/exist.csv"));
    }
}
