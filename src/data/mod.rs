//! Data module - CSV loading and filtering

mod filter;
mod loader;
mod record;

pub use filter::{filter, filter_indices, FilterSelection, FilteredView};
pub use loader::{DataLoadError, DatasetLoader};
pub use record::{
    Dataset, Record, COL_CATEGORY, COL_COUNTRY, COL_ECONOMIC_LOSS, COL_HOUSEHOLD, COL_PER_CAPITA,
    COL_TOTAL_WASTE, COL_YEAR, REQUIRED_COLUMNS,
};
