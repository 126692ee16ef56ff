//! Record & Dataset Types
//! One row per country/year/category observation, loaded once and never mutated.

use serde::Serialize;
use std::collections::BTreeSet;

/// Header names of the columns the dashboard reads.
pub const COL_COUNTRY: &str = "Country";
pub const COL_YEAR: &str = "Year";
pub const COL_CATEGORY: &str = "Food Category";
pub const COL_TOTAL_WASTE: &str = "Total Waste (Tons)";
pub const COL_ECONOMIC_LOSS: &str = "Economic Loss (Million $)";
pub const COL_PER_CAPITA: &str = "Avg Waste per Capita (Kg)";
pub const COL_HOUSEHOLD: &str = "Household Waste (%)";

/// Required columns in display order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_COUNTRY,
    COL_YEAR,
    COL_CATEGORY,
    COL_TOTAL_WASTE,
    COL_ECONOMIC_LOSS,
    COL_PER_CAPITA,
    COL_HOUSEHOLD,
];

/// A single food waste observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub country: String,
    pub year: i64,
    pub food_category: String,
    pub total_waste_tons: f64,
    pub economic_loss_musd: f64,
    pub avg_waste_per_capita_kg: f64,
    pub household_waste_pct: f64,
}

impl Record {
    pub fn new(
        country: impl Into<String>,
        year: i64,
        food_category: impl Into<String>,
        total_waste_tons: f64,
        economic_loss_musd: f64,
        avg_waste_per_capita_kg: f64,
        household_waste_pct: f64,
    ) -> Self {
        Self {
            country: country.into(),
            year,
            food_category: food_category.into(),
            total_waste_tons,
            economic_loss_musd,
            avg_waste_per_capita_kg,
            household_waste_pct,
        }
    }
}

/// The full dataset in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct countries, sorted.
    pub fn countries(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.country.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i64> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct food categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.food_category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}
