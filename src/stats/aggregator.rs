//! Aggregator Module
//! Summary metrics, grouped sums and arg-max lookups over a filtered view.

use crate::data::FilteredView;
use serde::Serialize;
use statrs::statistics::Statistics;
use std::collections::BTreeMap;

/// Sentinel shown wherever an aggregate is undefined for an empty view.
pub const NOT_AVAILABLE: &str = "N/A";

/// Everything the presentation layer needs from one filtered view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateResult {
    pub record_count: usize,
    pub total_waste: f64,
    pub economic_loss: f64,
    /// `None` when the view is empty.
    pub avg_per_capita: Option<f64>,
    /// `None` when the view is empty.
    pub avg_household: Option<f64>,
    pub by_country: BTreeMap<String, f64>,
    pub by_category_spend: BTreeMap<String, f64>,
    pub by_year: BTreeMap<i64, f64>,
    pub top_waste_country: Option<String>,
    pub top_loss_category: Option<String>,
}

impl AggregateResult {
    pub fn top_waste_country_label(&self) -> &str {
        self.top_waste_country.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn top_loss_category_label(&self) -> &str {
        self.top_loss_category.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// Computes aggregates for a filtered view.
pub struct Aggregator;

impl Aggregator {
    /// Compute every aggregate in one go.
    pub fn compute(view: &FilteredView<'_>) -> AggregateResult {
        let by_country = Self::by_country(view);
        let by_category_spend = Self::by_category_spend(view);

        AggregateResult {
            record_count: view.len(),
            total_waste: Self::total_waste(view),
            economic_loss: Self::economic_loss(view),
            avg_per_capita: Self::avg_per_capita(view),
            avg_household: Self::avg_household(view),
            by_year: Self::by_year(view),
            top_waste_country: Self::arg_max(&by_country).cloned(),
            top_loss_category: Self::arg_max(&by_category_spend).cloned(),
            by_country,
            by_category_spend,
        }
    }

    pub fn total_waste(view: &FilteredView<'_>) -> f64 {
        view.iter().map(|r| r.total_waste_tons).sum()
    }

    pub fn economic_loss(view: &FilteredView<'_>) -> f64 {
        view.iter().map(|r| r.economic_loss_musd).sum()
    }

    pub fn avg_per_capita(view: &FilteredView<'_>) -> Option<f64> {
        Self::mean(view.iter().map(|r| r.avg_waste_per_capita_kg))
    }

    pub fn avg_household(view: &FilteredView<'_>) -> Option<f64> {
        Self::mean(view.iter().map(|r| r.household_waste_pct))
    }

    /// Total waste per country.
    pub fn by_country(view: &FilteredView<'_>) -> BTreeMap<String, f64> {
        let mut groups: BTreeMap<String, f64> = BTreeMap::new();
        for r in view.iter() {
            *groups.entry(r.country.clone()).or_default() += r.total_waste_tons;
        }
        groups
    }

    /// Economic loss per food category.
    pub fn by_category_spend(view: &FilteredView<'_>) -> BTreeMap<String, f64> {
        let mut groups: BTreeMap<String, f64> = BTreeMap::new();
        for r in view.iter() {
            *groups.entry(r.food_category.clone()).or_default() += r.economic_loss_musd;
        }
        groups
    }

    /// Total waste per year, ascending by year.
    pub fn by_year(view: &FilteredView<'_>) -> BTreeMap<i64, f64> {
        let mut groups: BTreeMap<i64, f64> = BTreeMap::new();
        for r in view.iter() {
            *groups.entry(r.year).or_default() += r.total_waste_tons;
        }
        groups
    }

    /// Key with the largest value. Ties go to the smallest key.
    pub fn arg_max<K: Ord>(groups: &BTreeMap<K, f64>) -> Option<&K> {
        let mut best: Option<(&K, f64)> = None;
        for (key, &value) in groups {
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((key, value)),
            }
        }
        best.map(|(key, _)| key)
    }

    fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
        let values: Vec<f64> = values.collect();
        if values.is_empty() {
            return None;
        }
        let mean = Statistics::mean(&values);
        (!mean.is_nan()).then_some(mean)
    }
}
