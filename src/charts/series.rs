//! Chart-ready series derived from aggregates.

use crate::stats::AggregateResult;

/// Series for the three dashboard charts, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    /// Total waste per country, alphabetical.
    pub country_bars: Vec<(String, f64)>,
    /// Economic loss per category, alphabetical.
    pub category_slices: Vec<(String, f64)>,
    /// Total waste per year, ascending year.
    pub year_points: Vec<(i64, f64)>,
}

impl ChartData {
    pub fn from_aggregates(agg: &AggregateResult) -> Self {
        Self {
            country_bars: agg
                .by_country
                .iter()
                .map(|(k, &v)| (k.clone(), v))
                .collect(),
            category_slices: agg
                .by_category_spend
                .iter()
                .map(|(k, &v)| (k.clone(), v))
                .collect(),
            year_points: agg.by_year.iter().map(|(&y, &v)| (y, v)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.country_bars.is_empty()
    }

    /// Share of each pie slice in `[0, 1]`. Empty when the total is not positive.
    pub fn category_shares(&self) -> Vec<(String, f64)> {
        let total: f64 = self.category_slices.iter().map(|(_, v)| v).sum();
        if total <= 0.0 {
            return Vec::new();
        }
        self.category_slices
            .iter()
            .map(|(k, v)| (k.clone(), v / total))
            .collect()
    }
}

/// Axis upper bound with headroom above the largest value.
pub fn padded_max<'a>(values: impl IntoIterator<Item = &'a f64>) -> f64 {
    let max = values.into_iter().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}
