//! KPI display formatting.

use crate::stats::aggregator::{AggregateResult, NOT_AVAILABLE};
use num_format::{Locale, ToFormattedString};

/// Total waste in millions of tons, e.g. `"1.23 M Tons"`.
pub fn total_waste(tons: f64) -> String {
    format!("{:.2} M Tons", tons / 1e6)
}

/// Economic loss with thousands separators, e.g. `"$12,345 M"`.
pub fn economic_loss(million_usd: f64) -> String {
    format!("${} M", (million_usd.round() as i64).to_formatted_string(&Locale::en))
}

pub fn per_capita(kg: Option<f64>) -> String {
    kg.map(|v| format!("{v:.1} Kg"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn percentage(pct: Option<f64>) -> String {
    pct.map(|v| format!("{v:.1}%"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// The four KPI tiles as (label, value) pairs.
pub fn kpi_tiles(agg: &AggregateResult) -> [(&'static str, String); 4] {
    [
        ("Total Waste", total_waste(agg.total_waste)),
        ("Economic Loss", economic_loss(agg.economic_loss)),
        ("Avg Waste / Capita", per_capita(agg.avg_per_capita)),
        ("Household Waste %", percentage(agg.avg_household)),
    ]
}
