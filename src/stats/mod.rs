//! Stats module - aggregation and KPI text

mod aggregator;
pub mod format;
mod insights;

pub use aggregator::{AggregateResult, Aggregator, NOT_AVAILABLE};
pub use insights::{Insights, POLICY_RECOMMENDATIONS};
