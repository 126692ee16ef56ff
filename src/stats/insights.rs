//! Narrative insights shown on the Insights tab.

use crate::stats::aggregator::AggregateResult;
use crate::stats::format;

pub const POLICY_RECOMMENDATIONS: [&str; 4] = [
    "Target household-level awareness programs",
    "Subsidize cold storage for high-loss categories",
    "Incentivize redistribution of edible surplus",
    "Monitor per-capita waste, not just total waste",
];

/// Key findings derived from the current aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    pub top_country: String,
    pub top_category: String,
    pub household_share: String,
}

impl Insights {
    pub fn from_aggregates(agg: &AggregateResult) -> Self {
        Self {
            top_country: agg.top_waste_country_label().to_string(),
            top_category: agg.top_loss_category_label().to_string(),
            household_share: format::percentage(agg.avg_household),
        }
    }

    /// Findings as (emphasised subject, remainder of sentence).
    pub fn key_findings(&self) -> Vec<(String, String)> {
        vec![
            (
                self.top_country.clone(),
                " generates the highest total food waste".to_string(),
            ),
            (
                self.top_category.clone(),
                " causes the highest economic loss".to_string(),
            ),
            (
                "Household waste".to_string(),
                format!(" contributes ~{} of total waste", self.household_share),
            ),
            (
                "Monthly waste estimates".to_string(),
                " indicate consistent, non-seasonal losses".to_string(),
            ),
        ]
    }

    /// Plain-text rendering used for export.
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("**Key Findings**\n");
        for (subject, rest) in self.key_findings() {
            out.push_str(&format!("- **{subject}**{rest}\n"));
        }
        out.push_str("\n**Policy Recommendations**\n");
        for rec in POLICY_RECOMMENDATIONS {
            out.push_str(&format!("- {rec}\n"));
        }
        out
    }
}
