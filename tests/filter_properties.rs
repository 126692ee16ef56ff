//! Property tests for the filter engine and aggregator.

use food_waste_dashboard::data::{filter, Dataset, FilterSelection, Record};
use food_waste_dashboard::stats::Aggregator;
use proptest::prelude::*;
use std::collections::BTreeSet;

const COUNTRIES: [&str; 4] = ["USA", "India", "Chile", "Kenya"];
const CATEGORIES: [&str; 3] = ["Fruit", "Grain", "Dairy"];

fn record() -> impl Strategy<Value = Record> {
    (
        prop::sample::select(&COUNTRIES[..]),
        2018i64..2024,
        prop::sample::select(&CATEGORIES[..]),
        0u32..10_000,
        0u32..1_000,
        0u32..200,
        0u32..=100,
    )
        .prop_map(|(country, year, category, waste, loss, capita, household)| {
            Record::new(
                country,
                year,
                category,
                waste as f64,
                loss as f64,
                capita as f64,
                household as f64,
            )
        })
}

fn dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(record(), 0..40).prop_map(Dataset::new)
}

fn selection() -> impl Strategy<Value = FilterSelection> {
    (
        prop::sample::subsequence(&COUNTRIES[..], 0..=COUNTRIES.len()),
        prop::collection::btree_set(2017i64..2025, 0..6),
        prop::sample::subsequence(&CATEGORIES[..], 0..=CATEGORIES.len()),
    )
        .prop_map(|(countries, years, categories)| FilterSelection::new(countries, years, categories))
}

proptest! {
    #[test]
    fn filtered_view_is_ordered_subsequence_of_matches(ds in dataset(), sel in selection()) {
        let view = filter(&ds, &sel);

        // Every kept record matches all three sets.
        prop_assert!(view.iter().all(|r| sel.matches(r)));

        // Order preserved and nothing matching is dropped.
        let expected: Vec<&Record> = ds.records().iter().filter(|r| sel.matches(r)).collect();
        prop_assert_eq!(view.records(), expected.as_slice());
    }

    #[test]
    fn filtering_is_idempotent(ds in dataset(), sel in selection()) {
        prop_assert_eq!(filter(&ds, &sel), filter(&ds, &sel));
    }

    #[test]
    fn full_selection_returns_dataset(ds in dataset()) {
        let view = filter(&ds, &FilterSelection::all(&ds));
        let all: Vec<&Record> = ds.records().iter().collect();
        prop_assert_eq!(view.records(), all.as_slice());
    }

    #[test]
    fn empty_dimension_empties_view(ds in dataset(), which in 0usize..3) {
        let full = FilterSelection::all(&ds);
        let sel = match which {
            0 => full.with_countries(Vec::<String>::new()),
            1 => full.with_years(Vec::<i64>::new()),
            _ => full.with_categories(Vec::<String>::new()),
        };
        prop_assert!(filter(&ds, &sel).is_empty());
    }

    #[test]
    fn full_selection_total_matches_dataset_sum(ds in dataset()) {
        let agg = Aggregator::compute(&filter(&ds, &FilterSelection::all(&ds)));
        let expected: f64 = ds.records().iter().map(|r| r.total_waste_tons).sum();
        prop_assert_eq!(agg.total_waste, expected);
    }

    #[test]
    fn grouped_sums_partition_totals(ds in dataset(), sel in selection()) {
        let agg = Aggregator::compute(&filter(&ds, &sel));

        // Integer-valued inputs keep these sums exact.
        prop_assert_eq!(agg.by_country.values().sum::<f64>(), agg.total_waste);
        prop_assert_eq!(agg.by_year.values().sum::<f64>(), agg.total_waste);
        prop_assert_eq!(agg.by_category_spend.values().sum::<f64>(), agg.economic_loss);
    }

    #[test]
    fn top_country_holds_maximum_and_smallest_name_on_ties(ds in dataset(), sel in selection()) {
        let agg = Aggregator::compute(&filter(&ds, &sel));
        match &agg.top_waste_country {
            None => prop_assert_eq!(agg.record_count, 0),
            Some(top) => {
                let top_value = agg.by_country[top];
                let leaders: BTreeSet<&String> = agg
                    .by_country
                    .iter()
                    .filter(|(_, v)| **v == top_value)
                    .map(|(k, _)| k)
                    .collect();
                prop_assert!(agg.by_country.values().all(|v| *v <= top_value));
                prop_assert_eq!(leaders.iter().next().copied(), Some(top));
            }
        }
    }

    #[test]
    fn means_are_defined_only_for_non_empty_views(ds in dataset(), sel in selection()) {
        let agg = Aggregator::compute(&filter(&ds, &sel));
        prop_assert_eq!(agg.avg_per_capita.is_some(), agg.record_count > 0);
        prop_assert_eq!(agg.avg_household.is_some(), agg.record_count > 0);
        if let Some(h) = agg.avg_household {
            prop_assert!((-1e-9..=100.0 + 1e-9).contains(&h));
        }
    }
}
