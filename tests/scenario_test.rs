//! End-to-end filter and aggregate scenarios on the three-row reference dataset.

use food_waste_dashboard::charts::ChartData;
use food_waste_dashboard::data::{filter, Dataset, FilterSelection, FilteredView, Record};
use food_waste_dashboard::stats::{format, Aggregator, Insights};
use std::collections::BTreeMap;

fn dataset() -> Dataset {
    Dataset::new(vec![
        Record::new("USA", 2020, "Fruit", 100.0, 10.0, 5.0, 20.0),
        Record::new("USA", 2021, "Fruit", 200.0, 20.0, 6.0, 25.0),
        Record::new("India", 2020, "Grain", 150.0, 5.0, 3.0, 15.0),
    ])
}

#[test]
fn usa_only() {
    let ds = dataset();
    let sel = FilterSelection::all(&ds).with_countries(["USA"]);
    let agg = Aggregator::compute(&filter(&ds, &sel));

    assert_eq!(agg.record_count, 2);
    assert_eq!(agg.total_waste, 300.0);
    assert_eq!(agg.by_country, BTreeMap::from([("USA".to_string(), 300.0)]));
    assert_eq!(agg.top_waste_country.as_deref(), Some("USA"));
    assert_eq!(agg.by_year, BTreeMap::from([(2020, 100.0), (2021, 200.0)]));
}

#[test]
fn year_2020_spans_both_countries() {
    let ds = dataset();
    let sel = FilterSelection::all(&ds).with_years([2020]);
    let view = filter(&ds, &sel);
    let agg = Aggregator::compute(&view);

    assert_eq!(view.len(), 2);
    assert_eq!(
        agg.by_country,
        BTreeMap::from([("USA".to_string(), 100.0), ("India".to_string(), 150.0)])
    );
    assert_eq!(agg.top_waste_country.as_deref(), Some("India"));
    assert_eq!(agg.top_loss_category.as_deref(), Some("Fruit"));
}

#[test]
fn cleared_filter_degrades_to_empty_dashboard() {
    let ds = dataset();
    let sel = FilterSelection::all(&ds).with_categories(Vec::<String>::new());
    let agg = Aggregator::compute(&filter(&ds, &sel));

    let tiles = format::kpi_tiles(&agg);
    assert_eq!(tiles[0].1, "0.00 M Tons");
    assert_eq!(tiles[2].1, "N/A");
    assert_eq!(agg.top_waste_country_label(), "N/A");
    assert!(ChartData::from_aggregates(&agg).is_empty());

    let insights = Insights::from_aggregates(&agg);
    assert_eq!(insights.top_country, "N/A");
}

#[test]
fn full_selection_sums_whole_dataset() {
    let ds = dataset();
    let agg = Aggregator::compute(&filter(&ds, &FilterSelection::all(&ds)));
    let direct = Aggregator::compute(&FilteredView::unfiltered(&ds));

    assert_eq!(agg, direct);
    assert_eq!(agg.total_waste, 450.0);
    assert_eq!(format::economic_loss(agg.economic_loss), "$35 M");
}
