//! Filter Engine
//! Set-membership filtering over Country, Year and Food Category.

use crate::data::record::{Dataset, Record};
use std::collections::BTreeSet;

/// Allowed values per filterable dimension.
///
/// A record passes when its country, year and category are all members of
/// their respective sets (AND across dimensions, OR within each one).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub countries: BTreeSet<String>,
    pub years: BTreeSet<i64>,
    pub categories: BTreeSet<String>,
}

impl FilterSelection {
    /// Every distinct value of every dimension; the default dashboard state.
    pub fn all(dataset: &Dataset) -> Self {
        Self {
            countries: dataset.countries().into_iter().collect(),
            years: dataset.years().into_iter().collect(),
            categories: dataset.categories().into_iter().collect(),
        }
    }

    /// Nothing selected in any dimension.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new<C, Y, K>(countries: C, years: Y, categories: K) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        Y: IntoIterator<Item = i64>,
        K: IntoIterator,
        K::Item: Into<String>,
    {
        Self {
            countries: countries.into_iter().map(Into::into).collect(),
            years: years.into_iter().collect(),
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_years<I: IntoIterator<Item = i64>>(mut self, years: I) -> Self {
        self.years = years.into_iter().collect();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.countries.contains(&record.country)
            && self.years.contains(&record.year)
            && self.categories.contains(&record.food_category)
    }
}

/// Read-only, order-preserving subsequence of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    records: Vec<&'a Record>,
}

impl<'a> FilteredView<'a> {
    pub fn new(records: Vec<&'a Record>) -> Self {
        Self { records }
    }

    /// View over the rows at `indices`; out-of-range indices are skipped.
    pub fn from_indices(dataset: &'a Dataset, indices: &[usize]) -> Self {
        let records = dataset.records();
        Self::new(indices.iter().filter_map(|&i| records.get(i)).collect())
    }

    /// The whole dataset as a view.
    pub fn unfiltered(dataset: &'a Dataset) -> Self {
        Self::new(dataset.records().iter().collect())
    }

    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Select the records of `dataset` matching `selection`, in dataset order.
///
/// Values in the selection that never occur in the dataset simply match nothing.
pub fn filter<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> FilteredView<'a> {
    FilteredView::new(
        dataset
            .records()
            .iter()
            .filter(|record| selection.matches(record))
            .collect(),
    )
}

/// Row positions of the records `filter` would return, ascending.
pub fn filter_indices(dataset: &Dataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| selection.matches(record))
        .map(|(i, _)| i)
        .collect()
}
