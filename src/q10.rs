use crate::data::ContentRecord;
use crate::ops::{group_count, percentage};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearShare {
    pub country: String,
    pub release_year: i32,
    pub total: usize,
    pub share: f64,
}

/// Each release year's share of the content whose `country` is exactly
/// `country`. The denominator counts that country's records over all years.
pub fn yearly_share(records: &[ContentRecord], country: &str, n: usize) -> Vec<YearShare> {
    let start = Instant::now();

    let matching: Vec<&ContentRecord> = records
        .iter()
        .filter(|record| record.country.as_deref() == Some(country))
        .collect();
    let whole = matching.len();

    let mut res: Vec<YearShare> = group_count(&matching, |record: &&ContentRecord| {
        record.release_year
    })
    .into_iter()
    .map(|(release_year, total)| YearShare {
        country: country.to_owned(),
        release_year,
        total,
        share: percentage(total, whole),
    })
    .collect();
    // Shares share a denominator, so ordering by count orders by share exactly.
    res.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| b.release_year.cmp(&a.release_year))
    });
    res.truncate(n);

    debug!(query = "q10", country, elapsed = ?start.elapsed(), rows = res.len());

    res
}
