//! Building blocks shared by the queries: comma-list explosion, grouping,
//! ranking and the fallible casts the queries apply to text columns.

use crate::data::{ContentRecord, Field};
use chrono::NaiveDate;
use rustc_hash::FxHashMap as HashMap;
use std::hash::Hash;
use tracing::warn;

/// Splits a comma-separated value into trimmed elements, left to right.
/// Absent input and empty elements yield nothing; repeated elements are kept.
pub fn explode<'a>(value: Option<&'a str>) -> impl Iterator<Item = &'a str> {
    value
        .into_iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|element| !element.is_empty())
}

/// One `(element, record)` pair per exploded element of `field`.
pub fn explode_records<'a>(
    records: &'a [ContentRecord],
    field: Field,
) -> impl Iterator<Item = (&'a str, &'a ContentRecord)> {
    records
        .iter()
        .flat_map(move |record| record.explode(field).map(move |value| (value, record)))
}

pub fn group_count<T, K, I, F>(items: I, mut key: F) -> HashMap<K, usize>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> K,
    K: Eq + Hash,
{
    items.into_iter().fold(HashMap::default(), |mut acc, item| {
        *acc.entry(key(item)).or_default() += 1;
        acc
    })
}

/// Count descending, key ascending among equal counts.
pub fn sorted_counts<K: Ord>(counts: HashMap<K, usize>) -> Vec<(K, usize)> {
    let mut rows: Vec<(K, usize)> = counts.into_iter().collect();
    rows.sort_by(|(ka, ca), (kb, cb)| cb.cmp(ca).then_with(|| ka.cmp(kb)));
    rows
}

pub fn top_n<K: Ord>(counts: HashMap<K, usize>, n: usize) -> Vec<(K, usize)> {
    let mut rows = sorted_counts(counts);
    rows.truncate(n);
    rows
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked<P, K> {
    pub partition: P,
    pub key: K,
    pub total: usize,
    pub rank: usize,
}

/// `RANK() OVER (PARTITION BY p ORDER BY count DESC)`: rows are partitioned
/// first, then ranked inside each partition. Equal counts share a rank and the
/// next distinct count skips ahead by the size of the tie.
pub fn rank_within<P, K>(counts: HashMap<(P, K), usize>) -> Vec<Ranked<P, K>>
where
    P: Ord + Clone,
    K: Ord,
{
    let mut rows: Vec<((P, K), usize)> = counts.into_iter().collect();
    rows.sort_by(|((pa, ka), ca), ((pb, kb), cb)| {
        pa.cmp(pb).then_with(|| cb.cmp(ca)).then_with(|| ka.cmp(kb))
    });

    let mut ranked = Vec::with_capacity(rows.len());
    let mut previous: Option<(P, usize)> = None;
    let mut position = 0;
    let mut rank = 0;

    for ((partition, key), total) in rows {
        match &previous {
            Some((p, count)) if *p == partition => {
                position += 1;
                if *count != total {
                    rank = position;
                }
            }
            _ => {
                position = 1;
                rank = 1;
            }
        }
        previous = Some((partition.clone(), total));
        ranked.push(Ranked {
            partition,
            key,
            total,
            rank,
        });
    }

    ranked
}

/// `ROUND(part / whole * 100, 2)` on the exact fraction, halves rounded
/// away from zero; an empty denominator gives 0.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let (part, whole) = (part as u128, whole as u128);
    let hundredths = (part * 20_000 + whole) / (2 * whole);
    hundredths as f64 / 100.0
}

/// The first whitespace-delimited token of `90 min` / `3 Seasons` as a number.
pub fn leading_int(value: &str) -> Option<u32> {
    value.split_whitespace().next()?.parse().ok()
}

/// Numeric prefix of `duration`. A record with a malformed duration is
/// skipped with a warning; an absent duration is skipped silently.
pub fn duration_value(record: &ContentRecord) -> Option<u32> {
    let raw = record.duration.as_deref()?;
    let value = leading_int(raw);
    if value.is_none() {
        warn!(show_id = %record.id, duration = raw, "skipping record with unparseable duration");
    }
    value
}

const DATE_FORMATS: [&str; 2] = ["%B %d, %Y", "%Y-%m-%d"];

/// Parses `September 25, 2021` (full or abbreviated month, surrounding
/// whitespace allowed) and ISO `2021-09-25`.
pub fn parse_date_added(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}
