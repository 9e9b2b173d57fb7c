use crate::data::{ContentRecord, ContentType};
use crate::ops::duration_value;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieLength<'a> {
    #[serde(flatten)]
    pub record: &'a ContentRecord,
    pub minutes: u32,
}

/// All movies with a parseable duration, longest first. Equal lengths keep
/// their input order, so the head of the list is the longest movie.
pub fn longest_movies(records: &[ContentRecord]) -> Vec<MovieLength<'_>> {
    let start = Instant::now();

    let mut res: Vec<MovieLength> = records
        .iter()
        .filter(|record| record.content_type == ContentType::Movie)
        .filter_map(|record| {
            duration_value(record).map(|minutes| MovieLength { record, minutes })
        })
        .collect();
    res.sort_by(|a, b| b.minutes.cmp(&a.minutes));

    debug!(query = "q5", elapsed = ?start.elapsed(), rows = res.len());

    res
}
