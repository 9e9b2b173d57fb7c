use crate::data::ContentRecord;
use std::time::Instant;
use tracing::debug;

pub fn released_in(records: &[ContentRecord], year: i32) -> Vec<&ContentRecord> {
    let start = Instant::now();

    let res: Vec<&ContentRecord> = records
        .iter()
        .filter(|record| record.release_year == year)
        .collect();

    debug!(query = "q3", year, elapsed = ?start.elapsed(), rows = res.len());

    res
}
