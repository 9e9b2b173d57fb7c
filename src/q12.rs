use crate::data::ContentRecord;
use std::time::Instant;
use tracing::debug;

pub fn without_director(records: &[ContentRecord]) -> Vec<&ContentRecord> {
    let start = Instant::now();

    let res: Vec<&ContentRecord> = records
        .iter()
        .filter(|record| {
            record
                .director
                .as_deref()
                .is_none_or(|director| director.trim().is_empty())
        })
        .collect();

    debug!(query = "q12", elapsed = ?start.elapsed(), rows = res.len());

    res
}
