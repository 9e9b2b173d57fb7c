use crate::data::{ContentRecord, ContentType};
use crate::ops::group_count;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub total: usize,
}

pub fn type_distribution(records: &[ContentRecord]) -> Vec<TypeCount> {
    let start = Instant::now();

    let mut res: Vec<TypeCount> =
        group_count(records, |record: &ContentRecord| record.content_type)
            .into_iter()
            .map(|(content_type, total)| TypeCount {
                content_type,
                total,
            })
            .collect();
    res.sort_by_key(|row| row.content_type);

    debug!(query = "q1", elapsed = ?start.elapsed(), rows = res.len());

    res
}
