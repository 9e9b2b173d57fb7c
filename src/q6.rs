use crate::data::ContentRecord;
use crate::ops::parse_date_added;
use chrono::{Months, NaiveDate};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddedTitle<'a> {
    #[serde(flatten)]
    pub record: &'a ContentRecord,
    #[serde(rename = "added_on")]
    pub added: NaiveDate,
}

/// Titles added on or after `today - years`. Rows whose `date_added` does
/// not parse are left out rather than failing the query.
pub fn recently_added(
    records: &[ContentRecord],
    today: NaiveDate,
    years: u32,
) -> Vec<AddedTitle<'_>> {
    let start = Instant::now();

    let cutoff = today
        .checked_sub_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN);

    let mut skipped = 0usize;
    let res: Vec<AddedTitle> = records
        .iter()
        .filter_map(|record| {
            let raw = record.date_added.as_deref()?;
            match parse_date_added(raw) {
                Some(added) => Some(AddedTitle { record, added }),
                None => {
                    skipped += 1;
                    debug!(show_id = %record.id, date_added = raw, "unparseable date_added");
                    None
                }
            }
        })
        .filter(|row| row.added >= cutoff)
        .collect();

    if skipped > 0 {
        info!(query = "q6", skipped, "excluded titles with unparseable date_added");
    }
    debug!(query = "q6", %cutoff, elapsed = ?start.elapsed(), rows = res.len());

    res
}
