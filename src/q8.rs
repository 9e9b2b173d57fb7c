use crate::data::{ContentRecord, ContentType};
use crate::ops::duration_value;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowSeasons<'a> {
    #[serde(flatten)]
    pub record: &'a ContentRecord,
    pub seasons: u32,
}

pub fn long_running_shows(records: &[ContentRecord], min_seasons: u32) -> Vec<ShowSeasons<'_>> {
    let start = Instant::now();

    let res: Vec<ShowSeasons> = records
        .iter()
        .filter(|record| record.content_type == ContentType::TvShow)
        .filter_map(|record| {
            duration_value(record)
                .filter(|&seasons| seasons > min_seasons)
                .map(|seasons| ShowSeasons { record, seasons })
        })
        .collect();

    debug!(query = "q8", min_seasons, elapsed = ?start.elapsed(), rows = res.len());

    res
}

// 8. List all TV shows with more than 5 seasons
// SELECT *
// FROM netflix
// WHERE type = 'TV Show'
//   AND SPLIT_PART(duration, ' ', 1)::INT > 5;
#[cfg(test)]
mod test_q8 {
    use super::*;

    fn show(id: &str, duration: &str) -> ContentRecord {
        ContentRecord {
            duration: Some(duration.to_owned()),
            ..ContentRecord::new(id, ContentType::TvShow, id, 2020)
        }
    }

    #[test]
    fn test_long_running_shows() {
        let records = vec![
            show("s1", "5 Seasons"),
            show("s2", "6 Seasons"),
            show("s3", "1 Season"),
            show("s4", "Seasons"),
            ContentRecord {
                duration: Some("148 min".to_owned()),
                ..ContentRecord::new("s5", ContentType::Movie, "s5", 2020)
            },
            show("s6", "17 Seasons"),
        ];
        let res = long_running_shows(&records, 5);
        let rows: Vec<(&str, u32)> = res
            .iter()
            .map(|row| (row.record.id.as_str(), row.seasons))
            .collect();
        assert_eq!(rows, vec![("s2", 6), ("s6", 17)]);
    }

    #[test]
    fn test_empty() {
        assert!(long_running_shows(&[], 5).is_empty());
    }
}
