use crate::data::{ContentRecord, Field};
use crate::ops::{explode_records, group_count, top_n};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub total: usize,
}

pub fn top_countries(records: &[ContentRecord], n: usize) -> Vec<CountryCount> {
    let start = Instant::now();

    let counts = group_count(
        explode_records(records, Field::Country),
        |(country, _): (&str, &ContentRecord)| country,
    );

    let res: Vec<CountryCount> = top_n(counts, n)
        .into_iter()
        .map(|(country, total)| CountryCount {
            country: country.to_owned(),
            total,
        })
        .collect();

    debug!(query = "q4", elapsed = ?start.elapsed(), rows = res.len());

    res
}

// 4. Find the top 5 countries with the most content on Netflix
// SELECT *
// FROM (SELECT UNNEST(STRING_TO_ARRAY(country, ',')) AS country,
//              COUNT(*) AS total_content
//       FROM netflix
//       GROUP BY 1) AS t1
// WHERE country IS NOT NULL
// ORDER BY total_content DESC
// LIMIT 5;
#[cfg(test)]
mod test_q4 {
    use super::*;
    use crate::data::ContentType;

    fn made_in(id: &str, country: Option<&str>) -> ContentRecord {
        ContentRecord {
            country: country.map(str::to_owned),
            ..ContentRecord::new(id, ContentType::Movie, id, 2020)
        }
    }

    #[test]
    fn test_top_countries() {
        let records = vec![
            made_in("s1", Some("United States, India")),
            made_in("s2", Some("India ,United Kingdom")),
            made_in("s3", Some("India")),
            made_in("s4", None),
            made_in("s5", Some("United States")),
            made_in("s6", Some("Japan")),
            made_in("s7", Some("France, Canada")),
        ];
        let res = top_countries(&records, 5);
        let rows: Vec<(&str, usize)> = res
            .iter()
            .map(|row| (row.country.as_str(), row.total))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("India", 3),
                ("United States", 2),
                ("Canada", 1),
                ("France", 1),
                ("Japan", 1),
            ]
        );
    }

    #[test]
    fn test_empty() {
        assert!(top_countries(&[], 5).is_empty());
        assert!(top_countries(&[made_in("s1", None)], 5).is_empty());
    }
}
