use crate::data::{ContentRecord, Field};
use crate::ops::{group_count, top_n};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorCount {
    pub actor: String,
    pub total: usize,
}

/// The `n` actors appearing most often in records whose `country` is
/// exactly `country`.
pub fn top_actors(records: &[ContentRecord], country: &str, n: usize) -> Vec<ActorCount> {
    let start = Instant::now();

    let counts = group_count(
        records
            .iter()
            .filter(|record| record.country.as_deref() == Some(country))
            .flat_map(|record| record.explode(Field::Cast)),
        |actor: &str| actor,
    );

    let res: Vec<ActorCount> = top_n(counts, n)
        .into_iter()
        .map(|(actor, total)| ActorCount {
            actor: actor.to_owned(),
            total,
        })
        .collect();

    debug!(query = "q14", country, elapsed = ?start.elapsed(), rows = res.len());

    res
}

// 14. Find the top 10 actors who have appeared in the highest number of movies
//     produced in India
// SELECT UNNEST(STRING_TO_ARRAY("cast", ',')) AS actor,
//        COUNT(*)
// FROM netflix
// WHERE country = 'India'
// GROUP BY 1
// ORDER BY 2 DESC
// LIMIT 10;
#[cfg(test)]
mod test_q14 {
    use super::*;
    use crate::data::ContentType;

    fn cast_in(id: &str, country: &str, cast: &str) -> ContentRecord {
        ContentRecord {
            country: Some(country.to_owned()),
            cast: Some(cast.to_owned()),
            ..ContentRecord::new(id, ContentType::Movie, id, 2020)
        }
    }

    #[test]
    fn test_top_actors() {
        let records = vec![
            cast_in("s1", "India", "Anupam Kher, Shah Rukh Khan"),
            cast_in("s2", "India", "Anupam Kher,Naseeruddin Shah"),
            cast_in("s3", "India", " Anupam Kher , Om Puri"),
            cast_in("s4", "United States", "Anupam Kher, Tom Hanks"),
            cast_in("s5", "India, United Kingdom", "Om Puri"),
            cast_in("s6", "India", "Shah Rukh Khan"),
        ];
        let rows: Vec<(String, usize)> = top_actors(&records, "India", 3)
            .into_iter()
            .map(|row| (row.actor, row.total))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Anupam Kher".to_string(), 3),
                ("Shah Rukh Khan".to_string(), 2),
                ("Naseeruddin Shah".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_empty() {
        assert!(top_actors(&[], "India", 10).is_empty());
    }
}
