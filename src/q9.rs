use crate::data::{ContentRecord, Field};
use crate::ops::{explode_records, group_count, sorted_counts};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub genre: String,
    pub total: usize,
}

pub fn genre_counts(records: &[ContentRecord]) -> Vec<GenreCount> {
    let start = Instant::now();

    let counts = group_count(
        explode_records(records, Field::Genres),
        |(genre, _): (&str, &ContentRecord)| genre,
    );

    let res: Vec<GenreCount> = sorted_counts(counts)
        .into_iter()
        .map(|(genre, total)| GenreCount {
            genre: genre.to_owned(),
            total,
        })
        .collect();

    debug!(query = "q9", elapsed = ?start.elapsed(), rows = res.len());

    res
}

// 9. Count the number of content items in each genre
// SELECT UNNEST(STRING_TO_ARRAY(listed_in, ',')) AS genre,
//        COUNT(*) AS total_content
// FROM netflix
// GROUP BY 1;
#[cfg(test)]
mod test_q9 {
    use super::*;
    use crate::data::ContentType;

    fn listed(id: &str, genres: &str) -> ContentRecord {
        ContentRecord {
            genres: genres.to_owned(),
            ..ContentRecord::new(id, ContentType::Movie, id, 2020)
        }
    }

    #[test]
    fn test_genre_counts() {
        let records = vec![
            listed("s1", "Documentaries"),
            listed("s2", "International TV Shows, TV Dramas, TV Mysteries"),
            listed("s3", "Dramas, International Movies"),
            listed("s4", "Dramas,International Movies"),
            listed("s5", ""),
        ];
        let rows: Vec<(String, usize)> = genre_counts(&records)
            .into_iter()
            .map(|row| (row.genre, row.total))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Dramas".to_string(), 2),
                ("International Movies".to_string(), 2),
                ("Documentaries".to_string(), 1),
                ("International TV Shows".to_string(), 1),
                ("TV Dramas".to_string(), 1),
                ("TV Mysteries".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_empty() {
        assert!(genre_counts(&[]).is_empty());
    }
}
