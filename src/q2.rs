use crate::data::{ContentRecord, ContentType};
use crate::ops::{group_count, rank_within};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

/// A rank-1 rating of one type. Unrated records never produce a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingRank {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub rating: String,
    pub total: usize,
    pub rank: usize,
}

/// Every rating tied for the highest count within its type. Records without
/// a rating do not form a group.
pub fn top_rating_per_type(records: &[ContentRecord]) -> Vec<RatingRank> {
    let start = Instant::now();

    let counts = group_count(
        records.iter().filter_map(|record| {
            record
                .rating
                .as_deref()
                .map(|rating| (record.content_type, rating))
        }),
        |key| key,
    );

    let res: Vec<RatingRank> = rank_within(counts)
        .into_iter()
        .filter(|ranked| ranked.rank == 1)
        .map(|ranked| RatingRank {
            content_type: ranked.partition,
            rating: ranked.key.to_owned(),
            total: ranked.total,
            rank: ranked.rank,
        })
        .collect();

    debug!(query = "q2", elapsed = ?start.elapsed(), rows = res.len());

    res
}

// 2. Find the most common rating for movies and TV shows
// SELECT type,
//        rating
// FROM (SELECT type,
//              rating,
//              COUNT(*),
//              RANK() OVER (PARTITION BY type ORDER BY COUNT(*) DESC) AS ranking
//       FROM netflix
//       GROUP BY 1, 2) AS t1
// WHERE ranking = 1;
#[cfg(test)]
mod test_q2 {
    use super::*;

    fn rated(id: &str, content_type: ContentType, rating: Option<&str>) -> ContentRecord {
        ContentRecord {
            rating: rating.map(str::to_owned),
            ..ContentRecord::new(id, content_type, id, 2020)
        }
    }

    #[test]
    fn test_top_rating_per_type() {
        let records = vec![
            rated("s1", ContentType::Movie, Some("PG-13")),
            rated("s2", ContentType::Movie, Some("TV-MA")),
            rated("s3", ContentType::Movie, Some("TV-MA")),
            rated("s4", ContentType::TvShow, Some("TV-14")),
            rated("s5", ContentType::TvShow, None),
            rated("s6", ContentType::TvShow, None),
        ];
        let res = top_rating_per_type(&records);
        assert_eq!(
            res,
            vec![
                RatingRank {
                    content_type: ContentType::Movie,
                    rating: "TV-MA".to_string(),
                    total: 2,
                    rank: 1
                },
                RatingRank {
                    content_type: ContentType::TvShow,
                    rating: "TV-14".to_string(),
                    total: 1,
                    rank: 1
                },
            ]
        );
    }

    #[test]
    fn test_ties_are_kept() {
        let records = vec![
            rated("s1", ContentType::Movie, Some("R")),
            rated("s2", ContentType::Movie, Some("PG")),
            rated("s3", ContentType::Movie, Some("PG")),
            rated("s4", ContentType::Movie, Some("R")),
            rated("s5", ContentType::Movie, Some("G")),
        ];
        let ratings: Vec<String> = top_rating_per_type(&records)
            .into_iter()
            .map(|row| row.rating)
            .collect();
        assert_eq!(ratings, vec!["PG", "R"]);
    }

    #[test]
    fn test_unrated_never_outranks() {
        let records = vec![
            rated("s1", ContentType::TvShow, None),
            rated("s2", ContentType::TvShow, None),
            rated("s3", ContentType::TvShow, None),
            rated("s4", ContentType::TvShow, Some("TV-Y7")),
        ];
        let res = top_rating_per_type(&records);
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].rating, "TV-Y7");
        assert_eq!(res[0].total, 1);

        let unrated = vec![rated("s1", ContentType::Movie, None)];
        assert!(top_rating_per_type(&unrated).is_empty());
    }

    #[test]
    fn test_empty() {
        assert!(top_rating_per_type(&[]).is_empty());
    }
}
