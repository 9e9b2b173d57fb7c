use crate::data::ContentRecord;
use memchr::memmem::Finder;
use std::time::Instant;
use tracing::debug;

pub fn documentaries(records: &[ContentRecord]) -> Vec<&ContentRecord> {
    let start = Instant::now();

    let finder = Finder::new("Documentaries");
    let res: Vec<&ContentRecord> = records
        .iter()
        .filter(|record| finder.find(record.genres.as_bytes()).is_some())
        .collect();

    debug!(query = "q11", elapsed = ?start.elapsed(), rows = res.len());

    res
}

// 11. List all movies that are documentaries
// SELECT *
// FROM netflix
// WHERE listed_in LIKE '%Documentaries%';
#[cfg(test)]
mod test_q11 {
    use super::*;
    use crate::data::ContentType;

    fn listed(id: &str, genres: &str) -> ContentRecord {
        ContentRecord {
            genres: genres.to_owned(),
            ..ContentRecord::new(id, ContentType::Movie, id, 2020)
        }
    }

    #[test]
    fn test_documentaries() {
        let records = vec![
            listed("s1", "Documentaries"),
            listed("s2", "Documentaries, International Movies"),
            listed("s3", "Docuseries, Science & Nature TV"),
            listed("s4", "documentaries"),
            listed("s5", "Dramas, Documentaries"),
        ];
        let ids: Vec<&str> = documentaries(&records)
            .into_iter()
            .map(|record| record.id.as_str())
            .collect();
        assert_eq!(ids, vec!["s1", "s2", "s5"]);
    }

    #[test]
    fn test_empty() {
        assert!(documentaries(&[]).is_empty());
    }
}
