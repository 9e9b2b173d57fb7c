use crate::data::{ContentRecord, Field};
use std::time::Instant;
use tracing::debug;

/// Records with `name` among their directors, each record once.
pub fn directed_by<'a>(records: &'a [ContentRecord], name: &str) -> Vec<&'a ContentRecord> {
    let start = Instant::now();

    let res: Vec<&ContentRecord> = records
        .iter()
        .filter(|record| record.explode(Field::Director).any(|director| director == name))
        .collect();

    debug!(query = "q7", director = name, elapsed = ?start.elapsed(), rows = res.len());

    res
}

// 7. Find all the movies/TV shows by director 'Rajiv Chilaka'
// SELECT *
// FROM (SELECT *,
//              UNNEST(STRING_TO_ARRAY(director, ',')) AS director_name
//       FROM netflix) AS t
// WHERE director_name = 'Rajiv Chilaka';
#[cfg(test)]
mod test_q7 {
    use super::*;
    use crate::data::ContentType;

    fn directed(id: &str, director: Option<&str>) -> ContentRecord {
        ContentRecord {
            director: director.map(str::to_owned),
            ..ContentRecord::new(id, ContentType::Movie, id, 2020)
        }
    }

    #[test]
    fn test_directed_by() {
        let records = vec![
            directed("s1", Some("Rajiv Chilaka")),
            directed("s2", Some("Jan Suter, Raúl Campos")),
            directed("s3", Some("Rajiv Chilaka, Rajiv Chilaka")),
            directed("s4", None),
            directed("s5", Some("Prakash Satam,  Rajiv Chilaka ")),
            directed("s6", Some("Rajiv Chilakam")),
        ];
        let ids: Vec<&str> = directed_by(&records, "Rajiv Chilaka")
            .into_iter()
            .map(|record| record.id.as_str())
            .collect();
        assert_eq!(ids, vec!["s1", "s3", "s5"]);
    }

    #[test]
    fn test_empty() {
        assert!(directed_by(&[], "Rajiv Chilaka").is_empty());
    }
}
