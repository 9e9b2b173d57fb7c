use crate::data::ContentRecord;
use memchr::memmem::Finder;
use std::time::Instant;
use tracing::debug;

/// Titles whose cast mentions `actor`, released within the `years` years
/// before `current_year` (strictly after `current_year - years`).
pub fn actor_recent_titles<'a>(
    records: &'a [ContentRecord],
    actor: &str,
    years: i32,
    current_year: i32,
) -> Vec<&'a ContentRecord> {
    let start = Instant::now();

    let finder = Finder::new(actor);
    let earliest = current_year.saturating_sub(years);
    let res: Vec<&ContentRecord> = records
        .iter()
        .filter(|record| {
            record
                .cast
                .as_deref()
                .is_some_and(|cast| finder.find(cast.as_bytes()).is_some())
        })
        .filter(|record| record.release_year > earliest)
        .collect();

    debug!(query = "q13", actor, earliest, elapsed = ?start.elapsed(), rows = res.len());

    res
}

// 13. Find how many movies actor 'Salman Khan' appeared in the last 10 years
// SELECT *
// FROM netflix
// WHERE "cast" LIKE '%Salman Khan%'
//   AND release_year > EXTRACT(YEAR FROM CURRENT_DATE) - 10;
#[cfg(test)]
mod test_q13 {
    use super::*;
    use crate::data::ContentType;

    fn starring(id: &str, cast: Option<&str>, year: i32) -> ContentRecord {
        ContentRecord {
            cast: cast.map(str::to_owned),
            ..ContentRecord::new(id, ContentType::Movie, id, year)
        }
    }

    #[test]
    fn test_actor_recent_titles() {
        let records = vec![
            starring("s1", Some("Salman Khan, Katrina Kaif"), 2017),
            starring("s2", Some("Salman Khan"), 2014),
            starring("s3", Some("Salman Khan"), 2015),
            starring("s4", Some("Shah Rukh Khan"), 2019),
            starring("s5", None, 2020),
            starring("s6", Some("Sonakshi Sinha, Salman Khan"), 2024),
        ];
        let ids: Vec<&str> = actor_recent_titles(&records, "Salman Khan", 10, 2024)
            .into_iter()
            .map(|record| record.id.as_str())
            .collect();
        assert_eq!(ids, vec!["s1", "s3", "s6"]);
    }

    #[test]
    fn test_case_sensitive() {
        let records = vec![starring("s1", Some("salman khan"), 2020)];
        assert!(actor_recent_titles(&records, "Salman Khan", 10, 2024).is_empty());
    }

    #[test]
    fn test_empty() {
        assert!(actor_recent_titles(&[], "Salman Khan", 10, 2024).is_empty());
    }
}
