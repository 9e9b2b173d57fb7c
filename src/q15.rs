use crate::data::{ContentRecord, ContentType};
use crate::ops::group_count;
use memchr::memmem::Finder;
use serde::Serialize;
use std::fmt;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Bad,
    Good,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bad => "Bad",
            Category::Good => "Good",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub total: usize,
}

struct Classifier {
    kill: Finder<'static>,
    violence: Finder<'static>,
}

impl Classifier {
    fn new() -> Self {
        Classifier {
            kill: Finder::new("kill"),
            violence: Finder::new("violence"),
        }
    }

    /// `Bad` when the description mentions kill or violence in any case.
    fn classify(&self, description: Option<&str>) -> Category {
        let Some(description) = description else {
            return Category::Good;
        };
        let lowered = description.to_lowercase();
        if self.kill.find(lowered.as_bytes()).is_some()
            || self.violence.find(lowered.as_bytes()).is_some()
        {
            Category::Bad
        } else {
            Category::Good
        }
    }
}

pub fn classify(description: Option<&str>) -> Category {
    Classifier::new().classify(description)
}

pub fn content_categories(records: &[ContentRecord]) -> Vec<CategoryCount> {
    let start = Instant::now();

    let classifier = Classifier::new();
    let mut res: Vec<CategoryCount> = group_count(records, |record: &ContentRecord| {
        (
            record.content_type,
            classifier.classify(record.description.as_deref()),
        )
    })
    .into_iter()
    .map(|((content_type, category), total)| CategoryCount {
        category,
        content_type,
        total,
    })
    .collect();
    res.sort_by_key(|row| (row.content_type, row.category));

    debug!(query = "q15", elapsed = ?start.elapsed(), rows = res.len());

    res
}
