use crate::error::{LoadError, LoadResult};
use crate::ops;
use polars::prelude::*;
use rustc_hash::FxHashMap as HashMap;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::time::Instant;
use tracing::info;

// CREATE TABLE netflix (
//     show_id      VARCHAR(6) PRIMARY KEY,
//     type         VARCHAR(10),
//     title        VARCHAR(150),
//     director     VARCHAR(208),
//     cast         VARCHAR(1000),
//     country      VARCHAR(150),
//     date_added   VARCHAR(50),
//     release_year INT,
//     rating       VARCHAR(10),
//     duration     VARCHAR(15),
//     listed_in    VARCHAR(100),
//     description  VARCHAR(250)
// );

pub const COLUMNS: [&str; 12] = [
    "show_id",
    "type",
    "title",
    "director",
    "cast",
    "country",
    "date_added",
    "release_year",
    "rating",
    "duration",
    "listed_in",
    "description",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ContentType {
    Movie,
    #[serde(rename = "TV Show")]
    TvShow,
}

impl ContentType {
    /// Accepts the dataset spelling `TV Show` as well as `TVShow`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Movie" => Some(ContentType::Movie),
            "TV Show" | "TVShow" => Some(ContentType::TvShow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::TvShow => "TV Show",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comma-separated columns that can be exploded into one value per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Director,
    Cast,
    Country,
    Genres,
}

/// One catalog row. Optional text columns are trimmed at load time and
/// empty strings are stored as `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentRecord {
    #[serde(rename = "show_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<String>,
    pub release_year: i32,
    pub rating: Option<String>,
    pub duration: Option<String>,
    #[serde(rename = "listed_in")]
    pub genres: String,
    pub description: Option<String>,
}

impl ContentRecord {
    pub fn new(
        id: impl Into<String>,
        content_type: ContentType,
        title: impl Into<String>,
        release_year: i32,
    ) -> Self {
        ContentRecord {
            id: id.into(),
            content_type,
            title: title.into(),
            director: None,
            cast: None,
            country: None,
            date_added: None,
            release_year,
            rating: None,
            duration: None,
            genres: String::new(),
            description: None,
        }
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Director => self.director.as_deref(),
            Field::Cast => self.cast.as_deref(),
            Field::Country => self.country.as_deref(),
            Field::Genres => Some(self.genres.as_str()),
        }
    }

    pub fn explode(&self, field: Field) -> impl Iterator<Item = &str> {
        ops::explode(self.field(field))
    }
}

/// The raw table as read from disk, normalised to the column set above.
pub struct NetflixData {
    pub titles: DataFrame,
}

impl NetflixData {
    pub fn new(frame: DataFrame) -> PolarsResult<Self> {
        let exprs: Vec<Expr> = COLUMNS
            .iter()
            .map(|&name| {
                let dtype = if name == "release_year" {
                    DataType::Int32
                } else {
                    DataType::String
                };
                col(name).cast(dtype)
            })
            .collect();
        let titles = frame.lazy().select(exprs).collect()?;
        Ok(NetflixData { titles })
    }

    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let start = Instant::now();

        let frame = match path.extension().and_then(|ext| ext.to_str()) {
            Some("csv") => CsvReadOptions::default()
                .with_has_header(true)
                .with_infer_schema_length(None)
                .try_into_reader_with_file_path(Some(path.to_path_buf()))?
                .finish()?,
            Some("parquet") => ParquetReader::new(std::fs::File::open(path)?).finish()?,
            _ => {
                return Err(LoadError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let data = NetflixData::new(frame)?;
        info!(
            path = %path.display(),
            rows = data.titles.height(),
            elapsed = ?start.elapsed(),
            "loaded dataset"
        );
        Ok(data)
    }
}

/// Records keyed by `show_id`, in file order.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<ContentRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(records: Vec<ContentRecord>) -> LoadResult<Self> {
        let mut index = HashMap::default();
        index.reserve(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id.clone(), position).is_some() {
                return Err(LoadError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Catalog { records, index })
    }

    pub fn load(path: &Path) -> LoadResult<Self> {
        Catalog::from_frame(&NetflixData::from_path(path)?)
    }

    pub fn from_frame(data: &NetflixData) -> LoadResult<Self> {
        let df = &data.titles;

        let show_id = strings(df, "show_id")?;
        let kind = strings(df, "type")?;
        let title = strings(df, "title")?;
        let director = strings(df, "director")?;
        let cast = strings(df, "cast")?;
        let country = strings(df, "country")?;
        let date_added = strings(df, "date_added")?;
        let release_year: Vec<Option<i32>> =
            df.column("release_year")?.i32()?.into_iter().collect();
        let rating = strings(df, "rating")?;
        let duration = strings(df, "duration")?;
        let listed_in = strings(df, "listed_in")?;
        let description = strings(df, "description")?;

        let mut records = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let id = required(show_id[row], row, "show_id")?.to_owned();
            let raw_type = required(kind[row], row, "type")?;
            let content_type =
                ContentType::parse(raw_type).ok_or_else(|| LoadError::InvalidField {
                    id: id.clone(),
                    column: "type",
                    value: raw_type.to_owned(),
                })?;

            records.push(ContentRecord {
                content_type,
                title: required(title[row], row, "title")?.to_owned(),
                director: optional(director[row]),
                cast: optional(cast[row]),
                country: optional(country[row]),
                date_added: optional(date_added[row]),
                release_year: release_year[row].ok_or(LoadError::MissingField {
                    row,
                    column: "release_year",
                })?,
                rating: optional(rating[row]),
                duration: optional(duration[row]),
                genres: optional(listed_in[row]).unwrap_or_default(),
                description: optional(description[row]),
                id,
            });
        }

        Catalog::new(records)
    }

    pub fn get(&self, id: &str) -> Option<&ContentRecord> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn strings<'a>(df: &'a DataFrame, name: &str) -> PolarsResult<Vec<Option<&'a str>>> {
    Ok(df.column(name)?.str()?.into_iter().collect())
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn required<'a>(value: Option<&'a str>, row: usize, column: &'static str) -> LoadResult<&'a str> {
    trimmed(value).ok_or(LoadError::MissingField { row, column })
}

fn optional(value: Option<&str>) -> Option<String> {
    trimmed(value).map(str::to_owned)
}
