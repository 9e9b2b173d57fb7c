//! Rendering of query results as a table, CSV or JSON.

use crate::config::QueryConfig;
use crate::data::ContentRecord;
use crate::error::ReportResult;
use crate::q1::TypeCount;
use crate::q2::RatingRank;
use crate::q4::CountryCount;
use crate::q5::MovieLength;
use crate::q6::AddedTitle;
use crate::q8::ShowSeasons;
use crate::q9::GenreCount;
use crate::q10::YearShare;
use crate::q14::ActorCount;
use crate::q15::CategoryCount;
use crate::{q1, q2, q3, q4, q5, q6, q7, q8, q9, q10, q11, q12, q13, q14, q15};
use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    Table,
    Csv,
    Json,
}

/// Result rows that can be laid out as a polars frame.
pub trait Tabular {
    fn to_frame(&self) -> PolarsResult<DataFrame>;
}

fn totals<T>(rows: &[T], total: impl Fn(&T) -> usize) -> Vec<u64> {
    rows.iter().map(|row| total(row) as u64).collect()
}

fn records_frame(records: &[&ContentRecord]) -> PolarsResult<DataFrame> {
    df!(
        "show_id" => records.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
        "type" => records.iter().map(|r| r.content_type.as_str()).collect::<Vec<_>>(),
        "title" => records.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(),
        "director" => records.iter().map(|r| r.director.as_deref()).collect::<Vec<_>>(),
        "country" => records.iter().map(|r| r.country.as_deref()).collect::<Vec<_>>(),
        "release_year" => records.iter().map(|r| r.release_year).collect::<Vec<_>>(),
        "rating" => records.iter().map(|r| r.rating.as_deref()).collect::<Vec<_>>(),
        "duration" => records.iter().map(|r| r.duration.as_deref()).collect::<Vec<_>>()
    )
}

fn records_with<T>(
    rows: &[T],
    record: impl Fn(&T) -> &ContentRecord,
    extra: Column,
) -> PolarsResult<DataFrame> {
    let records: Vec<&ContentRecord> = rows.iter().map(record).collect();
    let mut df = records_frame(&records)?;
    df.with_column(extra)?;
    Ok(df)
}

impl Tabular for [&ContentRecord] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        records_frame(self)
    }
}

impl Tabular for [TypeCount] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        df!(
            "type" => self.iter().map(|r| r.content_type.as_str()).collect::<Vec<_>>(),
            "total" => totals(self, |r| r.total)
        )
    }
}

impl Tabular for [RatingRank] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        df!(
            "type" => self.iter().map(|r| r.content_type.as_str()).collect::<Vec<_>>(),
            "rating" => self.iter().map(|r| r.rating.as_str()).collect::<Vec<_>>(),
            "total" => totals(self, |r| r.total),
            "rank" => totals(self, |r| r.rank)
        )
    }
}

impl Tabular for [CountryCount] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        df!(
            "country" => self.iter().map(|r| r.country.as_str()).collect::<Vec<_>>(),
            "total" => totals(self, |r| r.total)
        )
    }
}

impl Tabular for [MovieLength<'_>] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        let minutes: Vec<u32> = self.iter().map(|r| r.minutes).collect();
        records_with(self, |r| r.record, Column::new("minutes".into(), minutes))
    }
}

impl Tabular for [AddedTitle<'_>] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        let added: Vec<String> = self.iter().map(|r| r.added.to_string()).collect();
        records_with(self, |r| r.record, Column::new("added_on".into(), added))
    }
}

impl Tabular for [ShowSeasons<'_>] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        let seasons: Vec<u32> = self.iter().map(|r| r.seasons).collect();
        records_with(self, |r| r.record, Column::new("seasons".into(), seasons))
    }
}

impl Tabular for [GenreCount] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        df!(
            "genre" => self.iter().map(|r| r.genre.as_str()).collect::<Vec<_>>(),
            "total" => totals(self, |r| r.total)
        )
    }
}

impl Tabular for [YearShare] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        df!(
            "country" => self.iter().map(|r| r.country.as_str()).collect::<Vec<_>>(),
            "release_year" => self.iter().map(|r| r.release_year).collect::<Vec<_>>(),
            "total" => totals(self, |r| r.total),
            "share" => self.iter().map(|r| r.share).collect::<Vec<_>>()
        )
    }
}

impl Tabular for [ActorCount] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        df!(
            "actor" => self.iter().map(|r| r.actor.as_str()).collect::<Vec<_>>(),
            "total" => totals(self, |r| r.total)
        )
    }
}

impl Tabular for [CategoryCount] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        df!(
            "category" => self.iter().map(|r| r.category.as_str()).collect::<Vec<_>>(),
            "type" => self.iter().map(|r| r.content_type.as_str()).collect::<Vec<_>>(),
            "total" => totals(self, |r| r.total)
        )
    }
}

#[derive(Serialize)]
struct Section<'a, R: ?Sized> {
    insight: &'a str,
    rows: &'a R,
}

pub fn render<W, R>(out: &mut W, title: &str, rows: &R, format: Format) -> ReportResult<()>
where
    W: Write,
    R: Tabular + Serialize + ?Sized,
{
    match format {
        Format::Table => {
            let df = rows.to_frame()?;
            writeln!(out, "{title}")?;
            writeln!(out, "{df}")?;
            writeln!(out)?;
        }
        Format::Csv => {
            let mut df = rows.to_frame()?;
            writeln!(out, "# {title}")?;
            CsvWriter::new(&mut *out).finish(&mut df)?;
        }
        Format::Json => {
            let section = Section {
                insight: title,
                rows,
            };
            serde_json::to_writer_pretty(&mut *out, &section)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insight {
    TypeDistribution,
    TopRatings,
    ReleasedIn,
    TopCountries,
    LongestMovies,
    RecentlyAdded,
    DirectedBy,
    LongRunningShows,
    GenreCounts,
    YearlyShare,
    Documentaries,
    WithoutDirector,
    ActorTitles,
    TopActors,
    ContentCategories,
}

impl Insight {
    pub const ALL: [Insight; 15] = [
        Insight::TypeDistribution,
        Insight::TopRatings,
        Insight::ReleasedIn,
        Insight::TopCountries,
        Insight::LongestMovies,
        Insight::RecentlyAdded,
        Insight::DirectedBy,
        Insight::LongRunningShows,
        Insight::GenreCounts,
        Insight::YearlyShare,
        Insight::Documentaries,
        Insight::WithoutDirector,
        Insight::ActorTitles,
        Insight::TopActors,
        Insight::ContentCategories,
    ];

    pub fn title(&self, params: &QueryConfig) -> String {
        match self {
            Insight::TypeDistribution => "Movies vs TV shows".to_string(),
            Insight::TopRatings => "Most common rating per type".to_string(),
            Insight::ReleasedIn => format!("Released in {}", params.release_year),
            Insight::TopCountries => format!("Top {} countries", params.top_countries),
            Insight::LongestMovies => "Longest movies".to_string(),
            Insight::RecentlyAdded => format!("Added in the last {} years", params.recent_years),
            Insight::DirectedBy => format!("Directed by {}", params.director),
            Insight::LongRunningShows => {
                format!("TV shows with more than {} seasons", params.min_seasons)
            }
            Insight::GenreCounts => "Content per genre".to_string(),
            Insight::YearlyShare => format!("Yearly share of {} content", params.share_country),
            Insight::Documentaries => "Documentaries".to_string(),
            Insight::WithoutDirector => "Content without a director".to_string(),
            Insight::ActorTitles => format!(
                "{} titles in the last {} years",
                params.actor, params.actor_window_years
            ),
            Insight::TopActors => format!(
                "Top {} actors in {} productions",
                params.top_actors, params.cast_country
            ),
            Insight::ContentCategories => "Content by description category".to_string(),
        }
    }
}

/// Runs one insight over `records` and writes its rows to `out`.
pub fn report<W: Write>(
    out: &mut W,
    insight: Insight,
    records: &[ContentRecord],
    params: &QueryConfig,
    today: NaiveDate,
    format: Format,
) -> ReportResult<()> {
    let start = Instant::now();
    let title = insight.title(params);

    match insight {
        Insight::TypeDistribution => {
            render(out, &title, q1::type_distribution(records).as_slice(), format)?
        }
        Insight::TopRatings => {
            render(out, &title, q2::top_rating_per_type(records).as_slice(), format)?
        }
        Insight::ReleasedIn => render(
            out,
            &title,
            q3::released_in(records, params.release_year).as_slice(),
            format,
        )?,
        Insight::TopCountries => render(
            out,
            &title,
            q4::top_countries(records, params.top_countries).as_slice(),
            format,
        )?,
        Insight::LongestMovies => {
            let mut rows = q5::longest_movies(records);
            if let Some(limit) = params.longest_limit {
                rows.truncate(limit);
            }
            render(out, &title, rows.as_slice(), format)?
        }
        Insight::RecentlyAdded => render(
            out,
            &title,
            q6::recently_added(records, today, params.recent_years).as_slice(),
            format,
        )?,
        Insight::DirectedBy => render(
            out,
            &title,
            q7::directed_by(records, &params.director).as_slice(),
            format,
        )?,
        Insight::LongRunningShows => render(
            out,
            &title,
            q8::long_running_shows(records, params.min_seasons).as_slice(),
            format,
        )?,
        Insight::GenreCounts => render(out, &title, q9::genre_counts(records).as_slice(), format)?,
        Insight::YearlyShare => render(
            out,
            &title,
            q10::yearly_share(records, &params.share_country, params.share_limit).as_slice(),
            format,
        )?,
        Insight::Documentaries => {
            render(out, &title, q11::documentaries(records).as_slice(), format)?
        }
        Insight::WithoutDirector => {
            render(out, &title, q12::without_director(records).as_slice(), format)?
        }
        Insight::ActorTitles => render(
            out,
            &title,
            q13::actor_recent_titles(
                records,
                &params.actor,
                params.actor_window_years,
                today.year(),
            )
            .as_slice(),
            format,
        )?,
        Insight::TopActors => render(
            out,
            &title,
            q14::top_actors(records, &params.cast_country, params.top_actors).as_slice(),
            format,
        )?,
        Insight::ContentCategories => {
            render(out, &title, q15::content_categories(records).as_slice(), format)?
        }
    }

    info!(insight = ?insight, elapsed = ?start.elapsed(), "reported");
    Ok(())
}
