use crate::error::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "nflx.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub queries: QueryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("netflix_titles.csv")
}

/// Parameters of the individual queries.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct QueryConfig {
    #[serde(default = "default_release_year")]
    pub release_year: i32,
    #[serde(default = "default_top_countries")]
    pub top_countries: usize,
    #[serde(default)]
    pub longest_limit: Option<usize>,
    #[serde(default = "default_recent_years")]
    pub recent_years: u32,
    #[serde(default = "default_director")]
    pub director: String,
    #[serde(default = "default_min_seasons")]
    pub min_seasons: u32,
    #[serde(default = "default_country")]
    pub share_country: String,
    #[serde(default = "default_share_limit")]
    pub share_limit: usize,
    #[serde(default = "default_actor")]
    pub actor: String,
    #[serde(default = "default_actor_window_years")]
    pub actor_window_years: i32,
    #[serde(default = "default_country")]
    pub cast_country: String,
    #[serde(default = "default_top_actors")]
    pub top_actors: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            release_year: default_release_year(),
            top_countries: default_top_countries(),
            longest_limit: None,
            recent_years: default_recent_years(),
            director: default_director(),
            min_seasons: default_min_seasons(),
            share_country: default_country(),
            share_limit: default_share_limit(),
            actor: default_actor(),
            actor_window_years: default_actor_window_years(),
            cast_country: default_country(),
            top_actors: default_top_actors(),
        }
    }
}

fn default_release_year() -> i32 {
    2020
}
fn default_top_countries() -> usize {
    5
}
fn default_recent_years() -> u32 {
    5
}
fn default_director() -> String {
    "Rajiv Chilaka".to_string()
}
fn default_min_seasons() -> u32 {
    5
}
fn default_country() -> String {
    "India".to_string()
}
fn default_share_limit() -> usize {
    5
}
fn default_actor() -> String {
    "Salman Khan".to_string()
}
fn default_actor_window_years() -> i32 {
    10
}
fn default_top_actors() -> usize {
    10
}

impl Config {
    pub fn validate(&self) -> ConfigResult<()> {
        self.queries.validate()
    }
}

impl QueryConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        let limits = [
            ("queries.top_countries", self.top_countries),
            ("queries.share_limit", self.share_limit),
            ("queries.top_actors", self.top_actors),
            ("queries.longest_limit", self.longest_limit.unwrap_or(1)),
        ];
        for (key, value) in limits {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{key} must be >= 1")));
            }
        }

        if self.recent_years == 0 {
            return Err(ConfigError::Invalid(
                "queries.recent_years must be >= 1".to_string(),
            ));
        }
        if self.actor_window_years < 1 {
            return Err(ConfigError::Invalid(
                "queries.actor_window_years must be >= 1".to_string(),
            ));
        }

        Ok(())
    }
}

pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
