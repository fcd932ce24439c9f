use crate::{Movie, MovieId, Review};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const BUNDLED_MOVIES: &str = include_str!("../data/movies.json");
const BUNDLED_REVIEWS: &str = include_str!("../data/reviews.json");

/// Where a store reads its JSON from at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    /// Data compiled into the binary.
    #[default]
    Bundled,
    File(PathBuf),
}

impl DataSource {
    pub fn file<P: AsRef<Path>>(path: P) -> Self { Self::File(path.as_ref().to_path_buf()) }

    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Bundled, Self::File)
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Bundled => f.write_str("bundled"),
            DataSource::File(p) => write!(f, "{}", p.display()),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    Ok(buf)
}

fn read_source(source: &DataSource, bundled: &'static str) -> Result<String> {
    match source {
        DataSource::Bundled => Ok(bundled.to_string()),
        DataSource::File(path) => read_file(path),
    }
}

/// Movie records as a JSON array, in file order.
pub fn parse_movies(json: &str) -> Result<Vec<Movie>> {
    let movies = serde_json::from_str(json).context("parsing movies")?;
    Ok(movies)
}

/// Reviews as a JSON object keyed by movie id, e.g. `{"1": [{...}, ...]}`.
pub fn parse_reviews(json: &str) -> Result<HashMap<MovieId, Vec<Review>>> {
    let reviews = serde_json::from_str(json).context("parsing reviews")?;
    Ok(reviews)
}

pub fn load_movies(source: &DataSource) -> Result<Vec<Movie>> {
    parse_movies(&read_source(source, BUNDLED_MOVIES)?)
}

pub fn load_reviews(source: &DataSource) -> Result<HashMap<MovieId, Vec<Review>>> {
    parse_reviews(&read_source(source, BUNDLED_REVIEWS)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_data_parses() {
        let movies = load_movies(&DataSource::Bundled).unwrap();
        assert_eq!(movies.len(), 12);
        assert!(movies.iter().zip(1..).all(|(m, id)| m.id == id));

        let reviews = load_reviews(&DataSource::Bundled).unwrap();
        assert!(reviews.keys().all(|id| (1..=12).contains(id)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_movies(&DataSource::file("/definitely/not/here/movies.json")).unwrap_err();
        assert!(err.to_string().contains("opening"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_movies("[{\"id\": 1}]").is_err());
        assert!(parse_reviews("{\"abc\": []}").is_err());
        assert!(parse_reviews("not json").is_err());
    }

    #[test]
    fn display_names_the_source() {
        assert_eq!(DataSource::Bundled.to_string(), "bundled");
        assert_eq!(DataSource::file("data/m.json").to_string(), "data/m.json");
        assert_eq!(DataSource::from_option(None), DataSource::Bundled);
    }
}
