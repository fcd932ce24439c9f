use crate::source::{load_movies, DataSource};
use crate::{Movie, MovieId};
use std::collections::{BTreeSet, HashMap};

/// The in-memory movie catalog: every record in load order plus an id index.
///
/// Built once at startup and only read afterwards, so a shared reference can
/// be handed to any number of request handlers.
#[derive(Debug, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    by_id: HashMap<MovieId, usize>,
}

impl Catalog {
    /// Build from records in load order. With duplicate ids the list keeps
    /// every record and the index points at the last one.
    pub fn new(movies: Vec<Movie>) -> Self {
        let by_id = movies.iter().enumerate().map(|(pos, m)| (m.id, pos)).collect();
        Self { movies, by_id }
    }

    /// Load from `source`, falling back to an empty catalog if it cannot be
    /// read or parsed.
    pub fn load(source: &DataSource) -> Self {
        match load_movies(source) {
            Ok(movies) => {
                tracing::info!(%source, count = movies.len(), "loaded movies");
                Self::new(movies)
            }
            Err(e) => {
                tracing::error!(%source, error = %format!("{e:#}"), "failed to load movies, catalog is empty");
                Self::default()
            }
        }
    }

    pub fn all_movies(&self) -> &[Movie] { &self.movies }

    pub fn len(&self) -> usize { self.movies.len() }

    pub fn is_empty(&self) -> bool { self.movies.is_empty() }

    /// Absent and non-positive ids are never found.
    pub fn by_id(&self, id: impl Into<Option<MovieId>>) -> Option<&Movie> {
        let id = id.into().filter(|id| *id > 0)?;
        self.by_id.get(&id).map(|&pos| &self.movies[pos])
    }

    /// Distinct genre strings, sorted. "Action/Crime" is one genre here, not two.
    pub fn all_genres(&self) -> Vec<String> {
        let genres: BTreeSet<&str> = self.movies.iter().map(|m| m.genre.as_str()).collect();
        genres.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
pub(crate) fn movie(id: MovieId, title: &str, genre: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        director: "Director".into(),
        release_year: 2020,
        genre: genre.to_string(),
        description: "Description".into(),
        duration: 120,
        rating: 8.0,
    }
}
