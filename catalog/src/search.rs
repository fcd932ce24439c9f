use crate::pattern::{passes, Pattern};
use crate::{Catalog, Movie, MovieId};

/// Search criteria. Every field is optional; blank patterns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub id: Option<MovieId>,
    pub genre: Option<String>,
}

impl SearchQuery {
    pub fn new(name: Option<&str>, id: Option<MovieId>, genre: Option<&str>) -> Self {
        Self { name: name.map(str::to_string), id, genre: genre.map(str::to_string) }
    }

    pub fn name(name: &str) -> Self { Self { name: Some(name.to_string()), ..Self::default() } }

    pub fn id(id: MovieId) -> Self { Self { id: Some(id), ..Self::default() } }

    pub fn genre(genre: &str) -> Self { Self { genre: Some(genre.to_string()), ..Self::default() } }

    /// Only a positive id takes the direct-lookup path.
    fn lookup_id(&self) -> Option<MovieId> { self.id.filter(|id| *id > 0) }
}

struct Criteria {
    name: Option<Pattern>,
    genre: Option<Pattern>,
}

impl Criteria {
    fn from_query(query: &SearchQuery) -> Self {
        Self { name: Pattern::parse(query.name.as_deref()), genre: Pattern::parse(query.genre.as_deref()) }
    }

    fn matches(&self, movie: &Movie) -> bool {
        passes(self.name.as_ref(), &movie.title) && passes(self.genre.as_ref(), &movie.genre)
    }
}

impl Catalog {
    /// Movies matching `query`, in catalog order.
    ///
    /// A positive id short-circuits the scan: the result is that one movie if
    /// it exists and also passes the name and genre patterns, and empty
    /// otherwise.
    pub fn search(&self, query: &SearchQuery) -> Vec<&Movie> {
        tracing::info!(name = ?query.name, id = ?query.id, genre = ?query.genre, "searching movies");
        let criteria = Criteria::from_query(query);

        if let Some(id) = query.lookup_id() {
            return match self.by_id(id) {
                Some(movie) if criteria.matches(movie) => {
                    tracing::info!(id, "found movie by id");
                    vec![movie]
                }
                Some(_) => {
                    tracing::info!(id, "movie found by id but filtered out by name/genre");
                    Vec::new()
                }
                None => {
                    tracing::warn!(id, "no movie with id");
                    Vec::new()
                }
            };
        }

        let hits: Vec<&Movie> = self.all_movies().iter().filter(|m| criteria.matches(m)).collect();
        tracing::info!(hits = hits.len(), "search complete");
        hits
    }
}
