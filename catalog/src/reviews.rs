use crate::source::{load_reviews, DataSource};
use crate::{MovieId, Review};
use std::collections::HashMap;

/// Per-movie review lists, keyed by movie id.
#[derive(Debug, Default)]
pub struct ReviewStore {
    reviews: HashMap<MovieId, Vec<Review>>,
}

impl ReviewStore {
    pub fn new(reviews: HashMap<MovieId, Vec<Review>>) -> Self { Self { reviews } }

    /// Load from `source`, falling back to an empty store on any error.
    pub fn load(source: &DataSource) -> Self {
        match load_reviews(source) {
            Ok(reviews) => {
                let count: usize = reviews.values().map(Vec::len).sum();
                tracing::info!(%source, movies = reviews.len(), count, "loaded reviews");
                Self::new(reviews)
            }
            Err(e) => {
                tracing::error!(%source, error = %format!("{e:#}"), "failed to load reviews, review store is empty");
                Self::default()
            }
        }
    }

    /// Reviews in source order. Unknown and non-positive ids have none.
    pub fn reviews_for(&self, movie_id: MovieId) -> &[Review] {
        if movie_id <= 0 { return &[]; }
        self.reviews.get(&movie_id).map(Vec::as_slice).unwrap_or(&[])
    }
}
