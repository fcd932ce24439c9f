use axum::{extract::{Path, Query, State}, http::{HeaderValue, StatusCode}, routing::get, Json, Router};
use catalog::{Catalog, DataSource, Movie, MovieId, Review, ReviewStore, SearchQuery};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    /// `id=` with an empty value is treated as absent.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub id: Option<MovieId>,
    pub genre: Option<String>,
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(de::Error::custom),
    }
}

#[derive(Serialize)]
pub struct MoviesView {
    pub movies: Vec<Movie>,
    pub genres: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchView {
    pub movies: Vec<Movie>,
    pub genres: Vec<String>,
    pub search_performed: bool,
    pub search_name: Option<String>,
    pub search_id: Option<MovieId>,
    pub search_genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_results_message: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsView {
    pub movie: Movie,
    pub movie_icon: String,
    pub all_reviews: Vec<Review>,
}

#[derive(Debug, Serialize)]
pub struct ErrorView {
    pub title: String,
    pub message: String,
}

type ApiError = (StatusCode, Json<ErrorView>);

fn error(status: StatusCode, title: &str, message: String) -> ApiError {
    (status, Json(ErrorView { title: title.to_string(), message }))
}

/// Read-only stores shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub reviews: Arc<ReviewStore>,
}

impl AppState {
    pub fn new(catalog: Catalog, reviews: ReviewStore) -> Self {
        Self { catalog: Arc::new(catalog), reviews: Arc::new(reviews) }
    }

    /// Load both stores. Bad or missing data leaves the affected store empty.
    pub fn load(movies: &DataSource, reviews: &DataSource) -> Self {
        Self::new(Catalog::load(movies), ReviewStore::load(reviews))
    }
}

fn cors_layer() -> CorsLayer {
    // CORS_ALLOW_ORIGIN is comma-separated; unset or unparsable means Any
    let origins: Vec<HeaderValue> = std::env::var("CORS_ALLOW_ORIGIN")
        .map(|val| val.split(',').filter_map(|s| s.trim().parse().ok()).collect())
        .unwrap_or_default();
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/movies", get(movies_handler))
        .route("/movies/search", get(search_handler))
        .route("/movies/:id/details", get(details_handler))
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

pub async fn movies_handler(State(state): State<AppState>) -> Json<MoviesView> {
    tracing::info!("listing movies");
    Json(MoviesView { movies: state.catalog.all_movies().to_vec(), genres: state.catalog.all_genres() })
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Result<Json<SearchView>, ApiError> {
    tracing::info!(name = ?params.name, id = ?params.id, genre = ?params.genre, "search requested");

    if let Some(id) = params.id.filter(|id| *id <= 0) {
        tracing::warn!(id, "rejecting search with non-positive id");
        return Err(error(
            StatusCode::BAD_REQUEST,
            "Invalid Search Parameters",
            format!("Movie ID {id} is invalid. Please provide an ID greater than 0."),
        ));
    }

    let query = SearchQuery { name: params.name.clone(), id: params.id, genre: params.genre.clone() };
    let movies: Vec<Movie> = state.catalog.search(&query).into_iter().cloned().collect();

    let (results_message, no_results_message) = match movies.len() {
        0 => {
            tracing::info!("no movies matched");
            (None, Some("No movies found matching your search criteria. Try adjusting your search terms.".to_string()))
        }
        1 => (Some("Found 1 movie matching your search.".to_string()), None),
        n => (Some(format!("Found {n} movies matching your search.")), None),
    };

    Ok(Json(SearchView {
        movies,
        genres: state.catalog.all_genres(),
        search_performed: true,
        search_name: params.name,
        search_id: params.id,
        search_genre: params.genre,
        results_message,
        no_results_message,
    }))
}

pub async fn details_handler(State(state): State<AppState>, Path(id): Path<MovieId>) -> Result<Json<DetailsView>, ApiError> {
    tracing::info!(id, "fetching movie details");
    let Some(movie) = state.catalog.by_id(id) else {
        tracing::warn!(id, "movie not found");
        return Err(error(StatusCode::NOT_FOUND, "Movie Not Found", format!("Movie with ID {id} was not found.")));
    };
    Ok(Json(DetailsView {
        movie: movie.clone(),
        movie_icon: movie.icon().to_string(),
        all_reviews: state.reviews.reviews_for(movie.id).to_vec(),
    }))
}
