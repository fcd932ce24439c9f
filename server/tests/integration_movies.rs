use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use catalog::{Catalog, DataSource, Movie, Review, ReviewStore};
use http_body_util::BodyExt;
use serde_json::Value;
use std::collections::HashMap;
use tower::ServiceExt;

fn bundled_app() -> Router {
    server::build_app(server::AppState::load(&DataSource::Bundled, &DataSource::Bundled))
}

fn movie(id: i64, title: &str, genre: &str) -> Movie {
    Movie {
        id,
        title: title.into(),
        director: "Director".into(),
        release_year: 2023,
        genre: genre.into(),
        description: "Description".into(),
        duration: 120,
        rating: 8.5,
    }
}

async fn call(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::get(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

fn ids(json: &Value) -> Vec<i64> {
    json["movies"].as_array().unwrap().iter().map(|m| m["id"].as_i64().unwrap()).collect()
}

#[tokio::test]
async fn lists_movies_and_genres() {
    let (status, json) = call(bundled_app(), "/movies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), (1..=12).collect::<Vec<_>>());
    let genres = json["genres"].as_array().unwrap();
    assert!(genres.contains(&Value::from("Action/Crime")));
}

#[tokio::test]
async fn empty_catalog_lists_nothing() {
    let app = server::build_app(server::AppState::new(Catalog::default(), ReviewStore::default()));
    let (status, json) = call(app, "/movies").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["movies"].as_array().unwrap().is_empty());
    assert!(json["genres"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn search_by_name_echoes_criteria() {
    let (status, json) = call(bundled_app(), "/movies/search?name=prison").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![1]);
    assert_eq!(json["searchPerformed"], true);
    assert_eq!(json["searchName"], "prison");
    assert_eq!(json["searchId"], Value::Null);
    assert_eq!(json["resultsMessage"], "Found 1 movie matching your search.");
    assert!(json.get("noResultsMessage").is_none());
}

#[tokio::test]
async fn search_by_genre_counts_results() {
    let (status, json) = call(bundled_app(), "/movies/search?genre=Drama").await;
    assert_eq!(status, StatusCode::OK);
    let n = ids(&json).len();
    assert!(n > 1);
    assert_eq!(json["resultsMessage"], format!("Found {n} movies matching your search."));
    assert_eq!(json["searchGenre"], "Drama");
}

#[tokio::test]
async fn search_by_id_with_non_matching_genre_is_empty() {
    let (status, json) = call(bundled_app(), "/movies/search?id=1&genre=Comedy").await;
    assert_eq!(status, StatusCode::OK);
    assert!(ids(&json).is_empty());
    assert_eq!(json["searchId"], 1);
    assert!(json["noResultsMessage"].as_str().unwrap().contains("No movies found"));
}

#[tokio::test]
async fn search_with_blank_id_scans_everything() {
    let (status, json) = call(bundled_app(), "/movies/search?name=&id=&genre=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json).len(), 12);
}

#[tokio::test]
async fn search_rejects_non_positive_id() {
    for uri in ["/movies/search?id=0", "/movies/search?id=-4&name=the"] {
        let (status, json) = call(bundled_app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["title"], "Invalid Search Parameters");
        assert!(json["message"].as_str().unwrap().contains("invalid"));
    }
}

#[tokio::test]
async fn search_rejects_non_numeric_id() {
    let (status, _) = call(bundled_app(), "/movies/search?id=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn details_include_icon_and_reviews() {
    let mut reviews = HashMap::new();
    reviews.insert(
        1,
        vec![
            Review { user_name: "John Doe".into(), avatar_emoji: "😊".into(), rating: 4.5, comment: "Great movie!".into() },
            Review { user_name: "Jane Smith".into(), avatar_emoji: "👍".into(), rating: 4.0, comment: "Really enjoyed it.".into() },
        ],
    );
    let state = server::AppState::new(
        Catalog::new(vec![movie(1, "The Prison Escape", "Drama"), movie(2, "Test Movie", "Comedy")]),
        ReviewStore::new(reviews),
    );
    let app = server::build_app(state);

    let (status, json) = call(app.clone(), "/movies/1/details").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["movie"]["movieName"], "The Prison Escape");
    assert_eq!(json["movieIcon"], "🔒");
    let users: Vec<&str> = json["allReviews"].as_array().unwrap().iter().map(|r| r["userName"].as_str().unwrap()).collect();
    assert_eq!(users, vec!["John Doe", "Jane Smith"]);

    let (status, json) = call(app, "/movies/2/details").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["movieIcon"], "🎬");
    assert!(json["allReviews"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn details_for_missing_movie_is_not_found() {
    for id in ["999", "0", "-1", &i64::MAX.to_string()] {
        let (status, json) = call(bundled_app(), &format!("/movies/{id}/details")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["title"], "Movie Not Found");
        assert_eq!(json["message"], format!("Movie with ID {id} was not found."));
    }
}

#[tokio::test]
async fn details_with_non_numeric_id_is_bad_request() {
    let (status, _) = call(bundled_app(), "/movies/abc/details").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = call(bundled_app(), "/invalid-endpoint").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_is_ok() {
    let req = Request::get("/health").body(Body::empty()).unwrap();
    let resp = bundled_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"ok");
}
