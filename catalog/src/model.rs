use serde::{Deserialize, Serialize};

pub type MovieId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    #[serde(rename = "movieName")]
    pub title: String,
    pub director: String,
    #[serde(rename = "year")]
    pub release_year: i32,
    /// Free-form, possibly several genres joined with '/', e.g. "Action/Crime".
    pub genre: String,
    pub description: String,
    /// Minutes.
    pub duration: i32,
    /// 0.0 - 10.0
    #[serde(rename = "imdbRating")]
    pub rating: f64,
}

impl Movie {
    pub fn icon(&self) -> &'static str { crate::icon::icon_for(&self.title) }
}

/// A single user review. The movie it belongs to is tracked by the
/// `ReviewStore`, not by the review itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub avatar_emoji: String,
    /// Nominally 0.0 - 10.0, not validated.
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
}
