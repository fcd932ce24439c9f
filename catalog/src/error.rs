use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Icon lookup was asked for a movie without a title.
    #[error("movie title is required for icon lookup")]
    MissingTitle,
}
