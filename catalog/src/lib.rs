pub mod error;
pub mod icon;
pub mod index;
pub mod model;
pub mod pattern;
pub mod reviews;
pub mod search;
pub mod source;

pub use error::CatalogError;
pub use icon::{icon_for, try_icon_for, DEFAULT_ICON};
pub use index::Catalog;
pub use model::{Movie, MovieId, Review};
pub use reviews::ReviewStore;
pub use search::SearchQuery;
pub use source::DataSource;
