//! Re-exports of the most commonly used items in `search_core`.
pub use crate::constants::Cost;
pub use crate::map::{Action, City, Coordinate, Map};
pub use crate::search::{self, Method, SearchError, SearchResult};
pub use crate::statistics::SearchStats;
