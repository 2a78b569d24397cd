//! Shortest-path queries over a static map of named cities.
//!
//! Four interchangeable strategies are provided: breadth-first,
//! iterative-deepening depth-limited, uniform-cost and A* search. Every
//! strategy consumes a read-only [`map::Map`] and produces a
//! [`search::SearchResult`] carrying the path, its cost and the effort
//! counters of the query.
//!
//! # Basic usage
//! ```no_run
//! use std::path::Path;
//!
//! use search_core::map::Map;
//! use search_core::search::{self, Method};
//!
//! let map = Map::from_file(Path::new("france.map")).expect("failed to load map");
//!
//! let result = search::run(&map, Method::Ucs, "brest", "nice").expect("unknown city");
//! println!("{result}");
//! ```
pub mod constants;
pub mod map;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
