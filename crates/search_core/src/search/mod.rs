//! The four search strategies and the plumbing they share.

use std::fmt;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::map::{City, Map};

pub mod astar;
pub mod bfs;
pub mod ids;
pub mod search_result;
pub mod ucs;

pub use search_result::SearchResult;

use astar::AStar;
use bfs::BreadthFirst;
use ids::IterativeDeepening;
use ucs::UniformCost;

/// Fatal query errors.
///
/// An exhausted search is not an error: it is a [`SearchResult`] with
/// `success == false`. `CityNotFound` means the query referenced a name
/// the map does not contain, either up front (start/target) or in an
/// action whose destination never made it into the map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("city `{0}` does not exist in the map")]
    CityNotFound(String),
}

/// The four interchangeable search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Method {
    /// Breadth-first search
    Bfs,
    /// Iterative-deepening depth-limited search
    Dls,
    /// Uniform-cost search
    Ucs,
    /// A* search
    Astar,
}

impl Method {
    pub const ALL: [Method; 4] = [Method::Bfs, Method::Dls, Method::Ucs, Method::Astar];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Bfs => "bfs",
            Method::Dls => "dls",
            Method::Ucs => "ucs",
            Method::Astar => "astar",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs a single query with the selected strategy.
pub fn run(
    map: &Map,
    method: Method,
    start: &str,
    target: &str,
) -> Result<SearchResult, SearchError> {
    match method {
        Method::Bfs => BreadthFirst::new(map).search(start, target),
        Method::Dls => IterativeDeepening::new(map).search(start, target),
        Method::Ucs => UniformCost::new(map).search(start, target),
        Method::Astar => AStar::new(map).search(start, target),
    }
}

pub(crate) fn resolve<'m>(map: &'m Map, name: &str) -> Result<&'m City, SearchError> {
    map.get(name)
        .ok_or_else(|| SearchError::CityNotFound(name.to_string()))
}

/// Walks predecessor links back from `target` and returns the city names
/// from the start of the search to `target`, inclusive. A name without a
/// map entry ends the walk, so a partially filled map cannot hang it.
pub(crate) fn reconstruct_path<'m>(
    target: &'m City,
    parents: &FxHashMap<&str, &'m City>,
) -> Vec<String> {
    let mut path = vec![target.name.clone()];
    let mut current = target;

    while let Some(&prev) = parents.get(current.name.as_str()) {
        path.push(prev.name.clone());
        current = prev;
    }

    path.reverse();
    path
}

/// Removes the frontier entry with the smallest key. Ties keep the
/// earliest-inserted entry, so expansion order is deterministic.
pub(crate) fn pop_lowest<'m, K: PartialOrd>(
    frontier: &mut Vec<&'m City>,
    keys: &FxHashMap<&'m str, K>,
) -> Option<&'m City> {
    if frontier.is_empty() {
        return None;
    }

    let mut min_index = 0;
    for i in 1..frontier.len() {
        if keys[frontier[i].name.as_str()] < keys[frontier[min_index].name.as_str()] {
            min_index = i;
        }
    }

    Some(frontier.remove(min_index))
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<&str>,
    expected_cost: crate::constants::Cost,
    result: Result<SearchResult, SearchError>,
) {
    let result = result.expect("query should not fail");
    assert!(result.success, "expected a successful search");
    assert_eq!(result.path, expected_path);
    assert_eq!(result.cost, expected_cost);
}

#[cfg(test)]
pub(crate) fn assert_no_path(result: Result<SearchResult, SearchError>) {
    let result = result.expect("query should not fail");
    assert!(!result.success, "expected an unsuccessful search");
    assert!(result.path.is_empty());
    assert_eq!(result.cost, 0);
}
