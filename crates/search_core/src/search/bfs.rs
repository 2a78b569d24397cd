//! Breadth-first search.
//!
//! Expands cities in first-in order, so the path it returns has the
//! fewest edges, not the lowest cost. The reported cost is the cost of
//! that first-found path, which is only minimal when all edge costs are
//! equal.

use std::collections::VecDeque;

use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::constants::Cost;
use crate::map::{City, Map};
use crate::search::{reconstruct_path, resolve, Method, SearchError, SearchResult};
use crate::statistics::SearchStats;

pub struct BreadthFirst<'m> {
    pub stats: SearchStats,
    map: &'m Map,
}

impl<'m> BreadthFirst<'m> {
    pub fn new(map: &'m Map) -> Self {
        BreadthFirst {
            map,
            stats: SearchStats::default(),
        }
    }

    pub fn search(&mut self, start: &str, target: &str) -> Result<SearchResult, SearchError> {
        let start_city = resolve(self.map, start)?;
        resolve(self.map, target)?;

        self.stats.init();
        let mut result = SearchResult::new(Method::Bfs, start, target);

        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut frontier: VecDeque<&City> = VecDeque::new();
        let mut parents: FxHashMap<&str, &City> = FxHashMap::default();
        let mut costs: FxHashMap<&str, Cost> = FxHashMap::default();

        frontier.push_back(start_city);
        costs.insert(start_city.name.as_str(), 0);
        // The start city seeds the frontier.
        result.explored = 1;

        while let Some(current) = frontier.pop_front() {
            result.expanded += 1;

            if current.name == target {
                result.success = true;
                result.path = reconstruct_path(current, &parents);
                result.cost = costs[current.name.as_str()];
                result.maintained = frontier.len();
                break;
            }

            let current_cost = costs[current.name.as_str()];
            for action in &current.actions {
                let neighbor = resolve(self.map, &action.destination)?;
                let name = neighbor.name.as_str();

                if !visited.contains(name) && !frontier.iter().any(|c| c.name == name) {
                    parents.insert(name, current);
                    costs.insert(name, current_cost + action.cost);
                    frontier.push_back(neighbor);
                    result.explored += 1;
                }
            }

            visited.insert(current.name.as_str());
        }

        self.stats.finish();
        if result.success {
            debug!("Path found: {:?}", result.path);
            info!("bfs {}: cost {}", self.stats, result.cost);
        } else {
            info!("bfs {}: no path found", self.stats);
        }

        Ok(result)
    }
}
