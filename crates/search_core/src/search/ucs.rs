//! Uniform-cost search.
//!
//! Orders expansion by cumulative path cost, so a city is only finalized
//! once it is the globally cheapest pending frontier entry. With
//! non-negative edge costs the returned path cost is minimal.

use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::constants::Cost;
use crate::map::{City, Map};
use crate::search::{pop_lowest, reconstruct_path, resolve, Method, SearchError, SearchResult};
use crate::statistics::SearchStats;

pub struct UniformCost<'m> {
    pub stats: SearchStats,
    map: &'m Map,
}

impl<'m> UniformCost<'m> {
    pub fn new(map: &'m Map) -> Self {
        UniformCost {
            map,
            stats: SearchStats::default(),
        }
    }

    pub fn search(&mut self, start: &str, target: &str) -> Result<SearchResult, SearchError> {
        let start_city = resolve(self.map, start)?;
        resolve(self.map, target)?;

        self.stats.init();
        let mut result = SearchResult::new(Method::Ucs, start, target);

        let mut frontier: Vec<&City> = vec![start_city];
        let mut parents: FxHashMap<&str, &City> = FxHashMap::default();
        let mut costs: FxHashMap<&str, Cost> = FxHashMap::default();

        costs.insert(start_city.name.as_str(), 0);
        result.explored = 1;

        while let Some(current) = pop_lowest(&mut frontier, &costs) {
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
                let cost = current_cost + action.cost;

                // Relax only strictly cheaper paths.
                if costs.get(name).map_or(true, |&known| cost < known) {
                    parents.insert(name, current);
                    costs.insert(name, cost);

                    if !frontier.iter().any(|c| c.name == name) {
                        frontier.push(neighbor);
                        result.explored += 1;
                    }
                }
            }
        }

        self.stats.finish();
        if result.success {
            debug!("Path found: {:?}", result.path);
            info!("ucs {}: cost {}", self.stats, result.cost);
        } else {
            info!("ucs {}: no path found", self.stats);
        }

        Ok(result)
    }
}
