//! A* search with a great-circle heuristic.
//!
//! Extraction is ordered by cumulative cost plus the haversine distance
//! from a city to the target. That estimate only stays below the true
//! remaining cost when edge costs are calibrated in the same unit as the
//! distance. With incommensurate units the search is still complete but
//! the returned cost may not be minimal.

use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::constants::Cost;
use crate::map::{City, Map};
use crate::search::{pop_lowest, reconstruct_path, resolve, Method, SearchError, SearchResult};
use crate::statistics::SearchStats;
use crate::util::math::{haversine, DistanceUnit};

pub struct AStar<'m> {
    pub stats: SearchStats,
    map: &'m Map,
    unit: DistanceUnit,
}

impl<'m> AStar<'m> {
    pub fn new(map: &'m Map) -> Self {
        Self::with_unit(map, DistanceUnit::Kilometers)
    }

    pub fn with_unit(map: &'m Map, unit: DistanceUnit) -> Self {
        AStar {
            map,
            unit,
            stats: SearchStats::default(),
        }
    }

    pub fn search(&mut self, start: &str, target: &str) -> Result<SearchResult, SearchError> {
        let start_city = resolve(self.map, start)?;
        let target_city = resolve(self.map, target)?;

        self.stats.init();
        let mut result = SearchResult::new(Method::Astar, start, target);

        let mut frontier: Vec<&City> = vec![start_city];
        let mut parents: FxHashMap<&str, &City> = FxHashMap::default();
        let mut costs: FxHashMap<&str, Cost> = FxHashMap::default();
        let mut estimates: FxHashMap<&str, f64> = FxHashMap::default();

        costs.insert(start_city.name.as_str(), 0);
        estimates.insert(
            start_city.name.as_str(),
            haversine(start_city, target_city, self.unit),
        );
        result.explored = 1;

        while let Some(current) = pop_lowest(&mut frontier, &estimates) {
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

                if costs.get(name).map_or(true, |&known| cost < known) {
                    parents.insert(name, current);
                    costs.insert(name, cost);
                    estimates.insert(
                        name,
                        cost as f64 + haversine(neighbor, target_city, self.unit),
                    );

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
            info!("astar {}: cost {}", self.stats, result.cost);
        } else {
            info!("astar {}: no path found", self.stats);
        }

        Ok(result)
    }
}
