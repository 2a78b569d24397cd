//! Iterative-deepening depth-limited search.
//!
//! A recursive tree search re-run with increasing depth limits. One
//! recursive call is one expansion. Cycle avoidance only applies to the
//! current path, so siblings in other branches may revisit a city.

use log::{debug, info};

use crate::map::{City, Map};
use crate::search::{resolve, Method, SearchError, SearchResult};
use crate::statistics::SearchStats;

/// Outcome of one depth-limited probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DlsOutcome {
    Success,
    /// The depth limit, not the map, ended this branch.
    Cutoff,
    /// The subtree is exhausted; no path exists at any depth.
    Failure,
}

pub struct IterativeDeepening<'m> {
    pub stats: SearchStats,
    map: &'m Map,
}

impl<'m> IterativeDeepening<'m> {
    pub fn new(map: &'m Map) -> Self {
        IterativeDeepening {
            map,
            stats: SearchStats::default(),
        }
    }

    pub fn search(&mut self, start: &str, target: &str) -> Result<SearchResult, SearchError> {
        let start_city = resolve(self.map, start)?;
        resolve(self.map, target)?;

        self.stats.init();
        // One accumulator across every depth iteration: the counters
        // report the total work of the whole deepening process.
        let mut result = SearchResult::new(Method::Dls, start, target);

        let mut limit = 0;
        loop {
            let mut visited = vec![start_city.name.as_str()];
            result.explored += 1;

            match self.dls(start_city, target, limit, &mut visited, &mut result)? {
                DlsOutcome::Success => break,
                DlsOutcome::Cutoff => limit += 1,
                // No cutoff anywhere: the whole reachable component fit
                // under the limit, so deepening further cannot help.
                DlsOutcome::Failure => break,
            }
        }

        self.stats.finish();
        if result.success {
            debug!("Path found at depth {}: {:?}", limit, result.path);
            info!("dls {}: cost {}", self.stats, result.cost);
        } else {
            info!("dls {}: no path found", self.stats);
        }

        Ok(result)
    }

    fn dls(
        &self,
        current: &'m City,
        target: &str,
        limit: usize,
        visited: &mut Vec<&'m str>,
        result: &mut SearchResult,
    ) -> Result<DlsOutcome, SearchError> {
        if limit == 0 {
            // Cut before expansion; the pending branch counts as maintained.
            result.maintained += 1;
            return Ok(DlsOutcome::Cutoff);
        }

        result.expanded += 1;

        if current.name == target {
            result.success = true;
            result.path = vec![current.name.clone()];
            return Ok(DlsOutcome::Success);
        }

        let mut cutoff_occurred = false;
        let mut tried = 0;

        for action in &current.actions {
            if visited.iter().any(|&name| name == action.destination.as_str()) {
                continue;
            }

            let neighbor = resolve(self.map, &action.destination)?;
            tried += 1;

            visited.push(neighbor.name.as_str());
            result.explored += 1;

            let outcome = self.dls(neighbor, target, limit - 1, visited, result)?;
            visited.pop();

            match outcome {
                DlsOutcome::Success => {
                    // Unwind: grow the path frontward and credit this
                    // city's untried actions, the winning one included.
                    result.path.insert(0, current.name.clone());
                    result.cost += action.cost;
                    result.maintained += current.actions.len() - (tried - 1);
                    return Ok(DlsOutcome::Success);
                }
                DlsOutcome::Cutoff => cutoff_occurred = true,
                DlsOutcome::Failure => {}
            }
        }

        Ok(if cutoff_occurred {
            DlsOutcome::Cutoff
        } else {
            DlsOutcome::Failure
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::map::{Action, City, Coordinate, Map};
    use crate::search::SearchError;
    use crate::util::test_maps::{chain_map, disconnected_map, france_map};

    use super::*;

    fn city(name: &str, actions: &[(&str, u32)]) -> City {
        let mut city = City::new(name, Coordinate::new(0.0), Coordinate::new(0.0));
        city.add_actions(
            actions
                .iter()
                .map(|&(destination, cost)| Action::new(destination, cost)),
        );
        city
    }

    #[test]
    fn deepens_until_the_chain_end() {
        // a --2--> b --3--> c, one path only.
        let map = chain_map();
        let mut ids = IterativeDeepening::new(&map);

        let result = ids.search("a", "c").unwrap();
        assert!(result.success);
        assert_eq!(result.path, vec!["a", "b", "c"]);
        assert_eq!(result.cost, 5);
        // Totals across all three depth iterations.
        assert_eq!(result.explored, 9);
        assert_eq!(result.expanded, 6);
        assert_eq!(result.maintained, 5);
    }

    #[test]
    fn start_equals_target() {
        let map = chain_map();
        let mut ids = IterativeDeepening::new(&map);

        let result = ids.search("a", "a").unwrap();
        assert!(result.success);
        assert_eq!(result.path, vec!["a"]);
        assert_eq!(result.cost, 0);
        assert_eq!(result.explored, 2);
        assert_eq!(result.expanded, 1);
        assert_eq!(result.maintained, 1);
    }

    #[test]
    fn unknown_start_or_target_fails_before_any_work() {
        let map = chain_map();
        let mut ids = IterativeDeepening::new(&map);

        assert_eq!(
            ids.search("nowhere", "c"),
            Err(SearchError::CityNotFound("nowhere".to_string()))
        );
        assert_eq!(
            ids.search("a", "nowhere"),
            Err(SearchError::CityNotFound("nowhere".to_string()))
        );
    }

    #[test]
    fn exhausted_component_halts_the_deepening() {
        let map = disconnected_map();
        let mut ids = IterativeDeepening::new(&map);

        // d lives in the other component; once no branch is cut by the
        // limit the outer loop must stop instead of deepening forever.
        let result = ids.search("a", "d").unwrap();
        assert!(!result.success);
        assert!(result.path.is_empty());
        assert_eq!(result.cost, 0);
        assert_eq!(result.expanded, 6);
        assert_eq!(result.explored, 9);
        assert_eq!(result.maintained, 3);
    }

    #[test]
    fn cycles_are_avoided_on_the_current_path_only() {
        let map = Map::new(vec![
            city("a", &[("b", 1)]),
            city("b", &[("a", 1), ("c", 1)]),
            city("c", &[]),
        ]);
        let mut ids = IterativeDeepening::new(&map);

        let result = ids.search("a", "c").unwrap();
        assert!(result.success);
        assert_eq!(result.path, vec!["a", "b", "c"]);
        assert_eq!(result.cost, 2);
    }

    #[test]
    fn finds_unique_shortest_routes_on_the_france_fixture() {
        let map = france_map();
        let mut ids = IterativeDeepening::new(&map);

        // brest -> rennes is a single edge, the unique shortest route.
        let result = ids.search("brest", "rennes").unwrap();
        assert!(result.success);
        assert_eq!(result.path, vec!["brest", "rennes"]);
        assert_eq!(result.cost, 244);

        // A deeper query still terminates and reaches the target.
        let result = ids.search("brest", "nice").unwrap();
        assert!(result.success);
        assert_eq!(result.path.first().map(String::as_str), Some("brest"));
        assert_eq!(result.path.last().map(String::as_str), Some("nice"));
        assert!(result.explored >= result.expanded);
    }
}
