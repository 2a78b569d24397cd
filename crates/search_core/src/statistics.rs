//! Per-query timing and batch-level reporting.

use std::fmt::{self, Display};
use std::path::Path;
use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::constants::Cost;
use crate::search::{Method, SearchResult};

/// Wall-clock timing for a single query.
#[derive(Debug, Default)]
pub struct SearchStats {
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.duration = None;
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.duration {
            Some(duration) => write!(f, "completed in {:?}", duration),
            None => write!(f, "not finished"),
        }
    }
}

/// Aggregate over every result a single method produced in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSummary {
    pub method: Method,
    pub queries: usize,
    pub successes: usize,
    /// Successful results whose cost matches the cheapest cost any method
    /// in the batch found for the same start/target pair.
    pub optimal: usize,
    pub avg_explored: f64,
    pub avg_expanded: f64,
    pub avg_maintained: f64,
}

impl Display for MethodSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{} successful, {} optimal, avg explored {:.1}, avg expanded {:.1}, avg maintained {:.1}",
            self.method,
            self.successes,
            self.queries,
            self.optimal,
            self.avg_explored,
            self.avg_expanded,
            self.avg_maintained
        )
    }
}

/// Builds one [`MethodSummary`] per method appearing in `results`, in
/// first-seen order.
pub fn summarize(results: &[SearchResult]) -> Vec<MethodSummary> {
    let mut best: FxHashMap<(&str, &str), Cost> = FxHashMap::default();
    for result in results.iter().filter(|r| r.success) {
        best.entry((result.start.as_str(), result.target.as_str()))
            .and_modify(|cost| *cost = (*cost).min(result.cost))
            .or_insert(result.cost);
    }

    let mut order: Vec<Method> = Vec::new();
    let mut grouped: FxHashMap<Method, Vec<&SearchResult>> = FxHashMap::default();
    for result in results {
        if !grouped.contains_key(&result.method) {
            order.push(result.method);
        }
        grouped.entry(result.method).or_default().push(result);
    }

    order
        .into_iter()
        .map(|method| {
            let group = &grouped[&method];

            let mut successes = 0;
            let mut optimal = 0;
            let mut explored = 0;
            let mut expanded = 0;
            let mut maintained = 0;
            for result in group {
                if result.success {
                    successes += 1;
                    if best.get(&(result.start.as_str(), result.target.as_str()))
                        == Some(&result.cost)
                    {
                        optimal += 1;
                    }
                }
                explored += result.explored;
                expanded += result.expanded;
                maintained += result.maintained;
            }

            let queries = group.len();
            MethodSummary {
                method,
                queries,
                successes,
                optimal,
                avg_explored: explored as f64 / queries as f64,
                avg_expanded: expanded as f64 / queries as f64,
                avg_maintained: maintained as f64 / queries as f64,
            }
        })
        .collect()
}

#[derive(Serialize)]
struct ResultRow<'a> {
    method: &'a str,
    start: &'a str,
    target: &'a str,
    success: bool,
    path: String,
    cost: Cost,
    explored: usize,
    expanded: usize,
    maintained: usize,
}

/// Writes one row per result, header included.
pub fn export_csv(results: &[SearchResult], path: &Path) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for result in results {
        wtr.serialize(ResultRow {
            method: result.method.as_str(),
            start: &result.start,
            target: &result.target,
            success: result.success,
            path: result.path.join("-"),
            cost: result.cost,
            explored: result.explored,
            expanded: result.expanded,
            maintained: result.maintained,
        })?;
    }

    wtr.flush()?;
    Ok(())
}
