//! One-shot CLI: run a single query against a map file, or the default
//! query batch with every method plus an aggregate summary.

use anyhow::Context;
use log::info;

use search_core::map::Map;
use search_core::search::{self, Method, SearchResult};
use search_core::statistics;
use search_core::util::cli;

/// Start/target pairs used when no explicit query is given.
const DEFAULT_QUERIES: [(&str, &str); 8] = [
    ("brest", "nice"),
    ("montpellier", "calais"),
    ("strasbourg", "bordeaux"),
    ("paris", "grenoble"),
    ("brest", "grenoble"),
    ("grenoble", "brest"),
    ("nice", "nantes"),
    ("caen", "strasbourg"),
];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    let map = Map::from_file(&cfg.map_file)?;
    info!("Loaded {} cities from {}", map.len(), cfg.map_file.display());

    let results = match &cfg.query {
        Some((start, target)) => {
            let result = search::run(&map, cfg.method, start, target)
                .with_context(|| format!("query {start} -> {target} failed"))?;
            println!("{result}");
            vec![result]
        }
        None => run_batch(&map)?,
    };

    if let Some(path) = &cfg.output {
        statistics::export_csv(&results, path)
            .with_context(|| format!("could not write {}", path.display()))?;
        info!("Wrote {} results to {}", results.len(), path.display());
    }

    Ok(())
}

fn run_batch(map: &Map) -> anyhow::Result<Vec<SearchResult>> {
    let mut results = Vec::with_capacity(Method::ALL.len() * DEFAULT_QUERIES.len());

    for method in Method::ALL {
        for (start, target) in DEFAULT_QUERIES {
            let result = search::run(map, method, start, target)
                .with_context(|| format!("query {start} -> {target} failed"))?;
            println!("{result}\n");
            results.push(result);
        }
    }

    for summary in statistics::summarize(&results) {
        println!("{summary}");
    }

    Ok(results)
}
