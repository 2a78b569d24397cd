//! Command-line argument handling for the `citysearch` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::search::Method;

#[derive(Parser)]
#[command(version, about = "Shortest-path queries over a city map", long_about = None)]
struct Cli {
    /// Path to the map file
    map_file: PathBuf,

    /// The search method to run
    #[arg(short = 'S', long = "search", value_enum, default_value_t = Method::Bfs)]
    search: Method,

    /// Name of the city to start from
    #[arg(short = 'A', long, requires = "target")]
    start: Option<String>,

    /// Name of the city to search for
    #[arg(short = 'B', long, requires = "start")]
    target: Option<String>,

    /// Write every result as a row of this csv file
    #[arg(short, long, value_name = "path")]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub map_file: PathBuf,
    pub method: Method,
    /// Explicit start/target pair; `None` runs the default query batch.
    pub query: Option<(String, String)>,
    pub output: Option<PathBuf>,
}

pub fn parse() -> Cfg {
    let cli = Cli::parse();

    // clap's `requires` already rejected lone --start or --target.
    let query = match (cli.start, cli.target) {
        (Some(start), Some(target)) => Some((start, target)),
        _ => None,
    };

    Cfg {
        map_file: cli.map_file,
        method: cli.search,
        query,
        output: cli.output,
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn start_requires_target() {
        let result = Cli::try_parse_from(["citysearch", "france.map", "-A", "brest"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_a_full_query() {
        let cli = Cli::try_parse_from([
            "citysearch",
            "france.map",
            "-S",
            "ucs",
            "-A",
            "brest",
            "-B",
            "nice",
        ])
        .unwrap();

        assert_eq!(cli.search, Method::Ucs);
        assert_eq!(cli.start.as_deref(), Some("brest"));
        assert_eq!(cli.target.as_deref(), Some("nice"));
        assert!(cli.output.is_none());
    }
}
