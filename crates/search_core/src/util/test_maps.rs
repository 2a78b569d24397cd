//! Hand-built maps used by the test suite.

use crate::map::{Action, City, Coordinate, Map};

fn city(name: &str, actions: &[(&str, u32)]) -> City {
    let mut city = City::new(name, Coordinate::new(0.0), Coordinate::new(0.0));
    city.add_actions(
        actions
            .iter()
            .map(|&(destination, cost)| Action::new(destination, cost)),
    );
    city
}

/// a --2--> b --3--> c with a direct a --10--> c shortcut. The cheapest
/// route and the fewest-edge route differ.
pub fn simple_map() -> Map {
    Map::new(vec![
        city("a", &[("c", 10), ("b", 2)]),
        city("b", &[("c", 3)]),
        city("c", &[]),
    ])
}

/// Single path a --2--> b --3--> c, nothing else.
pub fn chain_map() -> Map {
    Map::new(vec![
        city("a", &[("b", 2)]),
        city("b", &[("c", 3)]),
        city("c", &[]),
    ])
}

/// Ten cities with an expensive straight route and a cheap long detour.
///
/// ```text
///      h -> i -> j
///      |         |
/// a -> f -> g -  |
/// |         |  \ |
/// b -> c -> d -> e
/// ```
pub fn complex_map() -> Map {
    Map::new(vec![
        city("a", &[("b", 1), ("f", 5)]),
        city("b", &[("c", 1)]),
        city("c", &[("d", 1)]),
        city("d", &[("e", 20)]),
        city("e", &[]),
        city("f", &[("g", 1), ("h", 5)]),
        city("g", &[("e", 20), ("d", 20)]),
        city("h", &[("i", 1)]),
        city("i", &[("j", 1)]),
        city("j", &[("e", 1)]),
    ])
}

/// Two components: a -> b -> c and d -> e.
pub fn disconnected_map() -> Map {
    Map::new(vec![
        city("a", &[("b", 1)]),
        city("b", &[("c", 1)]),
        city("c", &[]),
        city("d", &[("e", 1)]),
        city("e", &[]),
    ])
}

/// The French road map fixture shipped with `map_reader`.
pub fn france_map() -> Map {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../map_reader/test_data/france.map");

    Map::from_file(&path).unwrap()
}
