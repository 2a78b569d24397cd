//! The static city map every strategy searches over.
//!
//! City identity is the name: two cities are the same iff their names are
//! equal, and all search bookkeeping is keyed by name. The map is built
//! once and never mutated by a search.

use std::path::Path;

use log::info;
use rustc_hash::FxHashMap;

use crate::constants::Cost;

/// A single latitude or longitude angle in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub value: f64,
}

impl Coordinate {
    pub fn new(value: f64) -> Self {
        Coordinate { value }
    }

    /// Builds a coordinate from degrees, minutes and seconds plus a
    /// hemisphere letter. `W` and `S` hemispheres negate the angle.
    pub fn from_dms(degrees: u32, minutes: u32, seconds: u32, hemisphere: char) -> Self {
        let mut value = degrees as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0;
        if matches!(hemisphere.to_ascii_lowercase(), 'w' | 's') {
            value = -value;
        }

        Coordinate { value }
    }
}

/// A directed connection to a named destination city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub destination: String,
    pub cost: Cost,
}

impl Action {
    pub fn new(destination: impl Into<String>, cost: Cost) -> Self {
        Action {
            destination: destination.into(),
            cost,
        }
    }
}

/// A named location with coordinates and an ordered list of outgoing
/// actions. The list may be empty (a sink city).
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    pub actions: Vec<Action>,
}

impl City {
    pub fn new(name: impl Into<String>, latitude: Coordinate, longitude: Coordinate) -> Self {
        City {
            name: name.into(),
            latitude,
            longitude,
            actions: Vec::new(),
        }
    }

    pub fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn add_actions(&mut self, actions: impl IntoIterator<Item = Action>) {
        self.actions.extend(actions);
    }
}

/// An unordered collection of cities, unique by name.
///
/// Destination names of actions are not validated against the collection;
/// an action pointing at an unknown name only surfaces when a search
/// tries to resolve that neighbor.
#[derive(Debug, Clone)]
pub struct Map {
    cities: Vec<City>,
    index: FxHashMap<String, usize>,
}

impl Map {
    pub fn new(cities: Vec<City>) -> Self {
        let index = cities
            .iter()
            .enumerate()
            .map(|(i, city)| (city.name.clone(), i))
            .collect();

        Map { cities, index }
    }

    /// Looks a city up by name.
    pub fn get(&self, name: &str) -> Option<&City> {
        self.index.get(name).map(|&i| &self.cities[i])
    }

    /// Returns an iterator over all cities of the map.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Loads a map from a line-oriented map file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let map_file = map_reader::MapFile::from_path(path)?;

        let mut cities = Vec::with_capacity(map_file.records.len());
        for record in map_file.records {
            let latitude = Coordinate::from_dms(
                record.latitude.degrees,
                record.latitude.minutes,
                record.latitude.seconds,
                record.latitude.hemisphere,
            );
            let longitude = Coordinate::from_dms(
                record.longitude.degrees,
                record.longitude.minutes,
                record.longitude.seconds,
                record.longitude.hemisphere,
            );

            let mut city = City::new(record.name, latitude, longitude);
            city.add_actions(
                record
                    .connections
                    .into_iter()
                    .map(|c| Action::new(c.destination, c.cost)),
            );
            cities.push(city);
        }

        let map = Map::new(cities);
        info!("Map has {} cities", map.len());

        Ok(map)
    }
}
