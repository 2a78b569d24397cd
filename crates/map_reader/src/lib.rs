//! Parser for the line-oriented map file format.
//!
//! Each line describes one city and the connections leaving it:
//!
//! ```text
//! <name> <deg> <min> <sec> <N|S> <deg> <min> <sec> <E|W> --> <dest> <cost> <dest> <cost> ...
//! ```
//!
//! The part before ` --> ` is the city name followed by its latitude and
//! longitude in degrees/minutes/seconds with a hemisphere letter. The part
//! after it pairs up destination names with non-negative integer costs. A
//! line without the separator is a city with no outgoing connections.
//!
//! The parser only produces raw records. Converting angles to decimal
//! degrees and resolving destination names against the rest of the map is
//! left to the consumer.

use std::{fs, path::Path};

use anyhow::{bail, Context};
use log::info;

/// An angle in degrees, minutes and seconds plus a hemisphere letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DmsAngle {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub hemisphere: char,
}

/// A directed connection from the record's city to a named destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub destination: String,
    pub cost: u32,
}

/// One parsed map file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRecord {
    pub name: String,
    pub latitude: DmsAngle,
    pub longitude: DmsAngle,
    pub connections: Vec<Connection>,
}

/// The parsed contents of a whole map file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFile {
    pub records: Vec<CityRecord>,
}

impl MapFile {
    /// Parses map file contents. Blank lines are skipped; any malformed
    /// line fails the whole parse with its line number attached.
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        let mut records = Vec::new();

        for (lineno, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let record = parse_line(line).with_context(|| format!("line {}", lineno + 1))?;
            records.push(record);
        }

        Ok(MapFile { records })
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        info!("BEGIN parsing {}", path.display());

        let input = fs::read_to_string(path)
            .with_context(|| format!("could not read map file {}", path.display()))?;
        let map_file = Self::parse(&input)
            .with_context(|| format!("could not parse map file {}", path.display()))?;

        info!(
            "Finished parsing {}: {} cities",
            path.display(),
            map_file.records.len()
        );

        Ok(map_file)
    }
}

fn parse_line(line: &str) -> anyhow::Result<CityRecord> {
    let (city_part, connection_part) = match line.split_once(" --> ") {
        Some((city, connections)) => (city, Some(connections)),
        // No separator: a sink city without outgoing connections.
        None => (line, None),
    };

    let fields: Vec<&str> = city_part.split_whitespace().collect();
    if fields.len() != 9 {
        bail!(
            "expected `name deg min sec hemisphere deg min sec hemisphere`, got {} fields",
            fields.len()
        );
    }

    let name = fields[0].to_string();
    let latitude = parse_angle(&fields[1..5]).context("invalid latitude")?;
    let longitude = parse_angle(&fields[5..9]).context("invalid longitude")?;

    let mut connections = Vec::new();
    if let Some(connection_part) = connection_part {
        let parts: Vec<&str> = connection_part.split_whitespace().collect();
        if parts.len() % 2 != 0 {
            bail!("destination `{}` has no cost", parts[parts.len() - 1]);
        }

        for pair in parts.chunks(2) {
            let cost = pair[1]
                .parse()
                .with_context(|| format!("invalid cost `{}` for destination `{}`", pair[1], pair[0]))?;
            connections.push(Connection {
                destination: pair[0].to_string(),
                cost,
            });
        }
    }

    Ok(CityRecord {
        name,
        latitude,
        longitude,
        connections,
    })
}

fn parse_angle(fields: &[&str]) -> anyhow::Result<DmsAngle> {
    let degrees = fields[0]
        .parse()
        .with_context(|| format!("invalid degrees `{}`", fields[0]))?;
    let minutes = fields[1]
        .parse()
        .with_context(|| format!("invalid minutes `{}`", fields[1]))?;
    let seconds = fields[2]
        .parse()
        .with_context(|| format!("invalid seconds `{}`", fields[2]))?;

    let mut chars = fields[3].chars();
    let hemisphere = match (chars.next(), chars.next()) {
        (Some(h), None) if matches!(h.to_ascii_lowercase(), 'n' | 's' | 'e' | 'w') => h,
        _ => bail!("invalid hemisphere `{}`", fields[3]),
    };

    Ok(DmsAngle {
        degrees,
        minutes,
        seconds,
        hemisphere,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_city_with_connections() {
        let map_file =
            MapFile::parse("brest 48 23 24 N 4 29 24 W --> rennes 244 nantes 298").unwrap();

        assert_eq!(map_file.records.len(), 1);

        let record = &map_file.records[0];
        assert_eq!(record.name, "brest");
        assert_eq!(
            record.latitude,
            DmsAngle {
                degrees: 48,
                minutes: 23,
                seconds: 24,
                hemisphere: 'N'
            }
        );
        assert_eq!(record.longitude.hemisphere, 'W');
        assert_eq!(
            record.connections,
            vec![
                Connection {
                    destination: "rennes".to_string(),
                    cost: 244
                },
                Connection {
                    destination: "nantes".to_string(),
                    cost: 298
                },
            ]
        );
    }

    #[test]
    fn parses_sink_city_without_separator() {
        let map_file = MapFile::parse("lorient 47 44 54 N 3 22 11 W").unwrap();

        assert_eq!(map_file.records[0].name, "lorient");
        assert!(map_file.records[0].connections.is_empty());
    }

    #[test]
    fn skips_blank_lines() {
        let input = "\nbrest 48 23 24 N 4 29 24 W --> rennes 244\n\nlorient 47 44 54 N 3 22 11 W\n";
        let map_file = MapFile::parse(input).unwrap();

        assert_eq!(map_file.records.len(), 2);
    }

    #[test]
    fn accepts_lowercase_hemisphere() {
        let map_file = MapFile::parse("brest 48 23 24 n 4 29 24 w").unwrap();

        assert_eq!(map_file.records[0].latitude.hemisphere, 'n');
        assert_eq!(map_file.records[0].longitude.hemisphere, 'w');
    }

    #[test]
    fn rejects_invalid_hemisphere() {
        let err = MapFile::parse("brest 48 23 24 N 4 29 24 Q").unwrap_err();

        assert!(format!("{err:#}").contains("invalid hemisphere `Q`"));
    }

    #[test]
    fn rejects_non_numeric_cost() {
        let err = MapFile::parse("brest 48 23 24 N 4 29 24 W --> rennes far").unwrap_err();

        assert!(format!("{err:#}").contains("invalid cost `far`"));
    }

    #[test]
    fn rejects_destination_without_cost() {
        let err = MapFile::parse("brest 48 23 24 N 4 29 24 W --> rennes 244 nantes").unwrap_err();

        assert!(format!("{err:#}").contains("`nantes` has no cost"));
    }

    #[test]
    fn rejects_truncated_city_fields() {
        let err = MapFile::parse("brest 48 23 24 N").unwrap_err();

        assert!(format!("{err:#}").contains("got 5 fields"));
    }

    #[test]
    fn errors_carry_the_line_number() {
        let input = "brest 48 23 24 N 4 29 24 W --> rennes 244\nbad line";
        let err = MapFile::parse(input).unwrap_err();

        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn reads_france_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/france.map");
        let map_file = MapFile::from_path(&path).unwrap();

        assert_eq!(map_file.records.len(), 18);
        assert_eq!(map_file.records[0].name, "brest");
        assert_eq!(map_file.records[0].connections.len(), 1);
    }
}
