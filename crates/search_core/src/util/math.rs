//! Distance helpers for the heuristic search.

use crate::constants::{EARTH_RADIUS_KM, EARTH_RADIUS_MI};
use crate::map::City;

/// Unit the straight-line estimate is reported in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
            DistanceUnit::Miles => EARTH_RADIUS_MI,
        }
    }
}

/// Great-circle distance between two cities (haversine formula).
pub fn haversine(from: &City, to: &City, unit: DistanceUnit) -> f64 {
    let lat1 = from.latitude.value.to_radians();
    let lat2 = to.latitude.value.to_radians();
    let lon1 = from.longitude.value.to_radians();
    let lon2 = to.longitude.value.to_radians();

    let a = ((lat2 - lat1) / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * ((lon2 - lon1) / 2.0).sin().powi(2);

    2.0 * unit.earth_radius() * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::constants::{EARTH_RADIUS_KM, EARTH_RADIUS_MI};
    use crate::map::{City, Coordinate};

    use super::*;

    fn city(name: &str, lat: f64, lon: f64) -> City {
        City::new(name, Coordinate::new(lat), Coordinate::new(lon))
    }

    #[test]
    fn distance_to_self_is_zero() {
        let paris = city("paris", 48.8567, 2.3508);

        assert_abs_diff_eq!(
            haversine(&paris, &paris, DistanceUnit::Kilometers),
            0.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn distance_is_symmetric() {
        let paris = city("paris", 48.8567, 2.3508);
        let lyon = city("lyon", 45.7597, 4.8422);

        assert_relative_eq!(
            haversine(&paris, &lyon, DistanceUnit::Kilometers),
            haversine(&lyon, &paris, DistanceUnit::Kilometers),
            epsilon = 1e-9
        );
    }

    #[test]
    fn paris_to_lyon_is_roughly_four_hundred_kilometers() {
        let paris = city("paris", 48.8567, 2.3508);
        let lyon = city("lyon", 45.7597, 4.8422);

        let distance = haversine(&paris, &lyon, DistanceUnit::Kilometers);
        assert!(
            (380.0..400.0).contains(&distance),
            "got {distance} km for paris -> lyon"
        );
    }

    #[test]
    fn units_differ_by_the_radius_ratio() {
        let paris = city("paris", 48.8567, 2.3508);
        let lyon = city("lyon", 45.7597, 4.8422);

        let km = haversine(&paris, &lyon, DistanceUnit::Kilometers);
        let mi = haversine(&paris, &lyon, DistanceUnit::Miles);
        assert_relative_eq!(km / mi, EARTH_RADIUS_KM / EARTH_RADIUS_MI, epsilon = 1e-12);
    }
}
