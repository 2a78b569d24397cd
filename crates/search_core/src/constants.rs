/// Edge cost type. Map files carry non-negative integer costs.
pub type Cost = u32;

/// Mean earth radius in kilometers, used by the straight-line heuristic.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Mean earth radius in miles.
pub const EARTH_RADIUS_MI: f64 = 3959.0;
