use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two points given in degrees
/// https://en.wikipedia.org/wiki/Haversine_formula
/// The result is in the unit of `radius`.
pub fn haversine<T>(lat1: T, lon1: T, lat2: T, lon2: T, radius: T) -> T
where
    T: Float,
{
    let two = T::one() + T::one();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / two).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / two).sin().powi(2);
    let c = two * a.sqrt().atan2((T::one() - a).sqrt());
    radius * c
}

/// Geographic position in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Straight-line distance over the Earth's surface, in meters
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
            EARTH_RADIUS_METERS,
        )
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self { latitude, longitude }
    }
}
