//! Latitude/longitude pairs in degrees.

use std::fmt;

/// A position on the globe expressed as latitude and longitude.
///
/// Values outside the nominal ranges are accepted; projecting them yields a
/// valid point on the sphere even if it has no geographic meaning.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude in degrees. Range: \[-90, 90\].
    /// Positive = north of the equator. Negative = south.
    pub latitude: f64,
    /// Longitude in degrees. Range: \[-180, 180\].
    /// Positive = east. Negative = west.
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Create a new coordinate.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another coordinate on a sphere of the given
    /// radius, using the Haversine formula. Result is in the radius' units.
    pub fn surface_distance_to(&self, other: &GeoCoordinate, radius: f64) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().min(1.0).asin();

        radius * c
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        write!(
            f,
            "{:.1}\u{00B0}{}, {:.1}\u{00B0}{}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir,
        )
    }
}
