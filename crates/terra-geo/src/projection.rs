//! Latitude/longitude to Cartesian projection onto a sphere.
//!
//! Uses the polar-angle convention common to globe renderers:
//!
//! ```text
//! phi   = (90 - lat)  in radians   (polar angle from +Y)
//! theta = (lon + 180) in radians   (azimuth)
//! x = -r * sin(phi) * cos(theta)
//! y =  r * cos(phi)
//! z =  r * sin(phi) * sin(theta)
//! ```
//!
//! +Y is the rotation axis: the north pole lands on `(0, r, 0)`.

use std::ops::Deref;

use glam::DVec3;

use crate::GeoCoordinate;

/// Radius of the rendered globe.
pub const SPHERE_RADIUS: f64 = 1.0;

/// A point on the surface of a sphere centered at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpherePoint(pub DVec3);

impl SpherePoint {
    /// Distance from the sphere center.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.0.length()
    }

    /// Outward unit normal at this point. Zero for the degenerate origin.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.0.normalize_or_zero()
    }

    /// The same direction pushed out to a different radius.
    #[inline]
    pub fn with_radius(&self, radius: f64) -> SpherePoint {
        SpherePoint(self.normal() * radius)
    }
}

impl Deref for SpherePoint {
    type Target = DVec3;

    fn deref(&self) -> &DVec3 {
        &self.0
    }
}

impl From<SpherePoint> for DVec3 {
    fn from(p: SpherePoint) -> Self {
        p.0
    }
}

/// Project a geographic coordinate onto a sphere of the given radius.
///
/// Total over finite inputs: out-of-range latitudes or longitudes still
/// produce a point at distance `radius` from the origin.
#[inline]
#[must_use]
pub fn project(coord: GeoCoordinate, radius: f64) -> SpherePoint {
    let phi = (90.0 - coord.latitude).to_radians();
    let theta = (coord.longitude + 180.0).to_radians();

    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();

    SpherePoint(DVec3::new(
        -radius * sin_phi * cos_theta,
        radius * cos_phi,
        radius * sin_phi * sin_theta,
    ))
}

/// Recover the geographic coordinate of a point, ignoring its radius.
///
/// The origin has no direction and maps to `(0, 0)`. Points on the rotation
/// axis report longitude 0.
#[must_use]
pub fn unproject(point: DVec3) -> GeoCoordinate {
    let r = point.length();
    if r < 1e-12 {
        return GeoCoordinate::default();
    }

    let phi = (point.y / r).clamp(-1.0, 1.0).acos();
    let latitude = 90.0 - phi.to_degrees();

    let horizontal = (point.x * point.x + point.z * point.z).sqrt();
    if horizontal < 1e-12 {
        return GeoCoordinate::new(latitude, 0.0);
    }

    // Inverse of x = -sin(phi)cos(theta), z = sin(phi)sin(theta).
    let theta = point.z.atan2(-point.x);
    let mut longitude = theta.to_degrees() - 180.0;
    if longitude < -180.0 {
        longitude += 360.0;
    }

    GeoCoordinate::new(latitude, longitude)
}
