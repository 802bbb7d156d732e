//! Location markers placed on the globe surface.
//!
//! Each marker sits slightly above the sphere so it does not z-fight with the
//! globe mesh, faces outward along its radial normal, and carries a short
//! radial indicator line.

use glam::{DQuat, DVec3};

use crate::{GeoCoordinate, SpherePoint, project};

/// Height of a marker above the sphere surface.
pub const MARKER_SURFACE_OFFSET: f64 = 0.01;

/// Indicator lines end at the marker position scaled by this factor.
pub const INDICATOR_SCALE: f64 = 1.05;

/// A radial line segment from a marker outward, away from the globe center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorSegment {
    /// Segment start, on the marker.
    pub start: DVec3,
    /// Segment end, further out along the same radial line.
    pub end: DVec3,
}

impl IndicatorSegment {
    /// Segment length.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// A labeled point marker on the globe. Immutable once placed.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Text shown next to the marker.
    pub label: String,
    /// The geographic location this marker represents.
    pub coordinate: GeoCoordinate,
    /// Marker position, lifted [`MARKER_SURFACE_OFFSET`] above the sphere.
    pub surface: SpherePoint,
    /// Rotates the marker's local +Z axis onto the outward normal.
    pub orientation: DQuat,
    /// Radial indicator line.
    pub indicator: IndicatorSegment,
}

impl Marker {
    /// Place a labeled marker on a sphere of `sphere_radius`.
    pub fn labeled(label: impl Into<String>, coord: GeoCoordinate, sphere_radius: f64) -> Self {
        let surface = project(coord, sphere_radius + MARKER_SURFACE_OFFSET);
        let normal = surface.normal();

        let orientation = if normal == DVec3::ZERO {
            DQuat::IDENTITY
        } else {
            DQuat::from_rotation_arc(DVec3::Z, normal)
        };

        Self {
            label: label.into(),
            coordinate: coord,
            surface,
            orientation,
            indicator: IndicatorSegment {
                start: surface.0,
                end: surface.0 * INDICATOR_SCALE,
            },
        }
    }

    /// Direction the marker faces (its outward normal).
    pub fn facing(&self) -> DVec3 {
        self.orientation * DVec3::Z
    }
}

/// Place an unlabeled marker for `coord` on a sphere of `sphere_radius`.
pub fn place_marker(coord: GeoCoordinate, sphere_radius: f64) -> Marker {
    Marker::labeled(String::new(), coord, sphere_radius)
}

/// Place one marker per labeled location, preserving input order.
pub fn place_markers<'a, I>(locations: I, sphere_radius: f64) -> Vec<Marker>
where
    I: IntoIterator<Item = (&'a str, GeoCoordinate)>,
{
    locations
        .into_iter()
        .map(|(label, coord)| Marker::labeled(label, coord, sphere_radius))
        .collect()
}
