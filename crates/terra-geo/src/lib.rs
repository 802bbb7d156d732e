//! Geographic coordinates, sphere projection, and globe marker placement.

mod coordinate;
mod marker;
mod projection;

pub use coordinate::GeoCoordinate;
pub use marker::{
    INDICATOR_SCALE, IndicatorSegment, MARKER_SURFACE_OFFSET, Marker, place_marker, place_markers,
};
pub use projection::{SPHERE_RADIUS, SpherePoint, project, unproject};
