//! Ambient idle rotation of the camera around the globe's polar axis.

use std::f64::consts::TAU;

use glam::{DQuat, DVec3};

/// Default idle rotation speed.
pub const CRUISING_ROTATION_SPEED: f64 = 0.5;

/// Rotation speed while a navigation is in flight.
pub const NAVIGATION_ROTATION_SPEED: f64 = 0.2;

/// Rotation speed right after a navigation completes, before the deferred
/// reset restores [`CRUISING_ROTATION_SPEED`].
pub const SETTLE_ROTATION_SPEED: f64 = 0.2;

/// A speed of 1.0 is one full turn per minute.
const RADIANS_PER_SECOND_PER_UNIT: f64 = TAU / 60.0;

/// Continuous rotation of the camera about +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoRotation {
    /// Rotation speed in turns per minute.
    pub speed: f64,
    /// When false, [`rotate`](Self::rotate) is the identity.
    pub enabled: bool,
}

impl Default for AutoRotation {
    fn default() -> Self {
        Self {
            speed: CRUISING_ROTATION_SPEED,
            enabled: true,
        }
    }
}

impl AutoRotation {
    /// Angle swept over `dt` seconds, in radians.
    pub fn angle(&self, dt: f64) -> f64 {
        if self.enabled {
            self.speed * RADIANS_PER_SECOND_PER_UNIT * dt
        } else {
            0.0
        }
    }

    /// Rotate a camera position around the polar axis by `dt` seconds' worth.
    /// Distance from the origin is preserved.
    pub fn rotate(&self, camera: DVec3, dt: f64) -> DVec3 {
        let angle = self.angle(dt);
        if angle == 0.0 {
            return camera;
        }
        DQuat::from_rotation_y(angle) * camera
    }
}
