//! Camera navigation toward named regions.
//!
//! The navigator is a two-state machine (idle / navigating). A navigation
//! swings the camera from its current direction toward the projected region
//! point, interpolating the *direction* so the camera keeps a constant
//! distance from the globe center and travels along an arc.
//!
//! The navigator also owns the ambient auto-rotation speed: it is slowed when
//! a navigation starts, held slow right after it ends, and restored to the
//! cruising speed by a deferred task keyed to the navigation epoch.

use glam::{DMat3, DQuat, DVec3};
use terra_geo::{GeoCoordinate, project};

use crate::auto_rotation::{
    AutoRotation, CRUISING_ROTATION_SPEED, NAVIGATION_ROTATION_SPEED, SETTLE_ROTATION_SPEED,
};
use crate::deferred::DeferredTasks;
use crate::region::{RegionError, RegionRegistry};

/// Distance of the camera from the globe center.
pub const CAMERA_DISTANCE: f64 = 2.0;

/// Planned length of a navigation, in seconds.
pub const NAVIGATION_DURATION: f64 = 5.0;

/// Progress at which a navigation counts as finished.
///
/// With a 5.0 s duration the camera stops after 0.75 s, at 15% of the way to
/// the target direction. This is most likely an unintended cutoff, but the
/// camera behavior depends on it exactly.
pub const COMPLETION_THRESHOLD: f64 = 0.15;

/// Delay between a navigation completing and auto-rotation returning to
/// [`CRUISING_ROTATION_SPEED`].
pub const RATE_RESET_DELAY: f64 = 1.0;

/// Which state the navigator is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationPhase {
    /// No navigation in flight; the camera is left to auto-rotation.
    Idle,
    /// Moving toward a region.
    Navigating,
}

/// Observable state of the current (or last) navigation.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    /// True while navigating.
    pub active: bool,
    /// Destination of the current or last navigation.
    pub target: GeoCoordinate,
    /// Name of the destination region, if any navigation has started.
    pub target_region: Option<String>,
    /// Navigator clock value when the navigation started.
    pub start_time: f64,
    /// Planned duration in seconds.
    pub duration: f64,
    /// Interpolation progress in `[0, 1]`. Always 0 while idle.
    pub progress: f64,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: false,
            target: GeoCoordinate::default(),
            target_region: None,
            start_time: 0.0,
            duration: NAVIGATION_DURATION,
            progress: 0.0,
        }
    }
}

/// Camera position plus a rotation aiming it at the globe center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    /// Camera position.
    pub position: DVec3,
    /// Orientation; local +Z is the viewing direction.
    pub rotation: DQuat,
}

impl CameraPose {
    /// Pose at `position` looking at the origin with +Y as up.
    pub fn looking_at_origin(position: DVec3) -> Self {
        let forward = (-position).normalize_or_zero();
        if forward == DVec3::ZERO {
            return Self {
                position,
                rotation: DQuat::IDENTITY,
            };
        }

        let mut right = DVec3::Y.cross(forward).normalize_or_zero();
        if right == DVec3::ZERO {
            // Looking straight along the pole.
            right = DVec3::X;
        }
        let up = forward.cross(right);

        Self {
            position,
            rotation: DQuat::from_mat3(&DMat3::from_cols(right, up, forward)),
        }
    }

    /// Unit viewing direction.
    pub fn forward(&self) -> DVec3 {
        self.rotation * DVec3::Z
    }
}

/// Drives the camera toward named regions and manages auto-rotation speed.
///
/// One instance per camera. All methods are called from the frame loop; the
/// navigator keeps its own clock, advanced by [`advance`](Self::advance) or
/// set by [`tick`](Self::tick).
#[derive(Clone, Debug)]
pub struct CameraNavigator {
    registry: RegionRegistry,
    state: NavigationState,
    rotation: AutoRotation,
    resets: DeferredTasks<f64>,
    clock: f64,
    camera_distance: f64,
}

impl CameraNavigator {
    /// Create an idle navigator over a finished region registry.
    pub fn new(registry: RegionRegistry) -> Self {
        Self {
            registry,
            state: NavigationState::default(),
            rotation: AutoRotation::default(),
            resets: DeferredTasks::new(),
            clock: 0.0,
            camera_distance: CAMERA_DISTANCE,
        }
    }

    /// Registry the navigator resolves region names against.
    pub fn registry(&self) -> &RegionRegistry {
        &self.registry
    }

    /// Current navigation state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> NavigationPhase {
        if self.state.active {
            NavigationPhase::Navigating
        } else {
            NavigationPhase::Idle
        }
    }

    /// True while a navigation is in flight.
    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Progress of the in-flight navigation; 0 while idle.
    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    /// Navigator clock in seconds.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Auto-rotation settings, including the current speed.
    pub fn auto_rotation(&self) -> &AutoRotation {
        &self.rotation
    }

    /// Enable or disable ambient rotation without touching its speed.
    pub fn set_auto_rotation_enabled(&mut self, enabled: bool) {
        self.rotation.enabled = enabled;
    }

    /// Current auto-rotation speed.
    pub fn rotation_speed(&self) -> f64 {
        self.rotation.speed
    }

    /// Number of deferred speed resets waiting to fire.
    pub fn pending_resets(&self) -> usize {
        self.resets.pending()
    }

    /// Distance the camera is kept at while navigating.
    pub fn camera_distance(&self) -> f64 {
        self.camera_distance
    }

    /// Start navigating toward `region`, replacing any navigation in flight.
    ///
    /// Starts a new navigation epoch, which cancels any pending speed reset
    /// from an earlier navigation.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnknownRegion`] if `region` is not registered.
    /// The navigator is left untouched in that case.
    pub fn begin_navigation(&mut self, region: &str) -> Result<(), RegionError> {
        let target = self.registry.lookup(region)?;

        let (epoch, cancelled) = self.resets.advance_epoch();
        if cancelled > 0 {
            log::debug!("Navigation epoch {epoch} cancelled {cancelled} pending speed reset(s)");
        }

        self.state = NavigationState {
            active: true,
            target,
            target_region: Some(region.to_string()),
            start_time: self.clock,
            duration: NAVIGATION_DURATION,
            progress: 0.0,
        };
        self.rotation.speed = NAVIGATION_ROTATION_SPEED;

        log::debug!(
            "Navigating to {region} ({target}) at t={:.3}, epoch {epoch}",
            self.clock
        );
        Ok(())
    }

    /// Advance the navigation to `current_time` and return the new camera
    /// position. While idle the input position is returned unchanged.
    ///
    /// Also sets the navigator clock to `current_time` and fires any speed
    /// reset that has come due.
    pub fn tick(&mut self, current_time: f64, camera_position: DVec3) -> DVec3 {
        self.clock = current_time;
        self.fire_due_resets();

        if !self.state.active {
            return camera_position;
        }

        let elapsed = current_time - self.state.start_time;
        let progress = (elapsed / self.state.duration).clamp(0.0, 1.0);
        self.state.progress = progress;

        let target = project(self.state.target, self.camera_distance);
        let from_dir = camera_position.normalize_or_zero();
        let to_dir = target.normal();

        let direction = from_dir
            .lerp(to_dir, progress)
            .try_normalize()
            .or_else(|| from_dir.try_normalize())
            .unwrap_or(to_dir);
        let position = direction * self.camera_distance;

        if progress >= COMPLETION_THRESHOLD {
            self.complete();
        }

        position
    }

    /// Advance the clock by `delta` seconds: apply auto-rotation, then the
    /// navigation, and return the resulting pose aimed at the globe center.
    pub fn advance(&mut self, delta: f64, camera_position: DVec3) -> CameraPose {
        let delta = delta.max(0.0);
        let rotated = self.rotation.rotate(camera_position, delta);
        let position = self.tick(self.clock + delta, rotated);
        CameraPose::looking_at_origin(position)
    }

    fn complete(&mut self) {
        self.state.active = false;
        self.state.progress = 0.0;
        self.rotation.speed = SETTLE_ROTATION_SPEED;
        self.resets
            .schedule(self.clock + RATE_RESET_DELAY, CRUISING_ROTATION_SPEED);

        log::debug!(
            "Navigation to {} finished at t={:.3}",
            self.state.target_region.as_deref().unwrap_or("?"),
            self.clock
        );
    }

    fn fire_due_resets(&mut self) {
        for speed in self.resets.poll(self.clock) {
            log::debug!("Auto-rotation speed reset to {speed} at t={:.3}", self.clock);
            self.rotation.speed = speed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn navigator() -> CameraNavigator {
        CameraNavigator::new(RegionRegistry::builtin())
    }

    fn start_camera() -> DVec3 {
        DVec3::new(0.0, 0.0, CAMERA_DISTANCE)
    }

    #[test]
    fn test_starts_idle() {
        let nav = navigator();
        assert_eq!(nav.phase(), NavigationPhase::Idle);
        assert_eq!(nav.progress(), 0.0);
        assert_eq!(nav.rotation_speed(), CRUISING_ROTATION_SPEED);
    }

    #[test]
    fn test_unknown_region_leaves_state_unchanged() {
        let mut nav = navigator();
        let err = nav.begin_navigation("atlantis").unwrap_err();
        assert_eq!(err, RegionError::UnknownRegion("atlantis".to_string()));
        assert!(!nav.is_active());
        assert_eq!(nav.rotation_speed(), CRUISING_ROTATION_SPEED);

        nav.begin_navigation("asia").unwrap();
        let before = nav.state().clone();
        assert!(nav.begin_navigation("lemuria").is_err());
        assert_eq!(nav.state(), &before);
        assert!(nav.is_active());
    }

    #[test]
    fn test_begin_slows_rotation() {
        let mut nav = navigator();
        nav.begin_navigation("europe").unwrap();
        assert_eq!(nav.phase(), NavigationPhase::Navigating);
        assert_eq!(nav.rotation_speed(), NAVIGATION_ROTATION_SPEED);
        assert_eq!(nav.state().target, GeoCoordinate::new(50.0, 10.0));
        assert_eq!(nav.state().duration, NAVIGATION_DURATION);
    }

    #[test]
    fn test_tick_at_start_time_is_identity() {
        let mut nav = navigator();
        nav.tick(3.0, start_camera());
        nav.begin_navigation("europe").unwrap();
        assert_eq!(nav.state().start_time, 3.0);

        let cam = start_camera();
        let pos = nav.tick(3.0, cam);
        assert_eq!(nav.progress(), 0.0);
        assert!((pos - cam).length() < EPS);
    }

    #[test]
    fn test_camera_keeps_constant_distance() {
        let mut nav = navigator();
        nav.begin_navigation("south_america").unwrap();
        let mut cam = start_camera();
        for i in 1..=40 {
            cam = nav.tick(i as f64 * 0.02, cam);
            assert!((cam.length() - CAMERA_DISTANCE).abs() < EPS);
        }
    }

    #[test]
    fn test_camera_moves_toward_target() {
        let mut nav = navigator();
        nav.begin_navigation("africa").unwrap();
        let target = project(GeoCoordinate::new(0.0, 20.0), CAMERA_DISTANCE).0;

        let cam = start_camera();
        let before = cam.distance(target);
        let after = nav.tick(0.5, cam).distance(target);
        assert!(after < before, "expected {after} < {before}");
    }

    #[test]
    fn test_completes_at_threshold_not_duration() {
        let mut nav = navigator();
        nav.begin_navigation("europe").unwrap();
        let cam = start_camera();

        nav.tick(0.7499, cam);
        assert!(nav.is_active());
        assert!((nav.progress() - 0.7499 / NAVIGATION_DURATION).abs() < EPS);

        nav.tick(0.75, cam);
        assert!(!nav.is_active());
        assert_eq!(nav.progress(), 0.0);
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let mut nav = navigator();
        nav.begin_navigation("europe").unwrap();
        let cam = start_camera();
        nav.tick(1.0, cam);
        assert!(!nav.is_active());

        let other = DVec3::new(1.0, 1.0, 1.0);
        assert_eq!(nav.tick(2.0, other), other);
        assert_eq!(nav.progress(), 0.0);
    }

    #[test]
    fn test_completion_settles_then_resets_speed() {
        let mut nav = navigator();
        nav.begin_navigation("asia").unwrap();
        let cam = start_camera();
        nav.tick(0.8, cam);
        assert!(!nav.is_active());
        assert_eq!(nav.rotation_speed(), SETTLE_ROTATION_SPEED);
        assert_eq!(nav.pending_resets(), 1);

        nav.tick(1.7, cam);
        assert_eq!(nav.rotation_speed(), SETTLE_ROTATION_SPEED);

        nav.tick(1.9, cam);
        assert_eq!(nav.rotation_speed(), CRUISING_ROTATION_SPEED);
        assert_eq!(nav.pending_resets(), 0);
    }

    #[test]
    fn test_new_navigation_cancels_stale_reset() {
        let mut nav = navigator();
        let cam = start_camera();
        nav.begin_navigation("asia").unwrap();
        nav.tick(0.8, cam); // reset due at 1.8
        assert_eq!(nav.pending_resets(), 1);

        nav.tick(1.0, cam);
        nav.begin_navigation("europe").unwrap();
        assert_eq!(nav.pending_resets(), 0);

        // Past the old reset time, the new navigation still holds the slow speed.
        nav.tick(1.7, cam);
        assert!(nav.is_active());
        nav.tick(1.8, cam);
        assert_eq!(nav.rotation_speed(), SETTLE_ROTATION_SPEED);
    }

    #[test]
    fn test_double_begin_matches_single_begin() {
        let mut once = navigator();
        let mut twice = navigator();
        once.tick(2.0, start_camera());
        twice.tick(2.0, start_camera());

        once.begin_navigation("north_america").unwrap();
        twice.begin_navigation("north_america").unwrap();
        twice.begin_navigation("north_america").unwrap();
        assert_eq!(once.state(), twice.state());

        let (mut a, mut b) = (start_camera(), start_camera());
        for i in 1..=10 {
            let t = 2.0 + i as f64 * 0.05;
            a = once.tick(t, a);
            b = twice.tick(t, b);
            assert!((a - b).length() < EPS);
        }
        assert_eq!(once.is_active(), twice.is_active());
    }

    #[test]
    fn test_retarget_mid_flight_restarts_clock() {
        let mut nav = navigator();
        let cam = start_camera();
        nav.begin_navigation("europe").unwrap();
        nav.tick(0.5, cam);
        nav.begin_navigation("africa").unwrap();
        assert_eq!(nav.state().start_time, 0.5);
        assert_eq!(nav.state().target_region.as_deref(), Some("africa"));
        assert_eq!(nav.progress(), 0.0);
    }

    #[test]
    fn test_advance_completes_after_about_three_quarters_second() {
        let mut nav = navigator();
        nav.begin_navigation("europe").unwrap();
        let dt = 1.0 / 60.0;
        let mut cam = start_camera();
        let mut completed_at = None;
        for _ in 0..120 {
            cam = nav.advance(dt, cam).position;
            if !nav.is_active() {
                completed_at = Some(nav.clock());
                break;
            }
        }
        let t = completed_at.expect("navigation should complete");
        assert!((t - 0.75).abs() <= dt + EPS, "completed at {t}");
    }

    #[test]
    fn test_pose_looks_at_origin() {
        for pos in [
            DVec3::new(0.0, 0.0, 2.0),
            DVec3::new(1.0, 1.0, -1.0),
            DVec3::new(0.0, 2.0, 0.0),
        ] {
            let pose = CameraPose::looking_at_origin(pos);
            assert!((pose.forward() - (-pos).normalize()).length() < 1e-9);
        }
    }
}
