//! Per-frame driver: owns the camera, the markers, and the navigator.
//!
//! Each simulation step issues any tour stop that has come due, then advances
//! the navigator (auto-rotation plus navigation) and stores the resulting
//! camera pose for the renderer.

use std::collections::VecDeque;

use glam::DVec3;
use terra_config::Config;
use terra_geo::{GeoCoordinate, Marker, SPHERE_RADIUS, place_markers};
use terra_nav::{CAMERA_DISTANCE, CameraNavigator, CameraPose, RegionError, RegionRegistry};
use tracing::{debug, info, info_span, warn};

use crate::debug_panel::DebugPanel;
use crate::game_loop::GameLoop;

/// Totals reported after a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub updates: u64,
    pub sim_time: f64,
    pub navigations_started: u32,
    pub final_pose: CameraPose,
}

/// Frame-level owner of the globe camera.
pub struct FrameDriver {
    navigator: CameraNavigator,
    camera: CameraPose,
    markers: Vec<Marker>,
    tour: VecDeque<String>,
    seconds_per_stop: f64,
    next_stop_at: f64,
    navigations_started: u32,
    frame: u64,
}

impl FrameDriver {
    /// Build a driver over the built-in regions with markers and tour taken
    /// from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnknownRegion`] if a tour stop names a region
    /// that is not registered.
    pub fn from_config(config: &Config) -> Result<Self, RegionError> {
        let registry = RegionRegistry::builtin();
        for stop in &config.tour.stops {
            registry.lookup(stop)?;
        }

        let markers = place_markers(
            config
                .globe
                .markers
                .iter()
                .map(|m| (m.label.as_str(), GeoCoordinate::new(m.latitude, m.longitude))),
            SPHERE_RADIUS,
        );
        for marker in &markers {
            debug!("Marker '{}' at {}", marker.label, marker.coordinate);
        }

        let mut navigator = CameraNavigator::new(registry);
        navigator.set_auto_rotation_enabled(config.globe.auto_rotate);

        Ok(Self {
            navigator,
            camera: CameraPose::looking_at_origin(DVec3::new(0.0, 0.0, CAMERA_DISTANCE)),
            markers,
            tour: config.tour.stops.iter().cloned().collect(),
            seconds_per_stop: config.tour.seconds_per_stop,
            next_stop_at: 0.0,
            navigations_started: 0,
            frame: 0,
        })
    }

    /// Request navigation to `region`, as a UI button would.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnknownRegion`] for unregistered names.
    pub fn request_navigation(&mut self, region: &str) -> Result<(), RegionError> {
        self.navigator.begin_navigation(region)?;
        self.navigations_started += 1;
        info!("Navigating to {region}");
        Ok(())
    }

    /// Advance one simulation step of `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        if !self.tour.is_empty() && self.navigator.clock() >= self.next_stop_at {
            if let Some(stop) = self.tour.pop_front() {
                // Stops were validated against the registry at construction.
                if let Err(e) = self.request_navigation(&stop) {
                    warn!("Skipping tour stop: {e}");
                }
            }
            self.next_stop_at = self.navigator.clock() + self.seconds_per_stop;
        }

        self.camera = self.navigator.advance(dt, self.camera.position);
    }

    /// Mark a rendered frame.
    pub fn end_frame(&mut self) {
        self.frame += 1;
    }

    /// Current camera pose.
    pub fn camera(&self) -> &CameraPose {
        &self.camera
    }

    /// Markers placed at startup.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// The navigator driving the camera.
    pub fn navigator(&self) -> &CameraNavigator {
        &self.navigator
    }

    /// Tour stops not yet issued.
    pub fn remaining_stops(&self) -> usize {
        self.tour.len()
    }

    /// Snapshot for the debug panel.
    pub fn debug_panel(&self) -> DebugPanel {
        let state = self.navigator.state();
        let p = self.camera.position;
        DebugPanel {
            frame: self.frame,
            sim_time: self.navigator.clock(),
            progress: self.navigator.progress(),
            active: state.active,
            target_region: state.target_region.clone(),
            rotation_speed: self.navigator.rotation_speed(),
            camera_position: [p.x, p.y, p.z],
            camera_distance: p.length(),
            pending_resets: self.navigator.pending_resets(),
        }
    }

    fn summary(&self, game_loop: &GameLoop) -> RunSummary {
        RunSummary {
            frames: game_loop.frame_count(),
            updates: game_loop.update_count(),
            sim_time: game_loop.total_sim_time(),
            navigations_started: self.navigations_started,
            final_pose: self.camera,
        }
    }

    fn render(&mut self, config: &Config) {
        if config.debug.show_panel
            && self.frame % u64::from(config.debug.panel_interval_frames.max(1)) == 0
        {
            match self.debug_panel().to_json() {
                Ok(json) => info!(target: "terra::panel", "{json}"),
                Err(e) => warn!("Debug panel serialization failed: {e}"),
            }
        }
        self.end_frame();
    }
}

/// Run the driver at a fixed simulated frame rate until
/// `config.tour.run_seconds` of simulation time have elapsed. Never sleeps.
pub fn run_headless(driver: &mut FrameDriver, config: &Config) -> RunSummary {
    let _span = info_span!("headless_run", run_seconds = config.tour.run_seconds).entered();
    let mut game_loop = GameLoop::new();

    while game_loop.total_sim_time() < config.tour.run_seconds {
        game_loop.step(
            crate::FIXED_DT,
            |dt, _| driver.update(dt),
            |_| {},
        );
        driver.render(config);
    }

    let summary = driver.summary(&game_loop);
    info!(
        "Headless run finished: {} frames, {:.2}s simulated, {} navigations",
        summary.frames, summary.sim_time, summary.navigations_started
    );
    summary
}

/// Run the driver against the wall clock, sleeping between frames.
pub fn run_realtime(driver: &mut FrameDriver, config: &Config) -> RunSummary {
    let _span = info_span!("realtime_run", run_seconds = config.tour.run_seconds).entered();
    let frame_budget = std::time::Duration::from_secs_f64(crate::FIXED_DT);
    let mut game_loop = GameLoop::new();

    while game_loop.total_sim_time() < config.tour.run_seconds {
        let frame_start = std::time::Instant::now();
        game_loop.tick(|dt, _| driver.update(dt), |_| {});
        driver.render(config);
        if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    let summary = driver.summary(&game_loop);
    info!(
        "Realtime run finished: {} frames, {:.2}s simulated, {} navigations",
        summary.frames, summary.sim_time, summary.navigations_started
    );
    summary
}
