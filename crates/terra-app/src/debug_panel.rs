//! Read-only snapshot of navigation state for the debug panel.

use serde::Serialize;

/// Values shown in the debug panel, captured once per render.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DebugPanel {
    pub frame: u64,
    pub sim_time: f64,
    /// Navigation progress in `[0, 1]`; 0 while idle.
    pub progress: f64,
    pub active: bool,
    pub target_region: Option<String>,
    pub rotation_speed: f64,
    pub camera_position: [f64; 3],
    pub camera_distance: f64,
    pub pending_resets: usize,
}

impl DebugPanel {
    /// One-line JSON rendering for the log.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
