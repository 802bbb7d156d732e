//! Named regions and the camera navigator that flies the globe camera to them.

pub mod auto_rotation;
pub mod deferred;
pub mod navigator;
pub mod region;

pub use auto_rotation::{
    AutoRotation, CRUISING_ROTATION_SPEED, NAVIGATION_ROTATION_SPEED, SETTLE_ROTATION_SPEED,
};
pub use deferred::DeferredTasks;
pub use navigator::{
    CAMERA_DISTANCE, COMPLETION_THRESHOLD, CameraNavigator, CameraPose, NAVIGATION_DURATION,
    NavigationPhase, NavigationState, RATE_RESET_DELAY,
};
pub use region::{BUILTIN_REGIONS, Region, RegionError, RegionRegistry};
