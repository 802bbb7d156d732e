//! Top-level application errors.

use terra_config::ConfigError;
use terra_nav::RegionError;

use crate::platform::PlatformError;

/// Anything that can stop the viewer from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Region(#[from] RegionError),
}
