//! Terra application framework: the frame loop that drives globe navigation.

pub mod debug_panel;
pub mod error;
pub mod frame_driver;
pub mod game_loop;
pub mod platform;

pub use debug_panel::DebugPanel;
pub use error::AppError;
pub use frame_driver::{FrameDriver, RunSummary, run_headless, run_realtime};
pub use game_loop::{FIXED_DT, GameLoop, MAX_FRAME_TIME};
pub use platform::{PlatformDirs, PlatformError};
