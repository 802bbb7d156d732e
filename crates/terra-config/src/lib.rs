//! Configuration for the Terra globe viewer.
//!
//! Settings persist to disk as a RON file, tolerate missing or unknown
//! fields, support hot-reload detection, and accept CLI overrides via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, GlobeConfig, LocationConfig, TourConfig, WindowConfig};
pub use error::ConfigError;
