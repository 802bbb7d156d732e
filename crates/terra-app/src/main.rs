//! The `terra` binary: runs the globe navigation loop headless.

use std::process::ExitCode;

use clap::Parser;
use terra_app::{AppError, FrameDriver, PlatformDirs, frame_driver};
use terra_config::{CliArgs, Config};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("terra: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let dirs = match &args.config {
        Some(dir) => PlatformDirs::with_config_dir(dir),
        None => PlatformDirs::resolve()?,
    };
    dirs.create_all()?;

    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    config.validate()?;

    terra_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    tracing::info!(
        config = %dirs.config_dir.display(),
        logs = %dirs.log_dir.display(),
        "Terra starting"
    );

    let mut driver = FrameDriver::from_config(&config)?;
    tracing::info!(
        "Placed {} markers, touring {:?}",
        driver.markers().len(),
        config.tour.stops
    );

    if args.realtime {
        frame_driver::run_realtime(&mut driver, &config);
    } else {
        frame_driver::run_headless(&mut driver, &config);
    }
    Ok(())
}
