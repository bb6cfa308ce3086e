//! Binary entry point for the mountain backdrop.

use clap::Parser;
use ridgeline_config::{CliArgs, Config, default_config_dir};
use tracing::warn;

fn main() -> Result<(), winit::error::EventLoopError> {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().or_else(default_config_dir);
    let mut config = match &config_dir {
        Some(dir) => Config::load_or_create(dir).unwrap_or_else(|e| {
            eprintln!("config unavailable ({e}), using defaults");
            Config::default()
        }),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    ridgeline_log::init_logging(Some(&config));
    if config_dir.is_none() {
        warn!("no OS config directory; settings will not persist");
    }

    ridgeline_app::run(config)
}
