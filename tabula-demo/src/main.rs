mod app;
mod config;
mod error;
mod paths;
mod users;

use std::fs::{self, File};

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::config::DemoConfig;
use crate::error::DemoError;

fn init_logging() -> Result<(), DemoError> {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(&path)?)?;
    log::info!("logging to {}", path.display());
    Ok(())
}

fn run() -> Result<(), DemoError> {
    init_logging()?;
    let config = DemoConfig::load()?;
    App::new(config).run()
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
