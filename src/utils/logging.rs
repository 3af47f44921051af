//! Logger setup.
//!
//! The terminal is in raw alternate-screen mode while the game runs, so log
//! output goes to `dinorun.log` in the platform cache directory instead of
//! stderr. `RUST_LOG` overrides the default `info` filter.

use directories::ProjectDirs;
use std::fs::{self, File};
use std::path::PathBuf;

/// Path of the log file, creating its directory if needed.
pub fn log_file_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "dinorun")?;
    let dir = dirs.cache_dir();
    fs::create_dir_all(dir).ok()?;
    Some(dir.join("dinorun.log"))
}

/// Install the global logger. Logging is disabled if the file can't be opened.
pub fn init() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    match log_file_path().and_then(|path| File::create(path).ok()) {
        Some(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }

    // A logger may already be installed (tests); keep it.
    let _ = builder.try_init();
}
