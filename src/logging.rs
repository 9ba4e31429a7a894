//! File logging.
//!
//! The terminal belongs to the game while it runs, so log records go to a
//! file through `simplelog::WriteLogger`.

use crate::constants::LOG_FILE_NAME;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// `<data-local-dir>/snake/snake.log`, or the temp dir if there is no home.
pub fn default_log_path() -> PathBuf {
    ProjectDirs::from("", "", "snake")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_FILE_NAME)
}

/// Install the global logger writing to `path`, truncating any previous log.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file).context("logger already initialized")?;
    Ok(())
}
