//! Logging initialization.
//!
//! The terminal belongs to the game screen, so log lines go to a file.
//! `SEQUENCE_DUEL_LOG` (an `EnvFilter` directive) overrides the verbosity
//! chosen on the command line.

use crate::config::project_dirs;
use crate::constants::{LOG_ENV_VAR, LOG_FILE_NAME};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Maps a `-v` count to a tracing directive.
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Default log file location in the platform data directory.
pub fn default_log_path() -> io::Result<PathBuf> {
    let dirs = project_dirs().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Could not determine data directory")
    })?;
    Ok(dirs.data_dir().join(LOG_FILE_NAME))
}

/// Install the global subscriber, appending to `path`.
///
/// Uses `try_init()` so a second call is a no-op.
pub fn init_logging(path: &Path, verbosity: u8) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(verbosity >= 2)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
