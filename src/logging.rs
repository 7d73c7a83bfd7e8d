use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::PlannerConfig;
use crate::error::PlannerError;

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for one-shot commands.
    Stderr,
    /// The configured log file, for the interactive screen which owns the terminal.
    File,
}

fn env_filter(config: &PlannerConfig) -> EnvFilter {
    EnvFilter::try_from_env("TASKPLANNER_LOG").unwrap_or_else(|_| EnvFilter::new(&config.log.level))
}

/// Installs the global `tracing` subscriber.
///
/// An unusable log file disables logging instead of failing; only a second
/// installation in the same process is an error.
pub fn init_tracing(config: &PlannerConfig, target: LogTarget) -> Result<(), PlannerError> {
    let filter = env_filter(config);
    let result = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File => {
            let path = config.log_file();
            match open_log_file(&path) {
                Ok(file) => tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init(),
                Err(e) => {
                    // The screen owns the terminal, so logs are dropped rather than printed.
                    eprintln!("Warning: cannot open log file {}: {}. Logging disabled.", path.display(), e);
                    tracing_subscriber::fmt()
                        .with_env_filter(filter)
                        .with_writer(std::io::sink)
                        .try_init()
                }
            }
        }
    };
    result.map_err(|e| PlannerError::Logging(e.to_string()))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
