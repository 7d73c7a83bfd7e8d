use std::path::PathBuf;
use thiserror::Error;

/// Errors raised outside the scheduling core: configuration, form input and terminal I/O.
///
/// The core operations (`add_task`, `hourly_buckets_for`, `current_week`) never fail.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid date '{0}'. Use YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Use HH:MM.")]
    InvalidTime(String),

    #[error("Unknown category '{0}'. Expected one of: General, Bug, Idea, Modifiers, Challenge, Coding.")]
    UnknownCategory(String),

    #[error("Task name cannot be empty")]
    EmptyTaskName,

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
