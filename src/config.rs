//! TOML configuration.
//!
//! The file is looked up in this order:
//! 1. the `--config` command line flag,
//! 2. the `TASKPLANNER_CONFIG` environment variable,
//! 3. `~/.config/taskplanner/config.toml` (on Linux).
//!
//! A missing file means defaults. Nothing is ever written back.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::week::WeekStart;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlannerConfig {
    /// Name shown in the "Welcome, ..." greeting.
    pub user_name: String,
    pub week_start: WeekStart,
    /// Seed the session with the built-in sample tasks.
    pub sample_tasks: bool,
    /// First hour visible on the timeline when the screen opens.
    pub timeline_start_hour: u32,
    pub log: LogConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. "info" or "taskplanner=debug".
    pub level: String,
    /// Log file used by the interactive screen.
    pub file: Option<PathBuf>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            user_name: std::env::var("USER").unwrap_or_else(|_| "friend".to_string()),
            week_start: WeekStart::default(),
            sample_tasks: true,
            timeline_start_hour: 12,
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl PlannerConfig {
    /// Default location of the config file.
    pub fn default_path() -> PathBuf {
        std::env::var("TASKPLANNER_CONFIG").map(PathBuf::from).unwrap_or_else(|_| {
            let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
            p.push("taskplanner");
            p.push("config.toml");
            p
        })
    }

    /// Loads the config from `path`, or from [`PlannerConfig::default_path`].
    pub fn load(path: Option<&Path>) -> Result<PlannerConfig, PlannerError> {
        match path {
            Some(p) => Self::load_from(p),
            None => Self::load_from(&Self::default_path()),
        }
    }

    /// Loads the config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<PlannerConfig, PlannerError> {
        let content = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(PlannerConfig::default()),
            Err(e) => return Err(e.into()),
        };
        let mut cfg: PlannerConfig = toml::from_str(&content).map_err(|source| PlannerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.timeline_start_hour = cfg.timeline_start_hour.min(23);
        Ok(cfg)
    }

    /// Path of the log file written by the interactive screen.
    pub fn log_file(&self) -> PathBuf {
        self.log.file.clone().unwrap_or_else(|| {
            let mut p = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
            p.push("taskplanner");
            p.push("taskplanner.log");
            p
        })
    }
}
