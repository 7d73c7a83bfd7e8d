//! Day planner core and terminal front end.
//!
//! The core (`week`, `schedule`, `models`) computes the current week strip
//! and groups tasks into the 24 hourly slots of a day. The `tui` and
//! `commands` modules render that output; they hold no scheduling logic.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod sample;
pub mod schedule;
pub mod tui;
pub mod week;
