//! # Task Planner
//!
//! A single-screen day planner for the terminal. The screen shows the
//! current week, a 24-hour timeline for the selected day, and a form to add
//! tasks with a name, description, date, time and category.
//!
//! Tasks live in memory for the lifetime of the session; nothing is saved.
//!
//! ## Usage
//!
//! ### Interactive Mode (TUI)
//!
//! ```bash
//! taskplanner
//! # or explicitly
//! taskplanner ui
//! ```
//!
//! #### Key Bindings
//!
//! *   `q`: Quit
//! *   `←`/`→` (`h`/`l`): Previous / next day of the week
//! *   `1`-`7`: Jump to a day of the week
//! *   `t`: Back to today
//! *   `↑`/`↓` (`k`/`j`): Scroll the timeline
//! *   `a`: Add a task (`Tab` moves between fields, `←`/`→` picks the category,
//!     `Enter` creates, `Esc` cancels)
//!
//! ### Command Line Interface (CLI)
//!
//! ```bash
//! # Week strip for the current week
//! taskplanner week
//!
//! # Timeline of a given day, as JSON
//! taskplanner timeline --day 2023-04-07 --json
//! ```
//!
//! ## Configuration
//!
//! `~/.config/taskplanner/config.toml` (override with `--config` or
//! `TASKPLANNER_CONFIG`):
//!
//! ```toml
//! user_name = "Silvio"
//! week_start = "monday"
//! sample_tasks = false
//! timeline_start_hour = 8
//!
//! [log]
//! level = "debug"
//! ```
//!
//! Set `TASKPLANNER_LOG` to override the log filter.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use taskplanner::commands::{cmd_categories, cmd_timeline, cmd_week};
use taskplanner::config::PlannerConfig;
use taskplanner::error::PlannerError;
use taskplanner::logging::{init_tracing, LogTarget};
use taskplanner::tui::run_tui;

#[derive(Parser)]
#[command(name = "taskplanner")]
#[command(about = "Single-screen day planner", long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the days of the current week
    Week {
        /// Any date inside the week, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the 24-hour timeline of a day
    Timeline {
        /// Day to show, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        day: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Start from an empty task list
        #[arg(long)]
        no_sample: bool,
    },
    /// List task categories
    Categories,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
    /// Open interactive TUI
    Ui,
}

fn run(cli: Cli) -> Result<(), PlannerError> {
    let config = PlannerConfig::load(cli.config.as_deref())?;
    let target = match cli.command {
        Some(Commands::Ui) | None => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    init_tracing(&config, target)?;
    tracing::debug!(?config, "config loaded");

    match cli.command {
        Some(Commands::Week { date, json }) => cmd_week(&config, date, json),
        Some(Commands::Timeline { day, json, no_sample }) => cmd_timeline(&config, day, json, no_sample),
        Some(Commands::Categories) => {
            cmd_categories();
            Ok(())
        }
        Some(Commands::Completions { shell }) => {
            let shell_enum = match shell.as_str() {
                "bash" => Shell::Bash,
                "zsh" => Shell::Zsh,
                "fish" => Shell::Fish,
                "powershell" => Shell::PowerShell,
                "elvish" => Shell::Elvish,
                _ => {
                    eprintln!("Unsupported shell: {}", shell);
                    return Ok(());
                }
            };
            let mut cmd = Cli::command();
            generate(shell_enum, &mut cmd, "taskplanner", &mut io::stdout());
            Ok(())
        }
        Some(Commands::Ui) | None => run_tui(config),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "taskplanner failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
