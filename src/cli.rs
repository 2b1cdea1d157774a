//! Command-line arguments for the dashboard binary.

use clap::{Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;

use crate::config;
use crate::dashboard::View;

#[derive(Parser)]
#[command(
    name = "blood-beacon",
    version,
    about = "Blood test analysis dashboard over built-in sample profiles",
    long_about = "Flags blood test values outside their reference range and lists the organs \
                  they may point to.\n\n\
                  Works only on the built-in sample profiles. For educational purposes only."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Explicit log level (overrides RUST_LOG).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Disable ANSI colors in tables and logs.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the sample profiles.
    Profiles,

    /// Show the dashboard for one profile.
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Profile name, matched exactly (see `profiles`).
    #[arg(long = "profile", short = 'p', default_value = config::DEFAULT_PROFILE)]
    pub profile: String,

    /// Which results tab to show.
    #[arg(long = "view", value_enum, default_value = "categories")]
    pub view: ViewArg,

    /// Print the profile and its analysis as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ViewArg {
    All,
    Abnormal,
    Categories,
}

impl From<ViewArg> for View {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::All => View::All,
            ViewArg::Abnormal => View::Abnormal,
            ViewArg::Categories => View::Categories,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}
