pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod logging;
pub mod models;

pub use analysis::{analyze, try_analyze};
pub use models::{AbnormalResult, AnalysisResult, ReferenceRange, TestResult};

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::commands::OutputFormat;
use crate::logging::{init_logging, LogConfig};

/// Entry point for the `blood-beacon` binary.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let color = !cli.no_color && io::stdout().is_terminal();

    let log_config = LogConfig {
        level: cli.log_level.map(Into::into),
        with_ansi: !cli.no_color && io::stderr().is_terminal(),
    };
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: {error}");
        return ExitCode::FAILURE;
    }

    tracing::debug!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    match execute(cli.command, color) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Command, color: bool) -> anyhow::Result<String> {
    match command {
        Command::Profiles => Ok(commands::render_profile_list(
            &commands::list_profiles(),
            color,
        )),
        Command::Show(args) => {
            let format = if args.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text { color }
            };
            let output = commands::show_dashboard(&args.profile, args.view.into(), format)?;
            Ok(output)
        }
    }
}
