use clap::Parser;
use colored::Colorize;

use focustimer::cli::args::{Cli, Commands, TuiArgs};
use focustimer::cli::commands;
use focustimer::config::Config;
use focustimer::error::FocusTimerError;
use focustimer::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), FocusTimerError> {
    let cli = Cli::parse();
    let format = cli.output;

    let output = match cli.command {
        None => commands::tui(&TuiArgs::default())?,
        Some(Commands::Tui(args)) => commands::tui(&args)?,
        Some(Commands::Config(args)) => {
            init_cli_logging();
            commands::config(args.command, format)?
        }
        Some(Commands::Clock) => {
            init_cli_logging();
            commands::clock(format)?
        }
        Some(Commands::Completions { shell }) => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Log to stderr at the configured level, or `info` if the config is unreadable.
fn init_cli_logging() {
    let level = Config::load().map_or_else(|_| "info".to_string(), |c| c.logging.level);
    logging::init_stderr(&level);
}
