use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::config::ConfigKey;

#[derive(Parser)]
#[command(name = "focustimer")]
#[command(about = "A terminal Pomodoro timer, stopwatch and clock")]
#[command(long_about = "focustimer - A terminal Pomodoro timer, stopwatch and clock

Runs a Pomodoro work/break cycle with a long break after every fourth
work session, a stopwatch, and a live clock with quick-focus shortcuts.

QUICK START:
  focustimer                         Open the timer
  focustimer tui --work 50           Open with 50-minute work segments
  focustimer config set work 30      Change the default work length
  focustimer clock                   Print the current time

Press ? inside the timer for key bindings.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Command to run; opens the timer when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer
    ///
    /// Flags override the config file for this run only.
    ///
    /// # Examples
    ///
    ///   focustimer tui
    ///   focustimer tui --work 50 --short-break 10
    ///   focustimer tui --dark --fullscreen --no-sound
    #[command(alias = "t")]
    Tui(TuiArgs),

    /// Inspect or change the configuration file
    ///
    /// # Subcommands
    ///
    ///   show         Print the current configuration
    ///   set          Change one value
    ///   reset        Restore defaults
    ///   path         Print the config file location
    ///   backgrounds  List background presets
    Config(ConfigArgs),

    /// Print the current time and date
    Clock,

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   focustimer completions zsh > ~/.zsh/completions/_focustimer
    ///   source <(focustimer completions bash)
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Overrides for a single TUI run.
#[derive(Args, Debug, Default)]
pub struct TuiArgs {
    /// Work segment length in minutes (1-60)
    #[arg(long, short = 'w', value_parser = clap::value_parser!(u32).range(1..=60))]
    pub work: Option<u32>,

    /// Short break length in minutes (1-60)
    #[arg(long, short = 's', value_parser = clap::value_parser!(u32).range(1..=60))]
    pub short_break: Option<u32>,

    /// Long break length in minutes (1-60)
    #[arg(long, short = 'l', value_parser = clap::value_parser!(u32).range(1..=60))]
    pub long_break: Option<u32>,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Start in fullscreen layout
    #[arg(long)]
    pub fullscreen: bool,

    /// Background preset name, or "custom"
    #[arg(long, short = 'b')]
    pub background: Option<String>,

    /// Do not ring the terminal bell
    #[arg(long)]
    pub no_sound: bool,

    /// Do not show desktop notifications
    #[arg(long)]
    pub no_desktop: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the current configuration
    Show,

    /// Change one value
    ///
    /// Examples:
    ///   focustimer config set work 30
    ///   focustimer config set dark-mode true
    ///   focustimer config set background "Focus Only"
    ///   focustimer config set custom-colors "#ff9a9e,#fad0c4"
    Set {
        /// Setting to change
        #[arg(value_enum)]
        key: ConfigKey,

        /// New value
        value: String,
    },

    /// Restore the default configuration
    Reset,

    /// Print the config file location
    Path,

    /// List background presets and the custom slot
    Backgrounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_command() {
        let cli = Cli::try_parse_from(["focustimer"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.output, OutputFormat::Pretty);
    }

    #[test]
    fn test_cli_tui_overrides() {
        let cli = Cli::try_parse_from([
            "focustimer",
            "tui",
            "--work",
            "50",
            "-s",
            "10",
            "--dark",
            "--no-sound",
        ])
        .unwrap();
        if let Some(Commands::Tui(args)) = cli.command {
            assert_eq!(args.work, Some(50));
            assert_eq!(args.short_break, Some(10));
            assert_eq!(args.long_break, None);
            assert!(args.dark);
            assert!(args.no_sound);
            assert!(!args.fullscreen);
        } else {
            panic!("Expected Tui command");
        }
    }

    #[test]
    fn test_cli_tui_rejects_out_of_range() {
        assert!(Cli::try_parse_from(["focustimer", "tui", "--work", "0"]).is_err());
        assert!(Cli::try_parse_from(["focustimer", "tui", "--long-break", "61"]).is_err());
        assert!(Cli::try_parse_from(["focustimer", "tui", "--work", "ten"]).is_err());
    }

    #[test]
    fn test_cli_config_set() {
        let cli =
            Cli::try_parse_from(["focustimer", "config", "set", "short-break", "7"]).unwrap();
        if let Some(Commands::Config(args)) = cli.command {
            if let ConfigCommands::Set { key, value } = args.command {
                assert_eq!(key, ConfigKey::ShortBreak);
                assert_eq!(value, "7");
            } else {
                panic!("Expected Set subcommand");
            }
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_config_set_unknown_key() {
        assert!(Cli::try_parse_from(["focustimer", "config", "set", "lunch", "7"]).is_err());
    }

    #[test]
    fn test_cli_json_output_global() {
        let cli = Cli::try_parse_from(["focustimer", "config", "show", "-o", "json"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["focustimer", "completions", "fish"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Fish })
        ));
    }

    #[test]
    fn test_output_format_default() {
        assert!(matches!(OutputFormat::default(), OutputFormat::Pretty));
    }
}
