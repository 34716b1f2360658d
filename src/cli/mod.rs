//! CLI command parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::build_info;
use crate::config::OutputFormat;

/// Omni version - build identity of Omni binaries.
#[derive(Parser)]
#[command(name = "omni-version")]
#[command(about = "Report build identity and platform flavor")]
#[command(version = build_info::LONG)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of the default.
    #[arg(long, global = true, env = "OMNI_VERSION_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show build metadata.
    Show {
        /// Output format (text or json).
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Print JSON on a single line.
        #[arg(long)]
        compact: bool,

        /// Long version reported by the daemon, included in the output.
        #[arg(long)]
        daemon_long: Option<String>,
    },

    /// Show the operating system name.
    Os,

    /// Show platform flavor and release flags.
    Flags {
        /// Output format (text or json).
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Manage configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration.
    Show,

    /// Show the configuration file path.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_no_args() {
        let cli = Cli::parse_from(["omni-version"]);
        assert_eq!(cli.verbose, 0);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_verbose_flag() {
        let cli = Cli::parse_from(["omni-version", "-v"]);
        assert_eq!(cli.verbose, 1);

        let cli = Cli::parse_from(["omni-version", "-vvv"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn cli_parses_show_defaults() {
        let cli = Cli::parse_from(["omni-version", "show"]);
        match cli.command {
            Some(Commands::Show {
                format,
                compact,
                daemon_long,
            }) => {
                assert!(format.is_none());
                assert!(!compact);
                assert!(daemon_long.is_none());
            }
            _ => panic!("expected Show command"),
        }
    }

    #[test]
    fn cli_parses_show_options() {
        let cli = Cli::parse_from([
            "omni-version",
            "show",
            "-f",
            "json",
            "--compact",
            "--daemon-long",
            "1.2.0-tabc",
        ]);
        match cli.command {
            Some(Commands::Show {
                format,
                compact,
                daemon_long,
            }) => {
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(compact);
                assert_eq!(daemon_long.as_deref(), Some("1.2.0-tabc"));
            }
            _ => panic!("expected Show command"),
        }
    }

    #[test]
    fn cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["omni-version", "show", "-f", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_os_command() {
        let cli = Cli::parse_from(["omni-version", "os"]);
        assert!(matches!(cli.command, Some(Commands::Os)));
    }

    #[test]
    fn cli_parses_flags_command() {
        let cli = Cli::parse_from(["omni-version", "flags", "--format", "json"]);
        match cli.command {
            Some(Commands::Flags { format }) => assert_eq!(format, Some(OutputFormat::Json)),
            _ => panic!("expected Flags command"),
        }
    }

    #[test]
    fn cli_parses_config_commands() {
        let cli = Cli::parse_from(["omni-version", "config", "show"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::Show
            })
        ));

        let cli = Cli::parse_from(["omni-version", "config", "path"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::Path
            })
        ));
    }

    #[test]
    fn cli_config_is_global() {
        let cli = Cli::parse_from(["omni-version", "os", "--config", "/tmp/omni.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/omni.toml")));
    }

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
