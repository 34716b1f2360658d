use std::io::Write as _;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use omni_version::{
    Config, Meta,
    cli::{Cli, Commands, ConfigCommands},
    config::FORMAT_ENV,
    platform,
    report::{self, Flags},
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let Some(path) = &cli.config else {
        return Ok(Config::load()?);
    };
    let format = std::env::var(FORMAT_ENV).ok();
    Ok(Config::load_from_path(path)?.with_format_override(format.as_deref())?)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let mut stdout = std::io::stdout().lock();

    // No subcommand = show metadata
    let command = cli.command.unwrap_or(Commands::Show {
        format: None,
        compact: false,
        daemon_long: None,
    });

    match command {
        Commands::Show {
            format,
            compact,
            daemon_long,
        } => {
            let mut meta = Meta::current();
            if let Some(daemon_long) = daemon_long {
                meta = meta.with_daemon_long(daemon_long);
            }
            let format = format.unwrap_or(config.output.format);
            let pretty = config.output.pretty && !compact;
            write!(stdout, "{}", report::render_meta(&meta, format, pretty)?)?;
        }

        Commands::Os => {
            writeln!(stdout, "{}", platform::os_name())?;
        }

        Commands::Flags { format } => {
            let format = format.unwrap_or(config.output.format);
            let flags = Flags::current();
            write!(
                stdout,
                "{}",
                report::render_flags(&flags, format, config.output.pretty)?
            )?;
        }

        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                writeln!(stdout, "{}", toml::to_string_pretty(&config)?)?;
            }
            ConfigCommands::Path => {
                let path = match cli.config {
                    Some(path) => path,
                    None => Config::config_path()?,
                };
                writeln!(stdout, "{}", path.display())?;
            }
        },
    }

    Ok(())
}
