use anyhow::Result;
use clap::Parser;

use sample_list::cli::{Cli, Command};
use sample_list::commands;
use sample_list::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    match cli.command {
        Command::Tui(args) => {
            tracing::info!(?args, "Starting TUI");
            commands::tui::run(args, &config)?;
        }
        Command::Generate(args) => {
            tracing::info!(?args, "Starting generate");
            commands::generate::run(args, &config)?;
        }
        Command::Completions(args) => {
            commands::completions::run(args)?;
        }
        Command::Man => {
            commands::completions::man()?;
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sample_list={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
