use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dn_cli::commands::{diggers, projects, sessions};
use dn_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so command output can be piped
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let credential = config.credential()?;
    let client = config.client()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Commands::Projects(action) => projects::run(&mut out, &client, &credential, action)?,
        Commands::Diggers(action) => diggers::run(&mut out, &client, &credential, action)?,
        Commands::Sessions(action) => sessions::run(&mut out, &client, &credential, action)?,
    }
    out.flush()?;

    Ok(())
}
