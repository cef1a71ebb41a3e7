use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ws_cli::commands::{catalog, check, schedule};
use ws_cli::{Cli, Commands, Config, Scheduler};

/// Load config and open the scheduler over the configured catalog.
fn open_scheduler(cli: &Cli) -> Result<Scheduler> {
    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut scheduler = Scheduler::open(&config.catalog_path).with_context(|| {
        format!(
            "failed to load course catalog {}",
            config.catalog_path.display()
        )
    })?;
    scheduler.set_schedule_title(config.schedule_title);
    Ok(scheduler)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::Catalog { json }) => {
            let scheduler = open_scheduler(&cli)?;
            catalog::run(&mut stdout, &scheduler, *json)?;
        }
        Some(Commands::Schedule(args)) => {
            let mut scheduler = open_scheduler(&cli)?;
            schedule::run(&mut stdout, &mut scheduler, args)?;
        }
        Some(Commands::Check(selection)) => {
            let mut scheduler = open_scheduler(&cli)?;
            check::run(&mut stdout, &mut scheduler, selection)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
