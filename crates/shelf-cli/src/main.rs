//! Shelf CLI - inventory scripts against an in-memory library
//!
//! This is the command-line interface for Shelf. It drives the core library
//! through small line-oriented scripts and manages the config file.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod output;
mod script;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::{config as config_cmd, misc, run as run_cmd};
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        eprintln!("Error: {}", e);
        std::process::exit(CliError::exit_code_for(&e));
    }
}

/// Install the stderr subscriber.
///
/// `SHELF_LOG` takes an `EnvFilter` directive; without it the level is
/// `warn`, or `debug` under `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SHELF_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second install fails harmlessly.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Run(args)) => {
            run_cmd::handle_run(ctx, args)?;
        }
        Some(Commands::Config(ConfigCommands::Init(args))) => {
            config_cmd::handle_config_init(ctx, args)?;
        }
        Some(Commands::Config(ConfigCommands::Show)) => {
            config_cmd::handle_config_show(ctx)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args.shell)?;
        }
        None => {
            Cli::command().print_help()?;
            println!();
        }
    }
    Ok(())
}
