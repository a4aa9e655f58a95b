use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use shelf_core::{EngineKind, SearchOrder, SearchScope, VERSION};

/// Shelf - inventory of the physical books in a small library
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "SHELF_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log library operations to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Arguments for the `run` command
#[derive(Args)]
pub struct RunArgs {
    /// Script to execute (reads stdin when omitted or "-")
    #[arg(value_name = "SCRIPT")]
    pub script: Option<String>,

    /// Output as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Override the configured engine (small, big)
    #[arg(long, value_name = "ENGINE")]
    pub engine: Option<EngineKind>,

    /// Reject checkout/checkin of copies in the wrong state
    #[arg(long)]
    pub strict: bool,

    /// Override the configured search scope (catalog, on_shelf)
    #[arg(long, value_name = "SCOPE")]
    pub scope: Option<SearchScope>,

    /// Override the configured search order (oldest_first, newest_first)
    #[arg(long, value_name = "ORDER")]
    pub order: Option<SearchOrder>,
}

/// Arguments for the `config init` command
#[derive(Args)]
pub struct ConfigInitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a config file with default settings
    Init(ConfigInitArgs),

    /// Print the effective configuration
    Show,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an inventory script against a fresh library
    Run(RunArgs),

    /// Manage the config file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
