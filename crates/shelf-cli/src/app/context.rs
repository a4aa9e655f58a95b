//! Application context for the Shelf CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded library configuration.

use once_cell::unsync::OnceCell;

use shelf_core::{open_library, Library, LibraryConfig, TransitionPolicy};

use crate::cli::{Cli, RunArgs};
use crate::config::load_config;

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<LibraryConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&LibraryConfig> {
        self.config.get_or_try_init(|| load_config(self.cli))
    }

    /// Configuration with `run` overrides applied.
    pub fn run_config(&self, args: &RunArgs) -> anyhow::Result<LibraryConfig> {
        let mut config = self.config()?.clone();
        if let Some(engine) = args.engine {
            config = config.engine(engine);
        }
        if args.strict {
            config = config.transitions(TransitionPolicy::Strict);
        }
        if let Some(scope) = args.scope {
            config = config.search_scope(scope);
        }
        if let Some(order) = args.order {
            config = config.search_order(order);
        }
        Ok(config)
    }

    /// Open an empty library for a `run` invocation.
    pub fn open_library(&self, args: &RunArgs) -> anyhow::Result<Box<dyn Library>> {
        Ok(open_library(self.run_config(args)?))
    }
}
