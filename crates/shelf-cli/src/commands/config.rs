use shelf_core::LibraryConfig;

use crate::app::AppContext;
use crate::cli::ConfigInitArgs;
use crate::config::{resolve_config_path, write_config};
use crate::errors::CliError;

pub fn handle_config_init(ctx: &AppContext, args: &ConfigInitArgs) -> anyhow::Result<()> {
    let (path, _explicit) = resolve_config_path(ctx.cli())?;
    if path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: pass --force to overwrite it.",
            path.display()
        ))
        .into());
    }

    write_config(&path, &LibraryConfig::default())?;
    if !ctx.quiet() {
        println!("Wrote default config to {}", path.display());
    }
    Ok(())
}

pub fn handle_config_show(ctx: &AppContext) -> anyhow::Result<()> {
    let config = ctx.config()?;
    if !ctx.quiet() {
        let (path, _explicit) = resolve_config_path(ctx.cli())?;
        let source = if path.exists() {
            path.display().to_string()
        } else {
            "built-in defaults".to_string()
        };
        println!("# source: {}", source);
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    print!("{}", contents);
    Ok(())
}
