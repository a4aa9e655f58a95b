use std::path::{Path, PathBuf};

use shelf_core::LibraryConfig;

use crate::cli::Cli;
use crate::errors::CliError;

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Resolve the config file path from `--config`/`SHELF_CONFIG` or the XDG default.
///
/// The flag is marked explicit so callers can tell "the user asked for this
/// file" apart from "nothing was configured".
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<(PathBuf, bool)> {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return Ok((PathBuf::from(value), true));
        }
    }
    Ok((default_config_path()?, false))
}

/// Load the effective configuration.
///
/// A missing default config file means built-in defaults; a missing file
/// named explicitly is an error.
pub fn load_config(cli: &Cli) -> anyhow::Result<LibraryConfig> {
    let (path, explicit) = resolve_config_path(cli)?;
    if !path.exists() {
        if explicit {
            return Err(CliError::not_found(
                missing_config_message(&path),
                "Hint: run `shelf config init`, or drop --config / SHELF_CONFIG to use defaults.",
            )
            .into());
        }
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(LibraryConfig::default());
    }
    read_config(&path)
}

pub fn read_config(path: &Path) -> anyhow::Result<LibraryConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &LibraryConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

/// Error message when an explicitly named config file is missing.
pub fn missing_config_message(path: &Path) -> String {
    format!("No config found at {}", path.display())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("shelf"));
        }
    }
    Ok(home_dir()?.join(".config").join("shelf"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
