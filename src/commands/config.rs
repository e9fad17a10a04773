use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, parse_config};
use crate::error::{DirsiftError, Result};
use crate::output::{OutputFormat, print_error};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config).map(|()| {
            println!("Configuration is valid: {}", config.display());
        }),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), *format, cli.no_config).map(|rendered| {
                print!("{rendered}");
            })
        }
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has
/// semantically invalid values.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(DirsiftError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = std::fs::read_to_string(config_path)?;
    parse_config(&content)?;
    Ok(())
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or rendered.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: OutputFormat,
    no_config: bool,
) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;
    match format {
        OutputFormat::Json => {
            let mut rendered = serde_json::to_string_pretty(&loaded.config)?;
            rendered.push('\n');
            Ok(rendered)
        }
        OutputFormat::Text => format_config_text(&loaded.config, loaded.source.as_deref()),
    }
}

fn format_config_text(config: &Config, source: Option<&Path>) -> Result<String> {
    let body = toml::to_string_pretty(config)
        .map_err(|e| DirsiftError::Config(format!("Failed to render configuration: {e}")))?;
    let origin = source.map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
    Ok(format!("# Effective configuration (source: {origin})\n\n{body}"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
