//! Configuration management command
//!
//! Provides CLI interface to view and edit the autosave configuration.

use anyhow::{Context, Result};
use autosave_core::config::{self, AutosaveConfig};
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// List all configuration values
pub async fn run_list() -> Result<()> {
    let config = config::load()?;
    let config_path = config::config_file_path()
        .context("Could not determine config file path")?;

    println!("{}", "Autosave Configuration".bold());
    println!("{}: {}\n", "Location".dimmed(), config_path.display().dimmed());

    println!("{}", "[debounce]".yellow());
    println!(
        "  {} = {} {}",
        "delay_ms".cyan(),
        config.debounce.delay_ms,
        format!("({:?})", config.debounce.delay()).dimmed()
    );

    println!("\n{}", "[store]".yellow());
    println!("  {} = {}", "path".cyan(), config.store.path.display());

    println!("\n{}", "Valid Ranges:".bold());
    println!("  delay_ms: 1-60,000");

    Ok(())
}

/// Get a single configuration value
pub async fn run_get(key: &str) -> Result<()> {
    let config = config::load()?;
    println!("{}", get_value(&config, key)?);
    Ok(())
}

/// Set a configuration value, reporting the value it replaced
pub async fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = config::load()?;
    let previous = get_value(&config, key)?;

    set_value(&mut config, key, value)?;
    config
        .validate()
        .with_context(|| format!("Refusing to write {} = {}", key, value))?;
    config::save(&config)?;

    let current = get_value(&config, key)?;
    if previous == current {
        println!("{} {} unchanged ({})", "✓".green(), key.cyan(), current);
    } else {
        println!("{} {}: {} → {}", "✓".green(), key.cyan(), previous.dimmed(), current);
    }
    Ok(())
}

/// Print where the config file lives, writing defaults there with `create`
pub async fn run_path(create: bool) -> Result<()> {
    let path = if create {
        let existed = config::config_file_path()?.exists();
        let path = config::init_if_missing().context("Failed to write default config")?;
        if !existed {
            eprintln!("{} Wrote default config", "✓".green());
        }
        path
    } else {
        config::config_file_path()?
    };

    println!("{}", path.display());
    if !path.exists() {
        eprintln!("{}", "(not created yet, pass --create to write defaults)".yellow());
    }
    Ok(())
}

/// Show example configuration
pub async fn run_example() -> Result<()> {
    println!("{}", config::example_config());
    Ok(())
}

fn get_value(config: &AutosaveConfig, key: &str) -> Result<String> {
    let value = match key {
        "debounce.delay_ms" => config.debounce.delay_ms.to_string(),
        "store.path" => config.store.path.display().to_string(),
        _ => anyhow::bail!(
            "Unknown config key: {}. Use 'autosave config --list' to see available keys.",
            key
        ),
    };
    Ok(value)
}

fn set_value(config: &mut AutosaveConfig, key: &str, value: &str) -> Result<()> {
    match key {
        "debounce.delay_ms" => {
            let val: u64 = value.parse()
                .context("Invalid value: must be a positive integer")?;
            config.debounce.delay_ms = val;
        }
        "store.path" => {
            config.store.path = PathBuf::from(value);
        }
        _ => anyhow::bail!(
            "Unknown config key: {}. Use 'autosave config --list' to see available keys.",
            key
        ),
    }
    Ok(())
}
