//! config command - Get, set, or list configuration values

use crate::cli::Context;
use crate::core::config::KEYS;
use crate::source::DEFAULT_SOURCE;
use crate::ui::output;
use anyhow::{Context as _, Result};
use std::path::Path;

/// Get a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    // Unset keys exit silently
    if let Some(value) = ctx.config.get(key)? {
        println!("{}", value);
    }
    Ok(())
}

/// Set a configuration value.
///
/// A relative `dataset.path` is taken relative to where `cl` was invoked and
/// stored as an absolute path.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let value = if key == "dataset.path" {
        absolute(value)?
    } else {
        value.to_string()
    };
    let value = value.as_str();

    let mut config = ctx.config.clone();
    config.set(key, value)?;
    if key == "dataset.path" && !Path::new(value).is_file() {
        output::warn(format!("dataset file '{}' does not exist yet", value), ctx.verbosity);
    }
    let path = config.save().context("Failed to write config")?;

    output::print(format!("Set {} = {}", key, value), ctx.verbosity);
    output::debug(format!("wrote {}", path.display()), ctx.verbosity);
    Ok(())
}

fn absolute(value: &str) -> Result<String> {
    let path = Path::new(value);
    if value.is_empty() || path.is_absolute() {
        return Ok(value.to_string());
    }
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(cwd.join(path).display().to_string())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    match ctx.config.loaded_from() {
        Some(path) => println!("# Configuration ({})", path.display()),
        None => println!("# Configuration (defaults)"),
    }

    for key in KEYS {
        match ctx.config.get(key)? {
            Some(value) => println!("{} = {}", key, value),
            None if *key == "dataset.path" => println!("{} = ({})", key, DEFAULT_SOURCE),
            None => println!("{} = (not set)", key),
        }
    }
    Ok(())
}
