//! cli
//!
//! Command-line interface for the `cl` binary.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Merge flags over the config file
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Every query is answered by
//! [`crate::query::CountryLanguage`]; handlers only choose the dataset and
//! format results as text or JSON.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};
use std::path::PathBuf;

use crate::core::config::Config;
use crate::query::CountryLanguage;
use crate::source::create_loader;
use crate::ui::output::{self, Verbosity};

/// Settings shared by all command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    pub verbosity: Verbosity,
    /// Print results as JSON
    pub json: bool,
    /// Dataset file; `None` means the bundled dataset
    pub data: Option<PathBuf>,
    /// The loaded config file, for `cl config`
    pub config: Config,
}

impl Context {
    /// Apply precedence: defaults, then config file, then CLI flags.
    pub fn new(cli: &Cli, config: Config) -> Self {
        let data = cli
            .data
            .clone()
            .or_else(|| config.dataset_path().map(|p| p.to_path_buf()));
        Self {
            verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
            json: cli.json || config.json_output(),
            data,
            config,
        }
    }

    /// Load the dataset this invocation queries.
    pub fn dataset(&self) -> Result<CountryLanguage> {
        let Some(path) = self.data.as_deref() else {
            let bundled = CountryLanguage::bundled().context("Failed to load bundled dataset")?;
            return Ok(bundled.clone());
        };

        let loader = create_loader(Some(path));
        output::debug(format!("loading {}", loader.describe()), self.verbosity);
        CountryLanguage::from_loader(loader.as_ref())
            .with_context(|| format!("Failed to load dataset from '{}'", path.display()))
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    crate::logging::init(cli.debug);

    let config = Config::load().context("Failed to load config")?;
    let ctx = Context::new(&cli, config);

    commands::dispatch(cli.command, &ctx)
}
