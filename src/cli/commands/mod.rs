//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads the dataset through [`Context::dataset`]
//! 2. Calls [`crate::query::CountryLanguage`]
//! 3. Prints the result as text, or as JSON under `--json`
//!
//! Query errors (unknown code, bad format) propagate to `main` and exit
//! with status 1. `exists` is the exception: it always prints a boolean.

mod codes;
mod completion;
mod config_cmd;
mod listing;
mod record;
mod related;

pub use codes::{codes, exists};
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use listing::{countries, families, family, languages, locales};
pub use record::{country, language};
pub use related::{country_languages, language_countries, ms_locales};

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Country { code, shallow } => country(ctx, &code, !shallow),
        Command::Language { code, shallow } => language(ctx, &code, !shallow),
        Command::CountryLanguages { code } => country_languages(ctx, &code),
        Command::LanguageCountries { code } => language_countries(ctx, &code),
        Command::MsLocales { kind, code } => ms_locales(ctx, kind.into(), &code),
        Command::Codes { kind, code_type } => codes(ctx, kind.into(), code_type),
        Command::Exists { kind, code } => exists(ctx, kind.into(), &code),
        Command::Countries => countries(ctx),
        Command::Languages => languages(ctx),
        Command::Families => families(ctx),
        Command::Family { name } => family(ctx, &name),
        Command::Locales {
            script_before_region,
        } => locales(ctx, script_before_region),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_get(ctx, &key),
            ConfigAction::Set { key, value } => config_set(ctx, &key, &value),
            ConfigAction::List => config_list(ctx),
        },
        Command::Completion { shell } => completion(shell),
    }
}
