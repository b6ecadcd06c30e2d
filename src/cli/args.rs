//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--data <path>`: Load this dataset instead of the bundled one
//! - `--json`: Print results as JSON
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::types::EntityKind;

/// cl - Look up countries, languages, language families and locales
#[derive(Parser, Debug)]
#[command(name = "cl")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
DATASET:
    The bundled dataset is a sample of 26 countries and 26 languages, not full
    ISO 3166-1 / ISO 639 coverage. Pass --data <PATH> or set dataset.path with
    `cl config set` to load a complete dataset of the same JSON layout.")]
pub struct Cli {
    /// Load the dataset from this JSON file instead of the bundled sample
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a country by alpha-2 or alpha-3 code
    #[command(
        name = "country",
        long_about = "Show a country by its ISO 3166-1 alpha-2 or alpha-3 code.\n\n\
            Codes are case-insensitive. Two letters are read as alpha-2, three as \
            alpha-3. The languages spoken in the country are shown as full records \
            unless --shallow is given.",
        after_help = "\
EXAMPLES:
    # Look up Morocco
    cl country ma
    cl country MAR

    # Language codes only, as JSON
    cl country be --shallow --json"
    )]
    Country {
        /// Alpha-2 or alpha-3 country code
        code: String,

        /// Show language codes instead of full language records
        #[arg(long)]
        shallow: bool,
    },

    /// Show a language by ISO 639 code
    #[command(
        name = "language",
        long_about = "Show a language by its ISO 639-1, 639-2, 639-2en or 639-3 code.\n\n\
            Codes are case-insensitive. Two letters are read as ISO 639-1. Three \
            letters are tried as ISO 639-2, then 639-2en, then 639-3. The countries \
            where the language is spoken are shown as full records unless --shallow \
            is given.",
        after_help = "\
EXAMPLES:
    # The same language by three schemes
    cl language fr
    cl language fre
    cl language fra

    # Country codes only
    cl language de --shallow"
    )]
    Language {
        /// ISO 639 language code
        code: String,

        /// Show country codes instead of full country records
        #[arg(long)]
        shallow: bool,
    },

    /// List the codes of the languages spoken in a country
    #[command(name = "country-languages")]
    CountryLanguages {
        /// Alpha-2 or alpha-3 country code
        code: String,
    },

    /// List the codes of the countries where a language is spoken
    #[command(name = "language-countries")]
    LanguageCountries {
        /// ISO 639 language code
        code: String,
    },

    /// Show MS locale cultures of a country or language
    #[command(
        name = "ms-locales",
        after_help = "\
EXAMPLES:
    cl ms-locales country MA
    cl ms-locales language ar --json"
    )]
    MsLocales {
        /// Whether CODE is a country or a language code
        #[arg(value_enum)]
        kind: KindArg,

        /// Country or language code
        code: String,
    },

    /// List every code of one scheme
    #[command(
        name = "codes",
        long_about = "List every code of one scheme, in dataset order.\n\n\
            Countries: 1 = numeric, 2 = alpha-2 (default), 3 = alpha-3.\n\
            Languages: 1 = ISO 639-1 (default), 2 = ISO 639-2en, 3 = ISO 639-3.",
        after_help = "\
EXAMPLES:
    # All alpha-3 country codes
    cl codes country --type 3

    # All ISO 639-1 language codes
    cl codes language"
    )]
    Codes {
        /// Country or language codes
        #[arg(value_enum)]
        kind: KindArg,

        /// Code scheme selector (1, 2 or 3)
        #[arg(long = "type", value_name = "N", allow_negative_numbers = true)]
        code_type: Option<i64>,
    },

    /// Check whether a code exists
    #[command(
        name = "exists",
        long_about = "Check whether a code exists in any scheme.\n\n\
            Prints 'true' or 'false'. Malformed or blank codes print 'false'. \
            The exit status is 0 either way.",
        after_help = "\
EXAMPLES:
    cl exists country 504
    cl exists language baq"
    )]
    Exists {
        /// Country or language code
        #[arg(value_enum)]
        kind: KindArg,

        /// Code to check
        code: String,
    },

    /// List all countries
    #[command(name = "countries")]
    Countries,

    /// List all languages
    #[command(name = "languages")]
    Languages,

    /// List all language families
    #[command(name = "families")]
    Families,

    /// List the languages of a family
    #[command(
        name = "family",
        after_help = "\
EXAMPLES:
    cl family uralic
    cl family \"Indo-European\" --json"
    )]
    Family {
        /// Family name (case-insensitive)
        name: String,
    },

    /// List all locales
    #[command(
        name = "locales",
        long_about = "List all locales as language_region_script strings.\n\n\
            With --script-before-region the order is language_script_region. \
            Locales without a script are language_region either way.",
        after_help = "\
EXAMPLES:
    cl locales
    cl locales --script-before-region"
    )]
    Locales {
        /// Place the script before the region
        #[arg(long)]
        script_before_region: bool,
    },

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        long_about = "Get, set, or list configuration values.\n\n\
            Configuration is read from $COUNTRYLANG_CONFIG, then \
            $XDG_CONFIG_HOME/countrylang/config.toml, then \
            ~/.countrylang/config.toml. Keys: dataset.path, output.json.",
        after_help = "\
EXAMPLES:
    cl config list
    cl config set output.json true
    cl config get dataset.path"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for cl commands.",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    cl completion bash >> ~/.bashrc

    # Zsh
    cl completion zsh > ~/.zfunc/_cl

    # Fish
    cl completion fish > ~/.config/fish/completions/cl.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Entity kind argument
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Country,
    Language,
}

impl From<KindArg> for EntityKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Country => EntityKind::Country,
            KindArg::Language => EntityKind::Language,
        }
    }
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
