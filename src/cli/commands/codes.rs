//! codes / exists commands - Code listings and existence checks

use crate::cli::Context;
use crate::core::types::{CountryCodeType, EntityKind, LanguageCodeType};
use crate::ui::output;
use anyhow::Result;

/// List every code of one scheme.
///
/// Without `--type` the default scheme of `kind` is used.
pub fn codes(ctx: &Context, kind: EntityKind, selector: Option<i64>) -> Result<()> {
    let cl = ctx.dataset()?;
    let codes = match (kind, selector) {
        (EntityKind::Country, Some(n)) => cl.country_codes_by_selector(n)?,
        (EntityKind::Country, None) => cl.country_codes(CountryCodeType::default()),
        (EntityKind::Language, Some(n)) => cl.language_codes_by_selector(n)?,
        (EntityKind::Language, None) => cl.language_codes(LanguageCodeType::default()),
    };

    if ctx.json {
        output::json(&codes)?;
    } else {
        println!("{}", output::format_list(&codes, ""));
    }
    Ok(())
}

/// Print whether a code exists. Never fails on the code itself.
pub fn exists(ctx: &Context, kind: EntityKind, code: &str) -> Result<()> {
    let cl = ctx.dataset()?;
    let found = match kind {
        EntityKind::Country => cl.country_code_exists(code),
        EntityKind::Language => cl.language_code_exists(code),
    };

    output::debug(format!("{} code '{}' exists: {}", kind, code, found), ctx.verbosity);
    println!("{}", found);
    Ok(())
}
