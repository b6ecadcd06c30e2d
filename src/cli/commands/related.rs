//! country-languages / language-countries / ms-locales commands

use crate::cli::Context;
use crate::core::types::EntityKind;
use crate::ui::output;
use anyhow::Result;

/// List the codes of the languages spoken in a country.
pub fn country_languages(ctx: &Context, code: &str) -> Result<()> {
    let cl = ctx.dataset()?;
    let related = cl.country_languages(code)?;

    if ctx.json {
        output::json(&related)?;
        return Ok(());
    }
    if related.is_empty() {
        output::print(format!("No languages for '{}'", code), ctx.verbosity);
    }
    for codes in &related {
        println!(
            "{}\t{}\t{}",
            codes.iso639_1.as_deref().unwrap_or("-"),
            codes.iso639_2,
            codes.iso639_3
        );
    }
    Ok(())
}

/// List the codes of the countries where a language is spoken.
pub fn language_countries(ctx: &Context, code: &str) -> Result<()> {
    let cl = ctx.dataset()?;
    let related = cl.language_countries(code)?;

    if ctx.json {
        output::json(&related)?;
        return Ok(());
    }
    if related.is_empty() {
        output::print(format!("No countries for '{}'", code), ctx.verbosity);
    }
    for codes in &related {
        println!("{}\t{}\t{}", codes.code_2, codes.code_3, codes.num_code);
    }
    Ok(())
}

/// Show MS locale cultures of a country or language.
pub fn ms_locales(ctx: &Context, kind: EntityKind, code: &str) -> Result<()> {
    let cl = ctx.dataset()?;
    let cultures = match kind {
        EntityKind::Country => cl.country_ms_locales(code)?,
        EntityKind::Language => cl.language_ms_locales(code)?,
    };

    if ctx.json {
        output::json(&cultures)?;
        return Ok(());
    }
    if cultures.is_empty() {
        output::print(format!("No MS locales for {} '{}'", kind, code), ctx.verbosity);
    }
    for culture in &cultures {
        println!(
            "{}\t{}\t{}",
            culture.lang_culture_name, culture.culture_code, culture.display_name
        );
    }
    Ok(())
}
