//! countries / languages / families / family / locales commands

use crate::cli::Context;
use crate::ui::output;
use anyhow::Result;

/// List all countries.
pub fn countries(ctx: &Context) -> Result<()> {
    let cl = ctx.dataset()?;
    if ctx.json {
        output::json(cl.countries())?;
        return Ok(());
    }
    for country in cl.countries() {
        println!(
            "{}\t{}\t{}\t{}",
            country.code_2, country.code_3, country.num_code, country.name
        );
    }
    Ok(())
}

/// List all languages.
pub fn languages(ctx: &Context) -> Result<()> {
    let cl = ctx.dataset()?;
    if ctx.json {
        output::json(cl.languages())?;
        return Ok(());
    }
    for language in cl.languages() {
        println!(
            "{}\t{}\t{}",
            language.iso639_1.as_deref().unwrap_or("-"),
            language.iso639_3,
            language.primary_name().unwrap_or_default()
        );
    }
    Ok(())
}

/// List all language families.
pub fn families(ctx: &Context) -> Result<()> {
    let cl = ctx.dataset()?;
    if ctx.json {
        output::json(cl.language_families())?;
    } else {
        println!("{}", output::format_list(cl.language_families(), ""));
    }
    Ok(())
}

/// List the languages of one family.
pub fn family(ctx: &Context, name: &str) -> Result<()> {
    let cl = ctx.dataset()?;
    let members = cl.language_family_members(name)?;

    if ctx.json {
        output::json(&members)?;
        return Ok(());
    }
    if members.is_empty() {
        output::print(format!("No languages in family '{}'", name), ctx.verbosity);
    }
    for member in &members {
        println!(
            "{}\t{}\t{}",
            member.iso639_1.as_deref().unwrap_or("-"),
            member.iso639_3,
            member.name.first().map(String::as_str).unwrap_or_default()
        );
    }
    Ok(())
}

/// List all locales.
pub fn locales(ctx: &Context, script_before_region: bool) -> Result<()> {
    let cl = ctx.dataset()?;
    let locales = cl.locales(script_before_region);
    if ctx.json {
        output::json(&locales)?;
    } else {
        println!("{}", output::format_list(&locales, ""));
    }
    Ok(())
}
