//! country / language commands - Show a single record

use crate::cli::Context;
use crate::core::lookup::{CountryView, LanguageView, Linked};
use crate::ui::output::{self, format_field};
use anyhow::Result;

/// Show a country.
pub fn country(ctx: &Context, code: &str, expand: bool) -> Result<()> {
    let cl = ctx.dataset()?;
    let view = cl.country_with(code, expand)?;

    if ctx.json {
        output::json(&view)?;
    } else {
        println!("{}", render_country(&view));
    }
    Ok(())
}

/// Show a language.
pub fn language(ctx: &Context, code: &str, expand: bool) -> Result<()> {
    let cl = ctx.dataset()?;
    let view = cl.language_with(code, expand)?;

    if ctx.json {
        output::json(&view)?;
    } else {
        println!("{}", render_language(&view));
    }
    Ok(())
}

fn render_country(view: &CountryView) -> String {
    let mut lines = vec![format!(
        "{} ({} / {} / {})",
        view.name, view.code_2, view.code_3, view.num_code
    )];

    match &view.languages {
        Linked::Codes(codes) => {
            lines.extend(format_field("Languages", &codes.join(", ")));
        }
        Linked::Records(languages) if !languages.is_empty() => {
            lines.push("Languages:".to_string());
            for language in languages {
                lines.push(format!(
                    "  {:<4}{}",
                    language.iso639_1.as_deref().unwrap_or(&language.iso639_3),
                    language.primary_name().unwrap_or_default()
                ));
            }
        }
        Linked::Records(_) => {}
    }

    lines.join("\n")
}

fn render_language(view: &LanguageView) -> String {
    let name = view.name.first().map(String::as_str).unwrap_or_default();
    let mut lines = vec![format!(
        "{} ({} / {} / {} / {})",
        name,
        view.iso639_1.as_deref().unwrap_or("-"),
        view.iso639_2,
        view.iso639_2en,
        view.iso639_3
    )];

    lines.extend(format_field("Native name", &view.native_name.join(", ")));
    lines.extend(format_field("Family", &view.family));
    lines.extend(format_field("Direction", &view.direction.to_string()));

    match &view.countries {
        Linked::Codes(codes) => {
            lines.extend(format_field("Countries", &codes.join(", ")));
        }
        Linked::Records(countries) if !countries.is_empty() => {
            lines.push("Countries:".to_string());
            for country in countries {
                lines.push(format!("  {:<4}{}", country.code_2, country.name));
            }
        }
        Linked::Records(_) => {}
    }

    lines.join("\n")
}
