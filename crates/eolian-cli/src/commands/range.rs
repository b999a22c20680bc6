//! Range normalization

use anyhow::{Result, anyhow};
use colored::*;
use eolian_core::directives::{DirectiveCatalog, DirectiveValue, SyntaxType, names, normalize};

/// Normalize `range` against a list of `length` items and print the result
pub fn run(range: &str, length: usize, bottom: bool) -> Result<()> {
    let catalog = DirectiveCatalog::builtin()?;
    let name = if bottom { names::BOTTOM } else { names::TOP };
    let pattern = catalog
        .pattern(name)
        .ok_or_else(|| anyhow!("{} is missing from the directive catalog", name))?;

    let argument = match pattern.match_text(range, SyntaxType::Slash) {
        Some(found) => match found.payload {
            DirectiveValue::Range(argument) => argument,
            other => return Err(anyhow!("Unexpected payload for {}: {:?}", name, other)),
        },
        None => return Err(anyhow!("Invalid range '{}', expected N or N:M", range)),
    };

    let absolute = normalize(&argument, length, bottom);
    let slice = absolute.clamp(length);
    println!(
        "{} {} of {} {} items {}..{} ({} items)",
        name.cyan().bold(),
        range,
        length,
        "→".dimmed(),
        absolute.start,
        absolute.stop,
        slice.len()
    );
    Ok(())
}
