//! Command and directive listings

use anyhow::Result;
use eolian_core::commands::CommandRegistry;
use eolian_core::directives::{DirectiveCatalog, SyntaxType, UserPermission};

use crate::console::CliConsole;

/// Show the commands available at `permission`
pub fn show_commands(permission: UserPermission) -> Result<()> {
    let console = CliConsole::new(true);
    let registry = CommandRegistry::with_builtins();

    let mut current = None;
    for command in registry.list(permission) {
        if current != Some(command.category) {
            console.print_header(&command.category.to_string());
            current = Some(command.category);
        }
        console.print_row(&command.name, command.description());
        for usage in &command.usage {
            console.print_detail(&usage.example);
        }
    }

    console.info("");
    console.info(&format!(
        "{} commands available to {}",
        registry.list(permission).len(),
        permission
    ));
    Ok(())
}

/// Show every directive with examples in `syntax`
pub fn show_directives(syntax: SyntaxType) -> Result<()> {
    let console = CliConsole::new(true);
    let catalog = DirectiveCatalog::builtin()?;

    console.print_header("Keywords");
    for keyword in catalog.all_keywords() {
        let group = keyword
            .group
            .map(|group| format!(" [{}]", group))
            .unwrap_or_default();
        console.print_row(&keyword.name, &format!("{}{}", keyword.details, group));
        console.print_detail(&format!(
            "{} (requires {})",
            keyword.example(syntax),
            keyword.permission
        ));
    }

    console.print_header("Patterns");
    for pattern in catalog.all_patterns() {
        console.print_row(
            &pattern.name,
            &format!("{} (priority {})", pattern.details, pattern.priority),
        );
        for usage in &pattern.usage {
            console.print_detail(&pattern.example(usage, syntax));
        }
    }

    if syntax == SyntaxType::Traditional {
        console.warn("In traditional syntax, SEARCH is whatever text is left over");
    }
    Ok(())
}
