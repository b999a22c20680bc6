//! Positional argument slots

use crate::commands::types::{ArgOption, CommandDescriptor, SlashOptions};
use crate::error::{EolianError, EolianResult};

/// Collect ARG from a command's argument tiers
///
/// Returns `None` when the command has no tiers or none was filled. Each tier
/// contributes at most one value, in tier order.
pub fn parse_command_args(
    command: &CommandDescriptor,
    options: &SlashOptions,
) -> EolianResult<Option<Vec<String>>> {
    let Some(args) = &command.args else {
        return Ok(None);
    };

    let mut values = Vec::new();
    for group in &args.groups {
        let populated: Vec<(&ArgOption, &str)> = group
            .options
            .iter()
            .filter_map(|option| options.value(&option.name).map(|value| (option, value)))
            .collect();

        match populated.as_slice() {
            [] if group.required => {
                let names = group
                    .options
                    .iter()
                    .map(|option| format!("`{}`", option.name))
                    .collect::<Vec<_>>()
                    .join(" or ");
                return Err(EolianError::missing_input(format!("You must provide {}", names)));
            }
            [] => {}
            [(option, value)] => {
                check_choice(option, value)?;
                values.push(value.to_string());
            }
            [(a, _), (b, _), ..] => {
                return Err(EolianError::conflicting_input(
                    format!("You can not specify both {} & {}", a.name, b.name),
                    [a.name.clone(), b.name.clone()],
                ));
            }
        }
    }

    Ok((!values.is_empty()).then_some(values))
}

fn check_choice(option: &ArgOption, value: &str) -> EolianResult<()> {
    if option.choices.is_empty()
        || option
            .choices
            .iter()
            .any(|choice| choice.eq_ignore_ascii_case(value))
    {
        return Ok(());
    }
    Err(EolianError::invalid_input_field(
        format!(
            "`{}` must be one of: {}",
            option.name,
            option.choices.join(", ")
        ),
        option.name.clone(),
    ))
}
