//! Accumulates resolved options while enforcing group rules

use std::collections::HashMap;

use tracing::debug;

use crate::commands::types::CommandDescriptor;
use crate::directives::{CommandOptions, DirectiveGroup, DirectiveValue};
use crate::error::{EolianError, EolianResult};

/// What happens when a second member of a group is found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CollisionPolicy {
    /// Keep the first member, ignore the rest
    FirstMatchWins,
    /// Fail with a conflicting input error
    Reject,
}

#[derive(Debug)]
pub(super) struct OptionsBuilder {
    policy: CollisionPolicy,
    options: CommandOptions,
    /// Member recorded for each group
    groups: HashMap<DirectiveGroup, String>,
}

impl OptionsBuilder {
    pub(super) fn new(policy: CollisionPolicy) -> Self {
        Self {
            policy,
            options: CommandOptions::new(),
            groups: HashMap::new(),
        }
    }

    pub(super) fn contains(&self, name: &str) -> bool {
        self.options.contains(name)
    }

    /// Record a directive value
    ///
    /// Returns whether the value was stored. A directive already present is
    /// left untouched.
    pub(super) fn record(
        &mut self,
        name: &str,
        group: Option<DirectiveGroup>,
        value: DirectiveValue,
    ) -> EolianResult<bool> {
        if self.options.contains(name) {
            return Ok(false);
        }

        if let Some(group) = group {
            if let Some(existing) = self.groups.get(&group) {
                return match self.policy {
                    CollisionPolicy::FirstMatchWins => {
                        debug!(
                            group = %group,
                            kept = %existing,
                            dropped = %name,
                            "Group already has a member"
                        );
                        Ok(false)
                    }
                    CollisionPolicy::Reject => Err(EolianError::conflicting_input(
                        format!(
                            "You can not specify both {} & {}",
                            existing.to_lowercase(),
                            name.to_lowercase()
                        ),
                        [existing.clone(), name.to_string()],
                    )),
                };
            }
            self.groups.insert(group, name.to_string());
        }

        self.options.insert(name, value);
        Ok(true)
    }

    /// Fail if both sides of a declared conflict are present
    pub(super) fn check_conflicts(&self, command: &CommandDescriptor) -> EolianResult<()> {
        for (a, b) in &command.conflicts {
            if self.options.contains(a) && self.options.contains(b) {
                return Err(EolianError::conflicting_input(
                    format!(
                        "You can not specify both {} & {}",
                        a.to_lowercase(),
                        b.to_lowercase()
                    ),
                    [a.clone(), b.clone()],
                ));
            }
        }
        Ok(())
    }

    pub(super) fn finish(self) -> CommandOptions {
        self.options
    }
}
