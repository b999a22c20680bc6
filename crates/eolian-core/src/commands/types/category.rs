//! Command categories

use serde::{Deserialize, Serialize};

/// Grouping used for help output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandCategory {
    #[default]
    General,
    Music,
    Queue,
    Account,
    Settings,
}

impl CommandCategory {
    pub fn details(&self) -> &'static str {
        match self {
            Self::General => "This category contains commands of varying utility",
            Self::Music => "This category contains commands for manipulating the player",
            Self::Queue => "This category contains commands for manipulating the queue",
            Self::Account => {
                "This category contains commands for configuring third-party accounts and aliases"
            }
            Self::Settings => "This category contains commands for configuring the bot",
        }
    }
}

impl std::fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::General => write!(f, "General"),
            Self::Music => write!(f, "Music"),
            Self::Queue => write!(f, "Queue"),
            Self::Account => write!(f, "Account"),
            Self::Settings => write!(f, "Settings"),
        }
    }
}
