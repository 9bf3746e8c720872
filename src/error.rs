//! Error types for the two places the core can be handed bad input: a
//! config file and an upgrade selection.

use thiserror::Error;

use crate::upgrades::UpgradeKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("no upgrade choice is pending")]
    NotLevelingUp,

    #[error("{0} was not among the offered upgrades")]
    UpgradeNotOffered(UpgradeKind),

    #[error("there is no upgrade choice number {0}")]
    NoSuchChoice(usize),
}
