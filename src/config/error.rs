//! Configuration errors.

use thiserror::Error;

/// Errors raised while parsing or validating a [`super::Config`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The document is not valid configuration JSON.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// The team roster is empty, so there is no primary identity.
    #[error("team roster must contain at least one member")]
    EmptyTeam,

    /// A team member has a blank identifier.
    #[error("team member at index {index} has an empty id")]
    EmptyTeamMemberId {
        /// Position in the roster.
        index: usize,
    },

    /// A score rule has a blank key.
    #[error("score rule at index {index} has an empty key")]
    EmptyRuleKey {
        /// Position in the rule list.
        index: usize,
    },
}
