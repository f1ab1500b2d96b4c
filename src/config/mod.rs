//! Team identities and score rules consumed by the scoring engine.
//!
//! A [`Config`] is reloaded by the caller for every ranking request. Loading
//! the document from disk belongs to process bootstrap; this module parses
//! and validates it.

mod error;

pub use error::ConfigError;

use crate::task::domain::Labels;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A member of the team whose tasks are being ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Identity compared against `assignee` labels.
    pub id: String,
    /// Accounts per tracker, e.g. `bugzilla` or `jira`.
    #[serde(flatten)]
    pub accounts: BTreeMap<String, Vec<String>>,
}

impl TeamMember {
    /// Creates a member without tracker accounts.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            accounts: BTreeMap::new(),
        }
    }

    /// Adds an account on a tracker.
    #[must_use]
    pub fn with_account(mut self, tracker: impl Into<String>, account: impl Into<String>) -> Self {
        self.accounts
            .entry(tracker.into())
            .or_default()
            .push(account.into());
        self
    }

    /// Returns the member's accounts on `tracker`.
    #[must_use]
    pub fn accounts(&self, tracker: &str) -> &[String] {
        self.accounts.get(tracker).map_or(&[], Vec::as_slice)
    }
}

/// Adds `score` to a task's base score when it carries `key=value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRule {
    /// Label key to match.
    pub key: String,
    /// Label value to match.
    pub value: String,
    /// Score delta, possibly negative.
    pub score: i64,
}

impl ScoreRule {
    /// Creates a rule.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>, score: i64) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            score,
        }
    }

    /// Returns `true` when the labels carry the rule's exact pair.
    #[must_use]
    pub fn matches(&self, labels: &Labels) -> bool {
        labels.has(&self.key, &self.value)
    }
}

/// Scoring configuration.
///
/// # Examples
///
/// ```
/// use taskrank::config::Config;
///
/// let config = Config::from_json_str(
///     r#"{
///         "team": [{"id": "alice", "jira": ["alice@example.com"]}],
///         "scoreRules": [{"key": "priority", "value": "P1", "score": 100}]
///     }"#,
/// )
/// .expect("valid config");
///
/// assert_eq!(config.primary_member().map(|m| m.id.as_str()), Some("alice"));
/// assert_eq!(config.score_rules().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    team: Vec<TeamMember>,
    #[serde(default)]
    score_rules: Vec<ScoreRule>,
}

impl Config {
    /// Creates an empty configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            team: Vec::new(),
            score_rules: Vec::new(),
        }
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation
    /// errors of [`Config::validate`].
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(document).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Appends a team member. The first member is the primary identity.
    #[must_use]
    pub fn with_team_member(mut self, member: TeamMember) -> Self {
        self.team.push(member);
        self
    }

    /// Appends a score rule.
    #[must_use]
    pub fn with_score_rule(mut self, rule: ScoreRule) -> Self {
        self.score_rules.push(rule);
        self
    }

    /// Returns the ordered team roster.
    #[must_use]
    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    /// Returns the primary team member, used for "is this mine" checks.
    #[must_use]
    pub fn primary_member(&self) -> Option<&TeamMember> {
        self.team.first()
    }

    /// Returns the ordered score rules.
    #[must_use]
    pub fn score_rules(&self) -> &[ScoreRule] {
        &self.score_rules
    }

    /// Checks the roster and rule set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTeam`] when there is no primary member,
    /// [`ConfigError::EmptyTeamMemberId`] for blank member identifiers and
    /// [`ConfigError::EmptyRuleKey`] for rules without a key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.team.is_empty() {
            return Err(ConfigError::EmptyTeam);
        }
        if let Some(index) = self
            .team
            .iter()
            .position(|member| member.id.trim().is_empty())
        {
            return Err(ConfigError::EmptyTeamMemberId { index });
        }
        if let Some(index) = self
            .score_rules
            .iter()
            .position(|rule| rule.key.trim().is_empty())
        {
            return Err(ConfigError::EmptyRuleKey { index });
        }
        Ok(())
    }
}
