//! Identifier types for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between a source prefix and the source-local identifier.
const NAMESPACE_SEPARATOR: char = ':';

/// Globally unique task identifier, namespaced by the source that produced it.
///
/// Identifiers are stable across calls to the same source so that parent
/// references and state lookups remain valid between requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(String);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskId`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyTaskId);
        }
        Ok(Self(raw))
    }

    /// Creates an identifier of the form `<prefix>:<local_id>`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskId`] when the local identifier is
    /// blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskrank::task::domain::TaskId;
    ///
    /// let id = TaskId::namespaced("goal", "ship-it").expect("valid id");
    /// assert_eq!(id.as_str(), "goal:ship-it");
    /// assert_eq!(id.namespace(), Some("goal"));
    /// ```
    pub fn namespaced(prefix: &str, local_id: &str) -> Result<Self, TaskDomainError> {
        if local_id.trim().is_empty() {
            return Err(TaskDomainError::EmptyTaskId);
        }
        Self::new(format!("{prefix}{NAMESPACE_SEPARATOR}{local_id}"))
    }

    /// Returns the source prefix, if the identifier carries one.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.0
            .split_once(NAMESPACE_SEPARATOR)
            .map(|(prefix, _)| prefix)
            .filter(|prefix| !prefix.is_empty())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskId {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TaskId {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskId> for String {
    fn from(value: TaskId) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
