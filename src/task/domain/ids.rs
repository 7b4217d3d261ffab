//! Identifier and validated scalar types for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier for a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i32);

impl TaskId {
    /// Wraps a raw identifier issued by a store.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for TaskId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-blank task name, stored as submitted, of at most [`TaskName::MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskName(String);

impl TaskName {
    /// Width of the persisted `name` column.
    pub const MAX_CHARS: usize = 100;

    /// Creates a validated task name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the value is blank and
    /// [`TaskDomainError::TaskNameTooLong`] when it exceeds
    /// [`TaskName::MAX_CHARS`] characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TaskDomainError> {
        let raw = value.as_ref();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyTaskName);
        }

        let length = raw.chars().count();
        if length > Self::MAX_CHARS {
            return Err(TaskDomainError::TaskNameTooLong {
                length,
                max: Self::MAX_CHARS,
            });
        }

        Ok(Self(raw.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
