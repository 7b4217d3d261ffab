//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The task name exceeds the persisted column width.
    #[error("task name is {length} characters long, at most {max} are allowed")]
    TaskNameTooLong {
        /// Character count of the rejected name.
        length: usize,
        /// Maximum accepted character count.
        max: usize,
    },

    /// A timestamp field did not match the `YYYY-MM-DDTHH:MM` wire format.
    #[error("invalid {field} '{value}', expected YYYY-MM-DDTHH:MM")]
    InvalidTimestamp {
        /// Form field the value came from.
        field: &'static str,
        /// Raw rejected value.
        value: String,
    },
}
