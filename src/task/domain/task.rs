//! Task record and the value objects used to create and edit it.

use super::{TaskDomainError, TaskId, TaskName, compute_duration, parse_form_timestamp};
use chrono::{DateTime, NaiveDateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// User-editable task content with its derived duration.
///
/// The duration is computed on construction and cannot be set directly, so
/// every create or edit recomputes it from the interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskDetails {
    name: TaskName,
    start: NaiveDateTime,
    end: NaiveDateTime,
    duration: f64,
}

impl TaskDetails {
    /// Builds details from validated values.
    #[must_use]
    pub fn new(name: TaskName, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            name,
            start,
            end,
            duration: compute_duration(start, end),
        }
    }

    /// Builds details from raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the name is blank or too long, or when
    /// either timestamp fails to parse.
    pub fn parse(name: &str, start: &str, end: &str) -> Result<Self, TaskDomainError> {
        let task_name = TaskName::new(name)?;
        let start_at = parse_form_timestamp("start_time", start)?;
        let end_at = parse_form_timestamp("end_time", end)?;
        Ok(Self::new(task_name, start_at, end_at))
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the start timestamp.
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the end timestamp.
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the duration in minutes.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }
}

/// A task that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    details: TaskDetails,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Stamps details with the current clock time.
    #[must_use]
    pub fn new(details: TaskDetails, clock: &impl Clock) -> Self {
        Self {
            details,
            created_at: clock.utc(),
        }
    }

    /// Returns the task content.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attaches the identifier issued by a store.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            details: self.details,
            created_at: self.created_at,
        }
    }
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task name.
    pub name: TaskName,
    /// Persisted start timestamp.
    pub start: NaiveDateTime,
    /// Persisted end timestamp.
    pub end: NaiveDateTime,
    /// Persisted duration in minutes.
    pub duration: f64,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Persisted task record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    id: TaskId,
    #[serde(flatten)]
    details: TaskDetails,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let PersistedTaskData {
            id,
            name,
            start,
            end,
            duration,
            created_at,
        } = data;
        Self {
            id,
            details: TaskDetails {
                name,
                start,
                end,
                duration,
            },
            created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task content.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        self.details.name()
    }

    /// Returns the start timestamp.
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.details.start()
    }

    /// Returns the end timestamp.
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.details.end()
    }

    /// Returns the duration in minutes.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.details.duration()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the editable content, keeping identity and creation time.
    pub fn replace_details(&mut self, details: TaskDetails) {
        self.details = details;
    }
}
