//! Form payloads submitted by the add and edit pages.

use crate::task::{
    domain::TaskId,
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use serde::Deserialize;

/// Fields of the add and edit forms.
///
/// Missing fields deserialize as empty strings so that they are reported
/// as validation errors rather than extractor rejections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskForm {
    /// Task name.
    #[serde(default)]
    pub task_name: String,
    /// Start in `YYYY-MM-DDTHH:MM`.
    #[serde(default)]
    pub start_time: String,
    /// End in `YYYY-MM-DDTHH:MM`.
    #[serde(default)]
    pub end_time: String,
}

impl TaskForm {
    /// Converts the form into a creation request.
    #[must_use]
    pub fn into_create_request(self) -> CreateTaskRequest {
        CreateTaskRequest::new(self.task_name, self.start_time, self.end_time)
    }

    /// Converts the form into an edit request for `task_id`.
    #[must_use]
    pub fn into_update_request(self, task_id: TaskId) -> UpdateTaskRequest {
        UpdateTaskRequest::new(task_id, self.task_name, self.start_time, self.end_time)
    }
}
