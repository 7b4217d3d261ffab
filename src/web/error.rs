//! Mapping of service and rendering failures onto HTTP responses.

use crate::task::services::TaskLifecycleError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// User-facing operation a request was attempting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Listing all tasks.
    List,
    /// Creating a task.
    Add,
    /// Showing or saving the edit form.
    Edit,
    /// Deleting a task.
    Delete,
    /// Showing today's grid.
    Today,
}

impl Action {
    /// Generic message shown when the store fails during this action.
    #[must_use]
    pub const fn problem_message(self) -> &'static str {
        match self {
            Self::List => "There was a problem loading the tasks.",
            Self::Add => "There was an error adding the task.",
            Self::Edit => "There was a problem editing the task.",
            Self::Delete => "There was a problem deleting the task.",
            Self::Today => "There was a problem loading today's tasks.",
        }
    }
}

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum WebError {
    /// The task service rejected the request.
    #[error("{action:?} failed: {source}")]
    Task {
        /// Operation being attempted.
        action: Action,
        /// Underlying service error.
        source: TaskLifecycleError,
    },

    /// The path segment cannot name a task.
    #[error("no task matches '{0}'")]
    UnknownTask(String),

    /// A template failed to render.
    #[error("failed to render view: {0}")]
    Render(#[from] minijinja::Error),
}

impl WebError {
    /// Returns a mapper tagging service errors with `action`.
    #[must_use]
    pub fn during(action: Action) -> impl FnOnce(TaskLifecycleError) -> Self {
        move |source| Self::Task { action, source }
    }

    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Task {
                source: TaskLifecycleError::Validation(_),
                ..
            } => StatusCode::BAD_REQUEST,
            Self::Task {
                source: TaskLifecycleError::NotFound(_),
                ..
            }
            | Self::UnknownTask(_) => StatusCode::NOT_FOUND,
            Self::Task {
                source: TaskLifecycleError::Storage(_),
                ..
            }
            | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the body shown to the user.
    ///
    /// Validation messages are specific; storage failures stay generic and
    /// the detail only goes to the log.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Task {
                source: source @ TaskLifecycleError::Validation(_),
                ..
            } => source.to_string(),
            Self::Task {
                source: TaskLifecycleError::NotFound(id),
                ..
            } => format!("Task {id} does not exist."),
            Self::UnknownTask(raw) => format!("Task {raw} does not exist."),
            Self::Task {
                action,
                source: TaskLifecycleError::Storage(_),
            } => action.problem_message().to_owned(),
            Self::Render(_) => "There was a problem displaying the page.".to_owned(),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        if let Self::Render(err) = &self {
            error!(kind = "render", error = %err, "view rendering failed");
        }
        (self.status(), self.public_message()).into_response()
    }
}
