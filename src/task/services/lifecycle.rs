//! Service layer for task creation, editing, lookup and the day view.

use crate::task::{
    domain::{
        DaySchedule, NewTask, Task, TaskDetails, TaskDomainError, TaskId, default_today_offset,
        today_in,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{FixedOffset, NaiveDate};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Request payload for creating a task from raw form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    name: String,
    start: String,
    end: String,
}

impl CreateTaskRequest {
    /// Creates a request from the submitted name and timestamps.
    #[must_use]
    pub fn new(name: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Request payload for editing an existing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    task_id: TaskId,
    name: String,
    start: String,
    end: String,
}

impl UpdateTaskRequest {
    /// Creates a request replacing the content of `task_id`.
    #[must_use]
    pub fn new(
        task_id: TaskId,
        name: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            task_id,
            name: name.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns the task being edited.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Submitted input failed validation; nothing was written.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The store rejected the operation.
    #[error(transparent)]
    Storage(TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Returns a stable label for the error category, used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::Storage(_) => "storage",
        }
    }
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other @ TaskRepositoryError::Persistence(_) => Self::Storage(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task orchestration service.
///
/// Constructed once at startup and shared by reference with every request
/// handler.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    today_offset: FixedOffset,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            today_offset: self.today_offset,
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service using the default "today" offset.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            today_offset: default_today_offset(),
        }
    }

    /// Sets the fixed UTC offset used to decide which date is "today".
    #[must_use]
    pub fn with_today_offset(mut self, offset: FixedOffset) -> Self {
        self.today_offset = offset;
        self
    }

    /// Returns the fixed UTC offset used for "today".
    #[must_use]
    pub const fn today_offset(&self) -> FixedOffset {
        self.today_offset
    }

    /// Validates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for a blank or overlong
    /// name or an unparseable timestamp, and [`TaskLifecycleError::Storage`]
    /// when the store rejects the write.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let result = self.create_inner(request).await;
        if let Ok(task) = &result {
            info!(task_id = %task.id(), duration = task.duration(), "task created");
        }
        observe("create", result)
    }

    async fn create_inner(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let details = TaskDetails::parse(&request.name, &request.start, &request.end)?;
        let new_task = NewTask::new(details, &*self.clock);
        Ok(self.repository.insert(&new_task).await?)
    }

    /// Returns every task in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Storage`] when the lookup fails.
    pub async fn list_all(&self) -> TaskLifecycleResult<Vec<Task>> {
        let result: TaskLifecycleResult<Vec<Task>> =
            self.repository.list_all().await.map_err(Into::into);
        if let Ok(tasks) = &result {
            debug!(count = tasks.len(), "listed tasks");
        }
        observe("list", result)
    }

    /// Returns a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist.
    pub async fn get(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let result = match self.repository.find_by_id(id).await {
            Ok(Some(task)) => Ok(task),
            Ok(None) => Err(TaskLifecycleError::NotFound(id)),
            Err(err) => Err(err.into()),
        };
        observe("get", result)
    }

    /// Replaces the name and interval of a task and recomputes its duration.
    ///
    /// Input is validated before the store is touched, so a rejected update
    /// leaves the task unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for invalid input,
    /// [`TaskLifecycleError::NotFound`] when the task does not exist and
    /// [`TaskLifecycleError::Storage`] when the store rejects the write.
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        let result = self.update_inner(request).await;
        if let Ok(task) = &result {
            info!(task_id = %task.id(), duration = task.duration(), "task updated");
        }
        observe("update", result)
    }

    async fn update_inner(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        let details = TaskDetails::parse(&request.name, &request.start, &request.end)?;
        Ok(self.repository.update(request.task_id, &details).await?)
    }

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// including on a repeated delete.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        let result: TaskLifecycleResult<()> = self.repository.delete(id).await.map_err(Into::into);
        if result.is_ok() {
            info!(task_id = %id, "task deleted");
        }
        observe("delete", result)
    }

    /// Lays out the tasks starting on `date` against the half-hour grid.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Storage`] when the lookup fails.
    pub async fn schedule_for(&self, date: NaiveDate) -> TaskLifecycleResult<DaySchedule> {
        let result: TaskLifecycleResult<DaySchedule> = self
            .repository
            .find_starting_on(date)
            .await
            .map(|tasks| DaySchedule::build(date, &tasks))
            .map_err(Into::into);
        observe("schedule", result)
    }

    /// Returns today's date at the configured offset.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        today_in(&*self.clock, self.today_offset)
    }

    /// Lays out today's tasks against the half-hour grid.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Storage`] when the lookup fails.
    pub async fn today_schedule(&self) -> TaskLifecycleResult<DaySchedule> {
        self.schedule_for(self.today()).await
    }
}

/// Logs a failed operation with its error category and passes the result on.
fn observe<T>(operation: &'static str, result: TaskLifecycleResult<T>) -> TaskLifecycleResult<T> {
    if let Err(err) = &result {
        match err {
            TaskLifecycleError::Storage(_) => {
                error!(operation, kind = err.kind(), error = %err, "task operation failed");
            }
            TaskLifecycleError::Validation(_) => {
                warn!(operation, kind = err.kind(), error = %err, "task input rejected");
            }
            TaskLifecycleError::NotFound(_) => {
                debug!(operation, kind = err.kind(), error = %err, "task not found");
            }
        }
    }
    result
}
