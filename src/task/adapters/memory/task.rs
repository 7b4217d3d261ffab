//! In-memory repository for task tracking tests and embedding.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewTask, Task, TaskDetails, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are issued from a counter and never reused, mirroring an
/// `AUTOINCREMENT` column.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i32,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn store_error(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Collects matching tasks in creation order.
fn in_creation_order<'a>(tasks: impl Iterator<Item = &'a Task>) -> Vec<Task> {
    let mut ordered: Vec<Task> = tasks.cloned().collect();
    ordered.sort_by_key(|task| (task.created_at(), task.id()));
    ordered
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(store_error)?;
        let next_id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| store_error("task identifier space exhausted"))?;
        state.last_id = next_id;

        let stored = task.clone().into_task(TaskId::new(next_id));
        state.tasks.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(store_error)?;
        Ok(in_creation_order(state.tasks.values()))
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(store_error)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_starting_on(&self, date: NaiveDate) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(store_error)?;
        Ok(in_creation_order(
            state
                .tasks
                .values()
                .filter(|task| task.start().date() == date),
        ))
    }

    async fn update(&self, id: TaskId, details: &TaskDetails) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(store_error)?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.replace_details(details.clone());
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(store_error)?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}
