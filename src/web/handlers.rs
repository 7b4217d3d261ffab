//! HTTP handlers for the task pages.

use super::{
    error::{Action, WebError},
    forms::TaskForm,
    state::AppState,
};
use crate::task::{domain::TaskId, ports::TaskRepository};
use axum::{
    Form,
    extract::{Path, State},
    response::{Html, Redirect},
};
use mockable::Clock;

/// Result type for page handlers.
pub type PageResult = Result<Html<String>, WebError>;

/// `GET|POST /`: all tasks in creation order.
///
/// # Errors
///
/// Returns [`WebError`] when the store or the view fails.
pub async fn list<R, C>(State(state): State<AppState<R, C>>) -> PageResult
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = state
        .service
        .list_all()
        .await
        .map_err(WebError::during(Action::List))?;
    Ok(Html(state.views.task_list(&tasks)?))
}

/// Reads a task id from a path segment.
///
/// Segments that are not an `i32` cannot name a stored task, so they are
/// reported as not found rather than as bad requests.
fn parse_task_id(raw: &str) -> Result<TaskId, WebError> {
    raw.parse::<i32>()
        .map(TaskId::new)
        .map_err(|_| WebError::UnknownTask(raw.to_owned()))
}

/// `GET /add/`: the empty creation form.
///
/// # Errors
///
/// Returns [`WebError::Render`] when the view fails.
#[expect(clippy::unused_async, reason = "axum handlers must return futures")]
pub async fn add_form<R, C>(State(state): State<AppState<R, C>>) -> PageResult
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Ok(Html(state.views.add_form()?))
}

/// `POST /add/`: creates a task and returns to the list.
///
/// # Errors
///
/// Returns [`WebError`] for invalid input or a rejected write.
pub async fn add<R, C>(
    State(state): State<AppState<R, C>>,
    Form(form): Form<TaskForm>,
) -> Result<Redirect, WebError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    state
        .service
        .create(form.into_create_request())
        .await
        .map_err(WebError::during(Action::Add))?;
    Ok(Redirect::to("/"))
}

/// `GET /edit/{id}`: the edit form pre-filled with the stored task.
///
/// # Errors
///
/// Returns [`WebError`] when the task does not exist or the view fails.
pub async fn edit_form<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> PageResult
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = state
        .service
        .get(parse_task_id(&raw_id)?)
        .await
        .map_err(WebError::during(Action::Edit))?;
    Ok(Html(state.views.edit_form(&task)?))
}

/// `POST /edit/{id}`: saves the edit and returns to the list.
///
/// # Errors
///
/// Returns [`WebError`] for invalid input, a missing task or a rejected
/// write.
pub async fn edit<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
    Form(form): Form<TaskForm>,
) -> Result<Redirect, WebError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    state
        .service
        .update(form.into_update_request(parse_task_id(&raw_id)?))
        .await
        .map_err(WebError::during(Action::Edit))?;
    Ok(Redirect::to("/"))
}

/// `GET /delete/{id}`: deletes a task and returns to the list.
///
/// # Errors
///
/// Returns [`WebError`] for a missing task or a rejected delete.
pub async fn delete<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> Result<Redirect, WebError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    state
        .service
        .delete(parse_task_id(&raw_id)?)
        .await
        .map_err(WebError::during(Action::Delete))?;
    Ok(Redirect::to("/"))
}

/// `GET /today/`: today's tasks on the half-hour grid.
///
/// # Errors
///
/// Returns [`WebError`] when the store or the view fails.
pub async fn today<R, C>(State(state): State<AppState<R, C>>) -> PageResult
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let schedule = state
        .service
        .today_schedule()
        .await
        .map_err(WebError::during(Action::Today))?;
    Ok(Html(state.views.day_schedule(&schedule)?))
}
