//! Shared application state handed to every request handler.

use super::views::Views;
use crate::task::{ports::TaskRepository, services::TaskLifecycleService};
use mockable::Clock;
use std::sync::Arc;

/// Shared application dependencies.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Task service backed by the configured store.
    pub service: Arc<TaskLifecycleService<R, C>>,
    /// Compiled templates.
    pub views: Arc<Views>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Bundles the service and views.
    #[must_use]
    pub const fn new(service: Arc<TaskLifecycleService<R, C>>, views: Arc<Views>) -> Self {
        Self { service, views }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            views: Arc::clone(&self.views),
        }
    }
}
