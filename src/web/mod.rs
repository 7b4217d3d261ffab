//! HTTP surface: routing, form handling and server-side rendering.

pub mod error;
pub mod forms;
pub mod handlers;
pub mod state;
pub mod views;

pub use error::{Action, WebError};
pub use state::AppState;
pub use views::Views;

use crate::task::ports::TaskRepository;
use axum::{Router, routing::get};
use mockable::Clock;
use tower_http::trace::TraceLayer;

/// Builds the application router.
#[must_use]
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/",
            get(handlers::list::<R, C>).post(handlers::list::<R, C>),
        )
        .route(
            "/add/",
            get(handlers::add_form::<R, C>).post(handlers::add::<R, C>),
        )
        .route(
            "/edit/{id}",
            get(handlers::edit_form::<R, C>).post(handlers::edit::<R, C>),
        )
        .route("/delete/{id}", get(handlers::delete::<R, C>))
        .route("/today/", get(handlers::today::<R, C>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
