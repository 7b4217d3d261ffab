//! `SQLite` adapters for task persistence.

mod models;
mod repository;
mod schema;

pub use repository::{CREATE_SCHEMA_SQL, SqliteTaskRepository, TaskSqlitePool};
