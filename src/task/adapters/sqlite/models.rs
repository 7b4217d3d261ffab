//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i32,
    /// Task name.
    pub name: String,
    /// Creation timestamp in UTC.
    pub created_at: NaiveDateTime,
    /// Task start.
    pub start_at: NaiveDateTime,
    /// Task end.
    pub end_at: NaiveDateTime,
    /// Duration in minutes.
    pub duration_minutes: f64,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task name.
    pub name: String,
    /// Creation timestamp in UTC.
    pub created_at: NaiveDateTime,
    /// Task start.
    pub start_at: NaiveDateTime,
    /// Task end.
    pub end_at: NaiveDateTime,
    /// Duration in minutes.
    pub duration_minutes: f64,
}

/// Changeset applied when a task is edited. `created_at` is never touched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Task name.
    pub name: String,
    /// Task start.
    pub start_at: NaiveDateTime,
    /// Task end.
    pub end_at: NaiveDateTime,
    /// Duration in minutes.
    pub duration_minutes: f64,
}
