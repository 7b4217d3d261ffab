//! `SQLite` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskDetails, TaskId, TaskName},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;

/// Schema applied by [`SqliteTaskRepository::ensure_schema`].
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2024-01-01-000000_create_tasks/up.sql");

/// `SQLite` connection pool type used by task adapters.
pub type TaskSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Per-connection settings applied when the pool hands out a connection.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute("PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// `SQLite`-backed task repository.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: TaskSqlitePool,
}

impl SqliteTaskRepository {
    /// Creates a new repository from a `SQLite` connection pool.
    #[must_use]
    pub const fn new(pool: TaskSqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool for `database_url`.
    ///
    /// In-memory databases live only as long as their connection, so they get
    /// a single connection that is never recycled.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the pool cannot
    /// establish its initial connection.
    pub fn connect(database_url: &str) -> TaskRepositoryResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let builder = Pool::builder().connection_customizer(Box::new(SqlitePragmas));
        let configured = if is_in_memory(database_url) {
            builder
                .max_size(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            builder
        };
        let pool = configured
            .build(manager)
            .map_err(TaskRepositoryError::persistence)?;
        Ok(Self::new(pool))
    }

    /// Creates the `tasks` table and its indexes when missing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the DDL fails.
    pub async fn ensure_schema(&self) -> TaskRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_SCHEMA_SQL)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let new_row = to_new_row(task);
        self.run_blocking(move |connection| {
            let row = connection
                .transaction(|conn| {
                    diesel::insert_into(tasks::table)
                        .values(&new_row)
                        .returning(TaskRow::as_returning())
                        .get_result::<TaskRow>(conn)
                })
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_starting_on(&self, date: NaiveDate) -> TaskRepositoryResult<Vec<Task>> {
        let day_start = date.and_time(NaiveTime::MIN);
        let next_day_start = date
            .succ_opt()
            .map_or(NaiveDateTime::MAX, |next| next.and_time(NaiveTime::MIN));
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::start_at.ge(day_start))
                .filter(tasks::start_at.lt(next_day_start))
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn update(&self, id: TaskId, details: &TaskDetails) -> TaskRepositoryResult<Task> {
        let changes = to_changeset(details);
        self.run_blocking(move |connection| {
            let row = connection
                .transaction(|conn| {
                    diesel::update(tasks::table.find(id.value()))
                        .set(&changes)
                        .returning(TaskRow::as_returning())
                        .get_result::<TaskRow>(conn)
                        .optional()
                })
                .map_err(TaskRepositoryError::persistence)?;
            row.map_or_else(|| Err(TaskRepositoryError::NotFound(id)), row_to_task)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let removed = connection
                .transaction(|conn| diesel::delete(tasks::table.find(id.value())).execute(conn))
                .map_err(TaskRepositoryError::persistence)?;
            if removed == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url == ":memory:" || database_url.contains("mode=memory")
}

fn to_new_row(task: &NewTask) -> NewTaskRow {
    let details = task.details();
    NewTaskRow {
        name: details.name().as_str().to_owned(),
        created_at: task.created_at().naive_utc(),
        start_at: details.start(),
        end_at: details.end(),
        duration_minutes: details.duration(),
    }
}

fn to_changeset(details: &TaskDetails) -> TaskChangeset {
    TaskChangeset {
        name: details.name().as_str().to_owned(),
        start_at: details.start(),
        end_at: details.end(),
        duration_minutes: details.duration(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        name: persisted_name,
        created_at,
        start_at,
        end_at,
        duration_minutes,
    } = row;

    let name = TaskName::new(persisted_name).map_err(TaskRepositoryError::persistence)?;
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        name,
        start: start_at,
        end: end_at,
        duration: duration_minutes,
        created_at: created_at.and_utc(),
    }))
}
