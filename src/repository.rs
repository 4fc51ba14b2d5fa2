// src/repository.rs

use log::debug;
use sqlx::sqlite::SqlitePool;
use thiserror::Error;

use crate::models::Task;

/// Errors surfaced by the task store.
///
/// The three domain variants map to 400 responses at the HTTP boundary;
/// `Database` covers connection and I/O failures and maps to 500.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// An insert violated the unique constraint on the external key.
    #[error("record already exists")]
    DuplicateKey,

    /// An update matched zero rows for the given external key.
    #[error("update failed: no task with uuid {0}")]
    UpdateFailed(String),

    /// A delete matched zero rows for the given external key.
    #[error("delete failed: no task with uuid {0}")]
    DeleteFailed(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Durable CRUD over the `tasks` relation.
///
/// Cheap to clone; the pool is shared. Every statement is parameter-bound.
#[derive(Clone)]
pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `tasks` relation if it does not exist yet. Idempotent,
    /// called on startup and again on every list request.
    pub async fn migrate(&self) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tasks(
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                uuid TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                description TEXT,
                is_finished INTEGER DEFAULT 0,
                due_date DATETIME DEFAULT CURRENT_TIMESTAMP,
                owner_id INTEGER DEFAULT 1,
                assignee_id INTEGER DEFAULT 1,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Insert a new task under the caller-supplied external key. Returns
    /// the task with the store-assigned id filled in, or `DuplicateKey`
    /// when the key is already taken.
    pub async fn create(&self, mut task: Task) -> Result<Task, RepositoryError> {
        let result = sqlx::query("INSERT INTO tasks (uuid, name, description) VALUES (?, ?, ?)")
            .bind(&task.uuid)
            .bind(&task.name)
            .bind(&task.description)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => {
                task.id = done.last_insert_rowid();
                debug!("inserted task {} with id {}", task.uuid, task.id);
                Ok(task)
            }
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(RepositoryError::DuplicateKey)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch every task in store-native order. Empty store yields an
    /// empty vec, never an absent value.
    pub async fn all(&self) -> Result<Vec<Task>, RepositoryError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, uuid, name, description, is_finished, due_date, \
             owner_id, assignee_id, created_at, updated_at FROM tasks",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(tasks)
    }

    /// Overwrite name, description, and the completion flag of the task
    /// matching the given external key. Due date, owner, and assignee are
    /// accepted in the request shape but deliberately not persisted here.
    pub async fn update(&self, task: &Task) -> Result<Task, RepositoryError> {
        let done =
            sqlx::query("UPDATE tasks SET name = ?, description = ?, is_finished = ? WHERE uuid = ?")
                .bind(&task.name)
                .bind(&task.description)
                .bind(task.is_finished)
                .bind(&task.uuid)
                .execute(&self.pool)
                .await?;

        if done.rows_affected() == 0 {
            return Err(RepositoryError::UpdateFailed(task.uuid.clone()));
        }
        Ok(task.clone())
    }

    /// Remove the task matching the given external key.
    pub async fn delete(&self, task: &Task) -> Result<(), RepositoryError> {
        let done = sqlx::query("DELETE FROM tasks WHERE uuid = ?")
            .bind(&task.uuid)
            .execute(&self.pool)
            .await?;

        if done.rows_affected() == 0 {
            return Err(RepositoryError::DeleteFailed(task.uuid.clone()));
        }
        Ok(())
    }
}
