// src/models/task.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A task row as stored in the `tasks` relation and shipped over the wire.
///
/// Column names are snake_case; the JSON contract uses camelCase
/// (`isFinished`, `dueDate`, ...). Request bodies may omit any field, so
/// the whole shape carries serde defaults and partial payloads still bind.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
#[serde(default, rename_all = "camelCase")]
pub struct Task {
    /// Store-assigned autoincrement id.
    pub id: i64,
    /// External key; unique, immutable, used for all API-boundary lookups.
    pub uuid: String,
    pub name: String,
    pub description: String,
    /// Completion flag, 0 or 1.
    pub is_finished: i64,
    /// Defaults to creation time when the caller does not supply one.
    pub due_date: NaiveDateTime,
    pub owner_id: i64,
    pub assignee_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.is_finished != 0
    }
}

/// Envelope for list responses: `{"data": [...]}`. The array is always
/// present, `[]` when the store is empty.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskList {
    pub data: Vec<Task>,
}

/// Envelope for error messages and delete acknowledgements:
/// `{"message": ...}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Message<T> {
    pub message: T,
}
