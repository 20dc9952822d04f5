//! Task entity and its persistence.
//!
//! A [`Task`] is a named unit of work that time can be tracked against. It
//! has no identifier until it is saved for the first time; the store assigns
//! one and it never changes afterwards.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktrack::db::{store::Store, tasks::Task};
//!
//! let store = Store::open("tasktrack.db")?;
//! Task::ensure_table_created(&store)?;
//!
//! let mut task = Task::new("Write report");
//! task.save(&store)?;
//! assert!(task.id().is_some());
//! # Ok::<(), tasktrack::db::error::StoreError>(())
//! ```

use super::error::{Result, StoreError};
use super::select_rows::{SelectRows, Step};
use super::store::Store;
use rusqlite::params;
use tracing::{debug, warn};

const TABLE: &str = "task";

const SCHEMA_TASK: &str = "CREATE TABLE IF NOT EXISTS task (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
)";
const INSERT_TASK: &str = "INSERT INTO task (name) VALUES (?1)";
const UPDATE_TASK: &str = "UPDATE task SET name = ?2 WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, name FROM task ORDER BY id";
const SELECT_TASK_BY_ID: &str = "SELECT id, name FROM task WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM task WHERE id = ?1";
const DELETE_TASK_ACTIVITIES: &str = "DELETE FROM activity WHERE task_id = ?1";

/// A named unit of work.
///
/// Two tasks compare equal when both the identifier and the name match, so
/// an unsaved task never equals its saved copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: Option<i64>,
    name: String,
}

impl Task {
    /// Creates an unsaved task.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or only whitespace.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert_valid_name(&name);
        Self { id: None, name }
    }

    /// Store-assigned identifier, `None` until the first [`save`](Self::save).
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the task in memory; call [`save`](Self::save) to persist.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or only whitespace.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        assert_valid_name(&name);
        self.name = name;
    }

    /// Creates the `task` table if it does not exist yet.
    ///
    /// Safe to call on every start-up; an existing table and its rows are
    /// left alone.
    pub fn ensure_table_created(store: &Store) -> Result<()> {
        store.execute(SCHEMA_TASK)?;
        debug!(table = TABLE, "table ready");
        Ok(())
    }

    /// Loads every task in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Statement`] when the query fails and
    /// [`StoreError::UnexpectedNull`] when a stored row is damaged.
    pub fn load_all(store: &Store) -> Result<Vec<Task>> {
        store.select(SELECT_TASKS, [], collect_tasks)
    }

    /// Loads the task with identifier `id`, `Ok(None)` when there is none.
    pub fn load_by_id(store: &Store, id: i64) -> Result<Option<Task>> {
        let mut tasks = store.select(SELECT_TASK_BY_ID, [id], collect_tasks)?;
        Ok(tasks.pop())
    }

    /// Inserts the task on first save, updates its row afterwards.
    ///
    /// After a successful insert [`id`](Self::id) holds the new identifier.
    /// On failure the task is unchanged and can be saved again.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingRow`] when the task has an identifier but
    /// its row has been deleted, and [`StoreError::Statement`] when the
    /// engine rejects the write.
    pub fn save(&mut self, store: &Store) -> Result<()> {
        match self.id {
            None => {
                store.execute_with(INSERT_TASK, params![self.name])?;
                let id = store.last_insert_id();
                debug!(id, "task inserted");
                self.id = Some(id);
            }
            Some(id) => {
                let changed = store.execute_with(UPDATE_TASK, params![id, self.name])?;
                if changed == 0 {
                    warn!(id, "task row is missing, nothing updated");
                    return Err(StoreError::MissingRow { table: TABLE, id });
                }
            }
        }
        Ok(())
    }

    /// Removes the task together with its activities.
    ///
    /// Both deletes run in one transaction, so either everything goes or
    /// nothing does.
    ///
    /// # Panics
    ///
    /// Panics if the task was never saved.
    pub fn delete(&self, store: &Store) -> Result<()> {
        let Some(id) = self.id else {
            panic!("cannot delete task `{}` which was never saved", self.name);
        };
        store.transaction(|store| {
            store.execute_with(DELETE_TASK_ACTIVITIES, [id])?;
            store.execute_with(DELETE_TASK, [id])?;
            Ok(())
        })?;
        debug!(id, "task deleted");
        Ok(())
    }
}

fn assert_valid_name(name: &str) {
    assert!(!name.trim().is_empty(), "task name must not be empty");
}

fn collect_tasks(rows: &mut SelectRows<'_>) -> Result<Vec<Task>> {
    let mut tasks = Vec::new();
    while rows.advance()? == Step::Row {
        tasks.push(task_from_row(rows)?);
    }
    Ok(tasks)
}

fn task_from_row(row: &SelectRows<'_>) -> Result<Task> {
    let id = row.int64_column(0).ok_or(StoreError::UnexpectedNull { table: TABLE, column: 0 })?;
    let name = row.string_column(1).ok_or(StoreError::UnexpectedNull { table: TABLE, column: 1 })?;
    Ok(Task { id: Some(id), name })
}
