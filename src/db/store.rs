use super::error::{Result, StoreError};
use super::select_rows::SelectRows;
use rusqlite::{Connection, Params};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handle to the embedded SQLite store.
///
/// The handle is meant to be owned by a single component (normally the
/// [`Tracker`](crate::libs::tracker::Tracker)) and used from one thread.
pub struct Store {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Store {
    /// Opens the store at `path`, creating the file if it does not exist.
    ///
    /// The file header is read immediately, so a file that is not a SQLite
    /// database fails here rather than on the first query.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|err| StoreError::open(path, err))?;
        conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))
            .map_err(|err| StoreError::open(path, err))?;
        debug!(path = %path.display(), "store opened");

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Opens a private in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|err| StoreError::open(":memory:", err))?;
        Ok(Self { conn, path: None })
    }

    /// Location of the backing file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Executes a single statement without parameters and returns the number
    /// of changed rows.
    pub fn execute(&self, sql: &str) -> Result<usize> {
        self.execute_with(sql, [])
    }

    /// Executes a single statement with bound parameters.
    pub fn execute_with<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        debug!(sql, "execute");
        Ok(self.conn.execute(sql, params)?)
    }

    /// Row id assigned by the most recent successful insert.
    pub fn last_insert_id(&self) -> i64 {
        self.conn.last_insert_rowid()
    }

    /// Runs `sql` and passes a cursor over its rows to `f`.
    ///
    /// The prepared statement lives exactly as long as this call.
    pub fn select<P, T, F>(&self, sql: &str, params: P, f: F) -> Result<T>
    where
        P: Params,
        F: FnOnce(&mut SelectRows<'_>) -> Result<T>,
    {
        debug!(sql, "select");
        let mut stmt = self.conn.prepare(sql)?;
        let column_count = stmt.column_count();
        let rows = stmt.query(params)?;
        let mut cursor = SelectRows::new(rows, column_count);
        f(&mut cursor)
    }

    /// Runs `f` inside a transaction, committing only when it succeeds.
    pub fn transaction<T>(&self, f: impl FnOnce(&Store) -> Result<T>) -> Result<T> {
        let tx = self.conn.unchecked_transaction()?;
        let value = f(self)?;
        tx.commit()?;
        Ok(value)
    }
}
