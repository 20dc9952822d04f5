//! Forward-only cursor over the rows of a query.
//!
//! A [`SelectRows`] is only ever handed out by
//! [`Store::select`](super::store::Store::select), which owns the prepared
//! statement for the duration of the call. The statement is finalized when
//! that call returns, whichever way it returns.

use super::error::Result;
use rusqlite::types::Value;
use rusqlite::Rows;

/// Outcome of [`SelectRows::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A row is available through the column accessors.
    Row,
    /// The result set is exhausted.
    Done,
}

/// Cursor positioned before the first row until [`advance`](Self::advance)
/// is called.
pub struct SelectRows<'stmt> {
    rows: Rows<'stmt>,
    column_count: usize,
    current: Option<Vec<Value>>,
    done: bool,
}

impl<'stmt> SelectRows<'stmt> {
    pub(crate) fn new(rows: Rows<'stmt>, column_count: usize) -> Self {
        Self {
            rows,
            column_count,
            current: None,
            done: false,
        }
    }

    /// Moves to the next row.
    ///
    /// Returns [`Step::Done`] once the result set is exhausted, and keeps
    /// returning it on further calls.
    pub fn advance(&mut self) -> Result<Step> {
        if self.done {
            return Ok(Step::Done);
        }
        match self.rows.next()? {
            Some(row) => {
                let values = (0..self.column_count).map(|index| row.get::<_, Value>(index)).collect::<rusqlite::Result<Vec<_>>>()?;
                self.current = Some(values);
                Ok(Step::Row)
            }
            None => {
                self.current = None;
                self.done = true;
                Ok(Step::Done)
            }
        }
    }

    /// Number of columns in each row.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Reads column `index` as a 32-bit integer, truncating wider values the
    /// way SQLite does.
    pub fn int_column(&self, index: usize) -> Option<i32> {
        self.int64_column(index).map(|value| value as i32)
    }

    /// Reads column `index` as a 64-bit integer.
    ///
    /// Non-integer storage classes are coerced: reals are truncated, text is
    /// parsed (0 when it is not a number) and blobs read as 0.
    pub fn int64_column(&self, index: usize) -> Option<i64> {
        match self.value(index) {
            Value::Null => None,
            Value::Integer(value) => Some(*value),
            Value::Real(value) => Some(*value as i64),
            Value::Text(text) => Some(text.trim().parse().unwrap_or(0)),
            Value::Blob(_) => Some(0),
        }
    }

    /// Reads column `index` as text.
    pub fn string_column(&self, index: usize) -> Option<String> {
        match self.value(index) {
            Value::Null => None,
            Value::Integer(value) => Some(value.to_string()),
            Value::Real(value) => Some(value.to_string()),
            Value::Text(text) => Some(text.clone()),
            Value::Blob(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    fn value(&self, index: usize) -> &Value {
        let Some(values) = &self.current else {
            if self.done {
                panic!("column {index} read after the cursor reported Done");
            }
            panic!("column {index} read before advance() produced a row");
        };
        assert!(index < values.len(), "column {index} out of range, row has {} columns", values.len());
        &values[index]
    }
}
