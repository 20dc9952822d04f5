//! Portable error taxonomy for the storage layer.
//!
//! Every failure surfaced by SQLite (through `rusqlite`) is translated into a
//! [`StatusCode`] so callers can reason about it without depending on the
//! engine's native codes. "No more rows" is deliberately absent: the cursor
//! reports it as [`Step::Done`](super::select_rows::Step::Done), which is a
//! normal outcome rather than a failure.

use rusqlite::ErrorCode;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Portable status code translated from a native engine failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// Another connection holds a conflicting lock on the file.
    Busy,
    /// A table inside this connection is locked.
    Locked,
    /// A write was attempted on a read-only store.
    ReadOnly,
    /// A NOT NULL, UNIQUE, CHECK or foreign key constraint failed.
    Constraint,
    /// The file is damaged.
    Corrupt,
    /// The file is not a database at all.
    NotADatabase,
    /// The file could not be opened or created.
    CannotOpen,
    /// The disk or the database quota is full.
    DiskFull,
    /// Operating system level I/O failure.
    Io,
    /// Permission denied by the file system or an authorizer.
    PermissionDenied,
    /// The schema changed under a prepared statement.
    SchemaChanged,
    /// A value or statement exceeded an engine limit.
    TooBig,
    /// A value had a type that could not be converted.
    TypeMismatch,
    /// The statement text is invalid or has the wrong shape.
    InvalidStatement,
    /// The engine API was used incorrectly.
    Misuse,
    /// Memory allocation failed.
    OutOfMemory,
    /// The operation was interrupted or aborted.
    Interrupted,
    /// Anything the engine did not classify.
    Unknown,
}

impl StatusCode {
    /// Translates a `rusqlite` error into its portable code.
    pub fn from_sqlite(err: &rusqlite::Error) -> Self {
        use rusqlite::Error as E;

        match err {
            E::SqliteFailure(native, _) => Self::from_native(native.code),
            E::FromSqlConversionFailure(..) | E::IntegralValueOutOfRange(..) | E::InvalidColumnType(..) | E::ToSqlConversionFailure(..) => {
                Self::TypeMismatch
            }
            E::Utf8Error(..) | E::NulError(..) => Self::TypeMismatch,
            E::InvalidQuery | E::MultipleStatement | E::ExecuteReturnedResults | E::InvalidParameterCount(..) | E::InvalidParameterName(..) => {
                Self::InvalidStatement
            }
            E::InvalidColumnIndex(..) | E::InvalidColumnName(..) | E::StatementChangedRows(..) | E::QueryReturnedNoRows => Self::Misuse,
            E::SqliteSingleThreadedMode => Self::Misuse,
            E::InvalidPath(..) => Self::CannotOpen,
            _ => Self::Unknown,
        }
    }

    fn from_native(code: ErrorCode) -> Self {
        match code {
            ErrorCode::DatabaseBusy => Self::Busy,
            ErrorCode::DatabaseLocked => Self::Locked,
            ErrorCode::ReadOnly => Self::ReadOnly,
            ErrorCode::ConstraintViolation => Self::Constraint,
            ErrorCode::DatabaseCorrupt => Self::Corrupt,
            ErrorCode::NotADatabase => Self::NotADatabase,
            ErrorCode::CannotOpen | ErrorCode::NoLargeFileSupport => Self::CannotOpen,
            ErrorCode::DiskFull => Self::DiskFull,
            ErrorCode::SystemIoFailure | ErrorCode::FileLockingProtocolFailed | ErrorCode::NotFound => Self::Io,
            ErrorCode::PermissionDenied | ErrorCode::AuthorizationForStatementDenied => Self::PermissionDenied,
            ErrorCode::SchemaChanged => Self::SchemaChanged,
            ErrorCode::TooBig => Self::TooBig,
            ErrorCode::TypeMismatch => Self::TypeMismatch,
            ErrorCode::ApiMisuse | ErrorCode::ParameterOutOfRange => Self::Misuse,
            ErrorCode::OutOfMemory => Self::OutOfMemory,
            ErrorCode::OperationInterrupted | ErrorCode::OperationAborted => Self::Interrupted,
            _ => Self::Unknown,
        }
    }

    /// Whether waiting and trying again may succeed.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::Busy | Self::Locked)
    }

    /// Stable lowercase label, used in log fields.
    pub fn label(self) -> &'static str {
        match self {
            Self::Busy => "busy",
            Self::Locked => "locked",
            Self::ReadOnly => "read_only",
            Self::Constraint => "constraint",
            Self::Corrupt => "corrupt",
            Self::NotADatabase => "not_a_database",
            Self::CannotOpen => "cannot_open",
            Self::DiskFull => "disk_full",
            Self::Io => "io",
            Self::PermissionDenied => "permission_denied",
            Self::SchemaChanged => "schema_changed",
            Self::TooBig => "too_big",
            Self::TypeMismatch => "type_mismatch",
            Self::InvalidStatement => "invalid_statement",
            Self::Misuse => "misuse",
            Self::OutOfMemory => "out_of_memory",
            Self::Interrupted => "interrupted",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors produced by the store and the entity layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be opened or created.
    #[error("failed to open store at {}: {source}", path.display())]
    Open {
        path: PathBuf,
        code: StatusCode,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement failed to prepare, bind or step.
    #[error("statement failed ({code}): {source}")]
    Statement {
        code: StatusCode,
        #[source]
        source: rusqlite::Error,
    },

    /// A NOT NULL column came back as NULL.
    #[error("column {column} of table `{table}` is unexpectedly NULL")]
    UnexpectedNull { table: &'static str, column: usize },

    /// A stored epoch-seconds value cannot be represented as a time point.
    #[error("stored timestamp {0} is out of range")]
    Timestamp(i64),

    /// An update targeted a row that is no longer in the table.
    #[error("row {id} of table `{table}` does not exist")]
    MissingRow { table: &'static str, id: i64 },
}

impl StoreError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: rusqlite::Error) -> Self {
        Self::Open {
            path: path.into(),
            code: StatusCode::from_sqlite(&source),
            source,
        }
    }

    /// The translated engine status, when the failure came from the engine.
    pub fn code(&self) -> Option<StatusCode> {
        match self {
            Self::Open { code, .. } | Self::Statement { code, .. } => Some(*code),
            Self::UnexpectedNull { .. } | Self::Timestamp(_) | Self::MissingRow { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(source: rusqlite::Error) -> Self {
        Self::Statement {
            code: StatusCode::from_sqlite(&source),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    fn failure(code: ErrorCode, extended_code: i32) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(ffi::Error { code, extended_code }, None)
    }

    #[test]
    fn busy_and_locked_are_retryable() {
        let busy: StoreError = failure(ErrorCode::DatabaseBusy, 5).into();
        let locked: StoreError = failure(ErrorCode::DatabaseLocked, 6).into();

        assert_eq!(busy.code(), Some(StatusCode::Busy));
        assert!(StatusCode::Busy.is_retryable());
        assert_eq!(locked.code(), Some(StatusCode::Locked));
        assert!(StatusCode::Locked.is_retryable());
        assert!(!StatusCode::Constraint.is_retryable());
    }

    #[test]
    fn constraint_and_readonly_translate() {
        assert_eq!(StatusCode::from_sqlite(&failure(ErrorCode::ConstraintViolation, 1299)), StatusCode::Constraint);
        assert_eq!(StatusCode::from_sqlite(&failure(ErrorCode::ReadOnly, 8)), StatusCode::ReadOnly);
        assert_eq!(StatusCode::from_sqlite(&failure(ErrorCode::NotADatabase, 26)), StatusCode::NotADatabase);
    }

    #[test]
    fn non_native_errors_translate() {
        assert_eq!(StatusCode::from_sqlite(&rusqlite::Error::InvalidColumnIndex(3)), StatusCode::Misuse);
        assert_eq!(StatusCode::from_sqlite(&rusqlite::Error::MultipleStatement), StatusCode::InvalidStatement);
        assert_eq!(StatusCode::from_sqlite(&rusqlite::Error::IntegralValueOutOfRange(0, 1 << 40)), StatusCode::TypeMismatch);
    }

    #[test]
    fn error_display_carries_code() {
        let err: StoreError = failure(ErrorCode::ReadOnly, 8).into();
        assert!(err.to_string().starts_with("statement failed (read_only)"));

        let err = StoreError::UnexpectedNull { table: "task", column: 1 };
        assert_eq!(err.to_string(), "column 1 of table `task` is unexpectedly NULL");
        assert_eq!(err.code(), None);
    }
}
