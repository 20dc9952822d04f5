//! Activity entity: an interval of time spent on a task.
//!
//! Time points are stored as whole seconds since the UTC epoch. Anything
//! finer than a second is floored when an [`Activity`] is built, so what is
//! saved is exactly what is loaded back.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::{TimeDelta, Utc};
//! use tasktrack::db::{activities::Activity, store::Store, tasks::Task};
//!
//! let store = Store::open("tasktrack.db")?;
//! Task::ensure_table_created(&store)?;
//! Activity::ensure_table_created(&store)?;
//!
//! let mut task = Task::new("Review");
//! task.save(&store)?;
//!
//! let start = Utc::now();
//! let mut activity = Activity::new(&task, start);
//! activity.set_interval(start, start + TimeDelta::minutes(25));
//! activity.save(&store)?;
//! # Ok::<(), tasktrack::db::error::StoreError>(())
//! ```

use super::error::{Result, StoreError};
use super::select_rows::{SelectRows, Step};
use super::store::Store;
use super::tasks::Task;
use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use rusqlite::params;
use tracing::{debug, warn};

const TABLE: &str = "activity";

const SCHEMA_ACTIVITY: &str = "CREATE TABLE IF NOT EXISTS activity (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    task_id INTEGER NOT NULL REFERENCES task(id),
    start_time INTEGER NOT NULL,
    end_time INTEGER NULL
)";
const INDEX_START_TIME: &str = "CREATE INDEX IF NOT EXISTS activity_start_time ON activity(start_time)";
const INSERT_ACTIVITY: &str = "INSERT INTO activity (task_id, start_time, end_time) VALUES (?1, ?2, ?3)";
const UPDATE_ACTIVITY: &str = "UPDATE activity SET task_id = ?2, start_time = ?3, end_time = ?4 WHERE id = ?1";
const SELECT_ACTIVITIES: &str = "SELECT id, task_id, start_time, end_time FROM activity ORDER BY id";
const SELECT_ACTIVITIES_AFTER: &str = "SELECT id, task_id, start_time, end_time FROM activity WHERE start_time >= ?1 ORDER BY id";
const SELECT_ACTIVITIES_FOR_TASK: &str = "SELECT id, task_id, start_time, end_time FROM activity WHERE task_id = ?1 ORDER BY id";
const DELETE_ACTIVITY: &str = "DELETE FROM activity WHERE id = ?1";

/// A point in time, UTC, at one-second resolution.
pub type TimePoint = DateTime<Utc>;

/// Drops the sub-second part of `time_point`.
pub fn floor_to_seconds(time_point: TimePoint) -> TimePoint {
    time_point.trunc_subsecs(0)
}

/// Seconds since the UTC epoch, floored.
pub fn encode_time_point(time_point: &TimePoint) -> i64 {
    time_point.timestamp()
}

pub fn decode_time_point(seconds: i64) -> Result<TimePoint> {
    DateTime::from_timestamp(seconds, 0).ok_or(StoreError::Timestamp(seconds))
}

/// Time spent on one task between `start_time` and `end_time`.
///
/// An activity is open while `end_time` is `None`. Rows written by this
/// crate always carry an end strictly after the start; rows with a NULL end
/// written by other tools load as open activities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    id: Option<i64>,
    task_id: i64,
    start_time: TimePoint,
    end_time: Option<TimePoint>,
}

impl Activity {
    /// Starts a new, still open, activity for `task`.
    ///
    /// # Panics
    ///
    /// Panics if `task` has not been saved.
    pub fn new(task: &Task, start_time: TimePoint) -> Self {
        Self {
            id: None,
            task_id: saved_task_id(task),
            start_time: floor_to_seconds(start_time),
            end_time: None,
        }
    }

    /// Store-assigned identifier, `None` until the first [`save`](Self::save).
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn task_id(&self) -> i64 {
        self.task_id
    }

    pub fn start_time(&self) -> TimePoint {
        self.start_time
    }

    pub fn end_time(&self) -> Option<TimePoint> {
        self.end_time
    }

    /// Length of the interval, once it has an end.
    pub fn duration(&self) -> Option<TimeDelta> {
        self.end_time.map(|end| end - self.start_time)
    }

    /// Attributes the activity to another task.
    ///
    /// # Panics
    ///
    /// Panics if `task` has not been saved.
    pub fn set_task(&mut self, task: &Task) {
        self.task_id = saved_task_id(task);
    }

    /// Sets both ends of the interval.
    ///
    /// # Panics
    ///
    /// Panics unless `end` is strictly after `start` at one-second
    /// resolution.
    pub fn set_interval(&mut self, start: TimePoint, end: TimePoint) {
        let start = floor_to_seconds(start);
        let end = floor_to_seconds(end);
        assert!(end > start, "activity interval must end after it starts ({start} .. {end})");
        self.start_time = start;
        self.end_time = Some(end);
    }

    /// Creates the `activity` table and its start time index.
    pub fn ensure_table_created(store: &Store) -> Result<()> {
        store.execute(SCHEMA_ACTIVITY)?;
        store.execute(INDEX_START_TIME)?;
        debug!(table = TABLE, "table ready");
        Ok(())
    }

    /// Loads every activity in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnexpectedNull`] for a row missing a required
    /// column and [`StoreError::Timestamp`] for seconds outside the
    /// representable range, besides engine failures.
    pub fn load_all(store: &Store) -> Result<Vec<Activity>> {
        store.select(SELECT_ACTIVITIES, [], collect_activities)
    }

    /// Loads the activities that started at or after `earliest_start_time`.
    ///
    /// The bound is inclusive and compared at one-second resolution; the
    /// query is served by the `activity_start_time` index.
    pub fn load_after(store: &Store, earliest_start_time: TimePoint) -> Result<Vec<Activity>> {
        store.select(SELECT_ACTIVITIES_AFTER, [encode_time_point(&earliest_start_time)], collect_activities)
    }

    /// Loads the activities attributed to the task with identifier `task_id`.
    pub fn load_for_task(store: &Store, task_id: i64) -> Result<Vec<Activity>> {
        store.select(SELECT_ACTIVITIES_FOR_TASK, [task_id], collect_activities)
    }

    /// Inserts the activity on first save, rewrites its row afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingRow`] when the row of a saved activity
    /// has been deleted.
    ///
    /// # Panics
    ///
    /// Panics when the activity has an end that is not after its start,
    /// which can only come from a damaged row loaded from the store.
    pub fn save(&mut self, store: &Store) -> Result<()> {
        if let Some(end) = self.end_time {
            assert!(end > self.start_time, "activity interval must end after it starts ({} .. {end})", self.start_time);
        }
        let start = encode_time_point(&self.start_time);
        let end = self.end_time.as_ref().map(encode_time_point);
        match self.id {
            None => {
                store.execute_with(INSERT_ACTIVITY, params![self.task_id, start, end])?;
                let id = store.last_insert_id();
                debug!(id, task_id = self.task_id, "activity inserted");
                self.id = Some(id);
            }
            Some(id) => {
                let changed = store.execute_with(UPDATE_ACTIVITY, params![id, self.task_id, start, end])?;
                if changed == 0 {
                    warn!(id, "activity row is missing, nothing updated");
                    return Err(StoreError::MissingRow { table: TABLE, id });
                }
            }
        }
        Ok(())
    }

    /// Removes the activity's row.
    ///
    /// # Panics
    ///
    /// Panics if the activity was never saved.
    pub fn delete(&self, store: &Store) -> Result<()> {
        let Some(id) = self.id else {
            panic!("cannot delete an activity which was never saved");
        };
        store.execute_with(DELETE_ACTIVITY, [id])?;
        Ok(())
    }
}

fn saved_task_id(task: &Task) -> i64 {
    match task.id() {
        Some(id) => id,
        None => panic!("task `{}` must be saved before activities can reference it", task.name()),
    }
}

fn collect_activities(rows: &mut SelectRows<'_>) -> Result<Vec<Activity>> {
    let mut activities = Vec::new();
    while rows.advance()? == Step::Row {
        activities.push(activity_from_row(rows)?);
    }
    Ok(activities)
}

fn activity_from_row(row: &SelectRows<'_>) -> Result<Activity> {
    let required = |column: usize| row.int64_column(column).ok_or(StoreError::UnexpectedNull { table: TABLE, column });
    Ok(Activity {
        id: Some(required(0)?),
        task_id: required(1)?,
        start_time: decode_time_point(required(2)?)?,
        end_time: row.int64_column(3).map(decode_time_point).transpose()?,
    })
}
