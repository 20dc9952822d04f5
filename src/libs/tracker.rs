//! Running-task coordinator.
//!
//! The [`Tracker`] owns the store and the notion of "the task being worked
//! on right now". It is either idle or running one task since a given
//! interval start. While running, [`Tracker::record_running_task_activity`]
//! is expected to be called on a fixed cadence by whoever drives the UI; each
//! call persists the elapsed time by extending one activity row.
//!
//! ## State machine
//!
//! ```text
//!            start / change              start
//!   Idle ─────────────────────▶ Running ◀──────┐
//!    ▲                          │  │  │         │
//!    └──────── drop ────────────┘  │  └─────────┘
//!                                  │ change: relabel in place,
//!                                  │ interval start kept
//!                                  ▼
//!                           checkpoint: extend activity,
//!                           interval start = now
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktrack::db::tasks::Task;
//! use tasktrack::libs::tracker::Tracker;
//!
//! let mut tracker = Tracker::open("tasktrack.db")?;
//! let mut task = Task::new("Write report");
//! tracker.save_task(&mut task)?;
//!
//! tracker.start_running_task(task);
//! // ... on every tick:
//! tracker.record_running_task_activity()?;
//! # Ok::<(), tasktrack::db::error::StoreError>(())
//! ```

use super::clock::{Clock, SystemClock};
use super::events::{SubscriptionId, Subscribers, TrackerEvent};
use crate::db::activities::{floor_to_seconds, Activity, TimePoint};
use crate::db::error::Result;
use crate::db::store::Store;
use crate::db::tasks::Task;
use chrono::TimeDelta;
use std::path::Path;
use tracing::{debug, info, warn};

struct RunningTask {
    task: Task,
    /// Start of the time not yet covered by a checkpoint.
    interval_start: TimePoint,
    /// Activity extended by each checkpoint while `task` keeps running.
    open_activity: Option<Activity>,
}

/// Owns the store, the running-task state and the subscriber list.
///
/// Not `Sync`: a tracker is driven from one thread, and notification
/// handlers run on that thread while the triggering call is in progress.
pub struct Tracker<C: Clock = SystemClock> {
    store: Store,
    clock: C,
    running: Option<RunningTask>,
    subscribers: Subscribers,
}

impl Tracker<SystemClock> {
    /// Opens the store at `path` and makes sure both tables exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(Store::open(path)?)
    }

    /// Wraps an already open store, creating the tables if needed.
    pub fn new(store: Store) -> Result<Self> {
        Self::with_clock(store, SystemClock)
    }
}

impl<C: Clock> Tracker<C> {
    /// Wraps `store` and reads the time from `clock`.
    ///
    /// Both tables are created if missing, `task` first. The tracker starts
    /// idle with no subscribers.
    pub fn with_clock(store: Store, clock: C) -> Result<Self> {
        Task::ensure_table_created(&store)?;
        Activity::ensure_table_created(&store)?;
        Ok(Self {
            store,
            clock,
            running: None,
            subscribers: Subscribers::default(),
        })
    }

    /// Read access for the entity load functions.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Registers `handler` for every [`TrackerEvent`] this tracker
    /// publishes from now on.
    pub fn subscribe(&mut self, handler: impl FnMut(&TrackerEvent) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(handler)
    }

    /// Returns `false` when `id` is not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn running_task(&self) -> Option<&Task> {
        self.running.as_ref().map(|running| &running.task)
    }

    /// Saves `task` and announces it as added or changed.
    ///
    /// When `task` is the running one, the running copy is replaced by the
    /// saved value. A failed save publishes nothing and leaves the running
    /// copy as it was.
    pub fn save_task(&mut self, task: &mut Task) -> Result<()> {
        let was_saved = task.id().is_some();
        if let Err(err) = task.save(&self.store) {
            warn!(error = %err, code = ?err.code(), "failed to save task");
            return Err(err);
        }

        if let Some(running) = self.running.as_mut() {
            if running.task.id() == task.id() {
                running.task = task.clone();
            }
        }

        let event = if was_saved {
            TrackerEvent::TaskChanged(task.clone())
        } else {
            TrackerEvent::TaskAdded(task.clone())
        };
        self.subscribers.publish(&event);
        Ok(())
    }

    /// Deletes `task` with its activities. A running `task` is dropped first.
    ///
    /// # Panics
    ///
    /// Panics if `task` was never saved.
    pub fn delete_task(&mut self, task: &Task) -> Result<()> {
        let Some(id) = task.id() else {
            panic!("cannot delete task `{}` which was never saved", task.name());
        };
        task.delete(&self.store)?;
        if self.running_task().and_then(Task::id) == Some(id) {
            self.drop_running_task();
        }
        self.subscribers.publish(&TrackerEvent::TaskDeleted(id));
        Ok(())
    }

    /// Starts a fresh interval for `task`, discarding any running one
    /// without a final checkpoint.
    ///
    /// # Panics
    ///
    /// Panics if `task` was never saved.
    pub fn start_running_task(&mut self, task: Task) {
        assert!(task.id().is_some(), "task `{}` must be saved before it can run", task.name());
        let now = self.now();
        info!(task_id = task.id(), started_at = %now, "running task started");
        self.running = Some(RunningTask {
            task,
            interval_start: now,
            open_activity: None,
        });
        self.publish_running_task();
    }

    /// Switches tracking to `task`.
    ///
    /// When idle this is [`start_running_task`](Self::start_running_task).
    /// When running, only the task is replaced: the interval start is kept and
    /// nothing is written, so time accrued since the last checkpoint is
    /// attributed to `task` by the next checkpoint.
    ///
    /// # Panics
    ///
    /// Panics if `task` was never saved.
    pub fn change_running_task(&mut self, task: Task) {
        let Some(running) = self.running.as_mut() else {
            self.start_running_task(task);
            return;
        };
        assert!(task.id().is_some(), "task `{}` must be saved before it can run", task.name());
        info!(from = running.task.id(), to = task.id(), "running task relabelled");
        running.task = task;
        running.open_activity = None;
        self.publish_running_task();
    }

    /// Stops tracking without writing the last interval.
    pub fn drop_running_task(&mut self) {
        if let Some(running) = self.running.take() {
            info!(task_id = running.task.id(), "running task dropped");
        }
        self.publish_running_task();
    }

    /// Persists the time elapsed on the running task.
    ///
    /// The first checkpoint after a start inserts an activity; later ones
    /// move its end forward. On success the interval start advances to now
    /// and the saved activity is returned. A checkpoint inside the same second
    /// as the activity start has nothing to write and returns `Ok(None)`.
    /// On failure nothing in memory changes, so the next call covers the same
    /// span again.
    ///
    /// # Panics
    ///
    /// Panics when no task is running.
    pub fn record_running_task_activity(&mut self) -> Result<Option<Activity>> {
        let now = self.now();
        let Some(running) = self.running.as_mut() else {
            panic!("record_running_task_activity called while no task is running");
        };

        let mut activity = match &running.open_activity {
            Some(open) => open.clone(),
            None => Activity::new(&running.task, running.interval_start),
        };
        let start = activity.start_time();
        if now <= start {
            debug!(task_id = activity.task_id(), "checkpoint skipped, no time elapsed");
            return Ok(None);
        }

        activity.set_interval(start, now);
        if let Err(err) = activity.save(&self.store) {
            warn!(task_id = activity.task_id(), error = %err, code = ?err.code(), "checkpoint failed");
            return Err(err);
        }

        running.interval_start = now;
        running.open_activity = Some(activity.clone());
        info!(activity_id = activity.id(), task_id = activity.task_id(), end = %now, "checkpoint recorded");
        self.subscribers.publish(&TrackerEvent::ActivityRecorded(activity.clone()));
        Ok(Some(activity))
    }

    /// Time since the current interval started, `None` when idle.
    pub fn running_task_run_time(&self) -> Option<TimeDelta> {
        let running = self.running.as_ref()?;
        Some(self.now() - running.interval_start)
    }

    fn now(&self) -> TimePoint {
        floor_to_seconds(self.clock.now())
    }

    fn publish_running_task(&mut self) {
        let task = self.running_task().cloned();
        self.subscribers.publish(&TrackerEvent::RunningTaskChanged(task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::clock::ManualClock;
    use chrono::DateTime;

    fn tracker() -> (Tracker<ManualClock>, ManualClock) {
        let clock = ManualClock::new(DateTime::from_timestamp(1_700_000_000, 250_000_000).unwrap());
        let tracker = Tracker::with_clock(Store::open_in_memory().unwrap(), clock.clone()).unwrap();
        (tracker, clock)
    }

    #[test]
    fn interval_start_is_floored_to_seconds() {
        let (mut tracker, clock) = tracker();
        let mut task = Task::new("floor");
        tracker.save_task(&mut task).unwrap();

        tracker.start_running_task(task);
        clock.advance(TimeDelta::milliseconds(800));

        assert_eq!(tracker.running_task_run_time(), Some(TimeDelta::seconds(1)));
    }

    #[test]
    fn checkpoint_in_same_second_writes_nothing() {
        let (mut tracker, _clock) = tracker();
        let mut task = Task::new("instant");
        tracker.save_task(&mut task).unwrap();

        tracker.start_running_task(task);
        assert_eq!(tracker.record_running_task_activity().unwrap(), None);
        assert!(Activity::load_all(tracker.store()).unwrap().is_empty());
    }

    #[test]
    #[should_panic(expected = "no task is running")]
    fn checkpoint_while_idle_panics() {
        let (mut tracker, _clock) = tracker();
        let _ = tracker.record_running_task_activity();
    }

    #[test]
    #[should_panic(expected = "must be saved")]
    fn starting_unsaved_task_panics() {
        let (mut tracker, _clock) = tracker();
        tracker.start_running_task(Task::new("unsaved"));
    }
}
