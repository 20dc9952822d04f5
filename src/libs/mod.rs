//! Coordinator and application support modules.
//!
//! - **Tracking**: [`tracker`] owns the running task, [`events`] carries its
//!   notifications, [`clock`] supplies time.
//! - **Application**: [`config`], [`data_storage`], [`messages`]
//! - **Presentation**: [`formatter`], [`view`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktrack::libs::events::TrackerEvent;
//! use tasktrack::libs::tracker::Tracker;
//!
//! let mut tracker = Tracker::open("tasktrack.db")?;
//! tracker.subscribe(|event| {
//!     if let TrackerEvent::RunningTaskChanged(task) = event {
//!         println!("running: {:?}", task.as_ref().map(|t| t.name()));
//!     }
//! });
//! # Ok::<(), tasktrack::db::error::StoreError>(())
//! ```

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod events;
pub mod formatter;
pub mod messages;
pub mod tracker;
pub mod view;
