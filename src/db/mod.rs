//! Persistence layer for tasktrack.
//!
//! Everything is stored in a single embedded SQLite file. The layer is split
//! into the storage adapter, which knows nothing about tasks, and the entity
//! modules built on top of it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktrack::db::{activities::Activity, store::Store, tasks::Task};
//!
//! let store = Store::open("tasktrack.db")?;
//! Task::ensure_table_created(&store)?;
//! Activity::ensure_table_created(&store)?;
//!
//! for task in Task::load_all(&store)? {
//!     println!("{:?} {}", task.id(), task.name());
//! }
//! # Ok::<(), tasktrack::db::error::StoreError>(())
//! ```

/// Store handle: open, execute, select.
pub mod store;

/// Forward-only cursor with typed column access.
pub mod select_rows;

/// Status code translation and the storage error type.
pub mod error;

/// Task entity, schema and persistence.
pub mod tasks;

/// Activity entity, schema, persistence and time point encoding.
pub mod activities;
