//! # tasktrack - Task Time Tracking
//!
//! Keeps a list of tasks, tracks which one is being worked on, and records
//! the time spent as activities in an embedded SQLite store.
//!
//! ## Features
//!
//! - **Storage adapter**: store handle, forward-only cursor, portable status codes
//! - **Entities**: tasks and activities with idempotent schema creation
//! - **Tracker**: running-task state machine with periodic checkpoints
//! - **Notifications**: per-tracker subscriptions for task and running-task changes
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktrack::commands::Cli;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
