//! Text for every [`Message`] variant.
//!
//! All wording lives here so commands only pick a variant and its
//! parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id, name) => format!("Task #{} '{}' created", id, name),
            Message::TaskRenamed(id, name) => format!("Task #{} renamed to '{}'", id, name),
            Message::TaskDeleted(id) => format!("Task #{} and its activities deleted", id),
            Message::TaskNotFound(id) => format!("Task #{} not found", id),
            Message::TaskNameEmpty => "Task name must not be empty".to_string(),
            Message::NoTasks => "No tasks yet. Create one with `tasktrack task add <NAME>`".to_string(),

            // === ACTIVITY MESSAGES ===
            Message::NoActivities => "No activities recorded".to_string(),
            Message::ActivitiesSince(date) => format!("Activities since {}", date),
            Message::InvalidSinceDate(value) => format!("Invalid date '{}', expected YYYY-MM-DD", value),

            // === TRACKING MESSAGES ===
            Message::TrackingStarted(name) => format!("Tracking '{}'", name),
            Message::TrackingStopped => "Tracking stopped".to_string(),
            Message::TrackingTick(name, elapsed) => format!("'{}' running, {} since last checkpoint", name, elapsed),
            Message::CheckpointRecorded(duration) => format!("Checkpoint saved, activity covers {}", duration),
            Message::CheckpointFailed(error) => format!("Checkpoint failed, will retry on next tick: {}", error),
            Message::TrackingInterval(secs) => format!("Checkpoint every {} s", secs),
            Message::PressCtrlCToStop => "Press Ctrl-C to stop".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigInvalidInterval(secs) => format!("Checkpoint interval must be at least 1 second, got {}", secs),
            Message::ConfigPath(path) => format!("Config file: {}", path),
            Message::ConfigDatabasePath(path) => format!("Database:    {}", path),
            Message::ConfigCheckpointInterval(secs) => format!("Checkpoint:  every {} s", secs),

            // === STORE MESSAGES ===
            Message::StoreOpenFailed(path) => format!("Failed to open the task store at {}", path),
        };
        write!(f, "{}", s)
    }
}
