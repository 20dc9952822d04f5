/// Every user-facing message the command line prints.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64, String), // id, name
    TaskRenamed(i64, String), // id, new name
    TaskDeleted(i64),
    TaskNotFound(i64),
    TaskNameEmpty,
    NoTasks,

    // === ACTIVITY MESSAGES ===
    NoActivities,
    ActivitiesSince(String), // date
    InvalidSinceDate(String),

    // === TRACKING MESSAGES ===
    TrackingStarted(String),         // task name
    TrackingStopped,
    TrackingTick(String, String),    // task name, time since last checkpoint
    CheckpointRecorded(String),      // covered duration
    CheckpointFailed(String),        // error
    TrackingInterval(u64),           // seconds
    PressCtrlCToStop,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigInvalidInterval(u64),
    ConfigPath(String),
    ConfigDatabasePath(String),
    ConfigCheckpointInterval(u64),

    // === STORE MESSAGES ===
    StoreOpenFailed(String),
}
