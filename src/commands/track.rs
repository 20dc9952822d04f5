use super::open_tracker;
use super::task::find_task;
use crate::libs::config::Config;
use crate::libs::events::TrackerEvent;
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::{msg_bail_anyhow, msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};

#[derive(Debug, Args)]
pub struct TrackArgs {
    /// Task to track
    task_id: i64,

    /// Seconds between checkpoints, overrides the configured value
    #[arg(short, long)]
    interval: Option<u64>,
}

/// Tracks one task, checkpointing on a fixed cadence until Ctrl-C.
pub async fn cmd(args: TrackArgs) -> Result<()> {
    let config = Config::read()?;
    let interval_secs = args.interval.unwrap_or(config.checkpoint_interval_secs);
    if interval_secs == 0 {
        msg_bail_anyhow!(Message::ConfigInvalidInterval(interval_secs));
    }

    let mut tracker = open_tracker(&config)?;
    let task = find_task(&tracker, args.task_id)?;
    tracker.subscribe(|event| match event {
        TrackerEvent::RunningTaskChanged(Some(task)) => msg_success!(Message::TrackingStarted(task.name().to_string())),
        TrackerEvent::RunningTaskChanged(None) => msg_info!(Message::TrackingStopped),
        _ => {}
    });

    tracker.start_running_task(task);
    msg_info!(Message::TrackingInterval(interval_secs));
    msg_info!(Message::PressCtrlCToStop);

    let mut ticker = time::interval(Duration::from_secs(interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => checkpoint(&mut tracker),
            _ = &mut shutdown => break,
        }
    }

    checkpoint(&mut tracker);
    tracker.drop_running_task();
    Ok(())
}

fn checkpoint(tracker: &mut Tracker) {
    let elapsed = tracker.running_task_run_time().unwrap_or_default();
    let name = tracker.running_task().map(|task| task.name().to_string()).unwrap_or_default();

    match tracker.record_running_task_activity() {
        Ok(Some(activity)) => {
            msg_info!(Message::TrackingTick(name, format_duration(&elapsed)));
            let covered = activity.duration().unwrap_or_default();
            msg_info!(Message::CheckpointRecorded(format_duration(&covered)));
        }
        Ok(None) => {}
        Err(e) => msg_warning!(Message::CheckpointFailed(e.to_string())),
    }
}
