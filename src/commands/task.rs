//! Task management command.
//!
//! Changes go through the tracker, and the confirmation lines are printed
//! from its notifications rather than from the command itself.

use super::open_tracker;
use crate::db::tasks::Task;
use crate::libs::config::Config;
use crate::libs::events::TrackerEvent;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    #[command(about = "Create a task")]
    Add {
        #[arg(required = true)]
        name: String,
    },
    #[command(about = "Rename a task")]
    Rename { id: i64, name: String },
    #[command(about = "Delete a task and all of its activities")]
    Delete { id: i64 },
    #[command(about = "List tasks")]
    List,
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let config = Config::read()?;
    let mut tracker = open_tracker(&config)?;
    tracker.subscribe(|event| match event {
        TrackerEvent::TaskAdded(task) => msg_success!(Message::TaskCreated(task.id().unwrap_or_default(), task.name().to_string())),
        TrackerEvent::TaskChanged(task) => msg_success!(Message::TaskRenamed(task.id().unwrap_or_default(), task.name().to_string())),
        TrackerEvent::TaskDeleted(id) => msg_success!(Message::TaskDeleted(*id)),
        _ => {}
    });

    match args.command {
        TaskCommand::Add { name } => {
            let mut task = Task::new(validated_name(name)?);
            tracker.save_task(&mut task)?;
        }
        TaskCommand::Rename { id, name } => {
            let mut task = find_task(&tracker, id)?;
            task.set_name(validated_name(name)?);
            tracker.save_task(&mut task)?;
        }
        TaskCommand::Delete { id } => {
            let task = find_task(&tracker, id)?;
            tracker.delete_task(&task)?;
        }
        TaskCommand::List => {
            let tasks = Task::load_all(tracker.store())?;
            if tasks.is_empty() {
                msg_info!(Message::NoTasks);
            } else {
                View::tasks(&tasks);
            }
        }
    }
    Ok(())
}

pub(crate) fn find_task(tracker: &Tracker, id: i64) -> Result<Task> {
    match Task::load_by_id(tracker.store(), id)? {
        Some(task) => Ok(task),
        None => msg_bail_anyhow!(Message::TaskNotFound(id)),
    }
}

fn validated_name(name: String) -> Result<String> {
    let name = name.trim().to_string();
    if name.is_empty() {
        msg_bail_anyhow!(Message::TaskNameEmpty);
    }
    Ok(name)
}
