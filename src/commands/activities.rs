use super::open_tracker;
use crate::db::activities::Activity;
use crate::db::tasks::Task;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_print};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct ActivitiesArgs {
    /// Only activities that started on or after this UTC date (YYYY-MM-DD)
    #[arg(short, long)]
    since: Option<String>,

    /// Only activities of this task
    #[arg(short, long)]
    task: Option<i64>,
}

pub fn cmd(args: ActivitiesArgs) -> Result<()> {
    let config = Config::read()?;
    let tracker = open_tracker(&config)?;
    let store = tracker.store();

    let mut activities = match &args.since {
        Some(since) => {
            let date = parse_since(since)?;
            msg_print!(Message::ActivitiesSince(date.to_string()), true);
            Activity::load_after(store, date.and_time(NaiveTime::MIN).and_utc())?
        }
        None => match args.task {
            Some(task_id) => Activity::load_for_task(store, task_id)?,
            None => Activity::load_all(store)?,
        },
    };
    if let Some(task_id) = args.task {
        activities.retain(|activity| activity.task_id() == task_id);
    }

    if activities.is_empty() {
        msg_info!(Message::NoActivities);
        return Ok(());
    }
    View::activities(&activities, &Task::load_all(store)?);
    Ok(())
}

fn parse_since(value: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => msg_bail_anyhow!(Message::InvalidSinceDate(value.to_string())),
    }
}
