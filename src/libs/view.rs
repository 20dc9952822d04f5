use super::formatter::FormattedActivity;
use crate::db::activities::Activity;
use crate::db::tasks::Task;
use prettytable::{row, Table};
use std::collections::HashMap;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        Self::tasks_table(tasks).printstd();
    }

    pub fn activities(activities: &[Activity], tasks: &[Task]) {
        Self::activities_table(activities, tasks).printstd();
    }

    fn tasks_table(tasks: &[Task]) -> Table {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME"]);
        for task in tasks {
            table.add_row(row![task.id().unwrap_or_default(), task.name()]);
        }
        table
    }

    fn activities_table(activities: &[Activity], tasks: &[Task]) -> Table {
        let names: HashMap<i64, &str> = tasks.iter().filter_map(|task| task.id().map(|id| (id, task.name()))).collect();

        let mut table = Table::new();
        table.add_row(row!["ID", "TASK", "START (UTC)", "END (UTC)", "DURATION"]);
        for activity in activities {
            let name = names.get(&activity.task_id()).copied().unwrap_or("?");
            let formatted = FormattedActivity::new(activity, name);
            table.add_row(row![formatted.id, formatted.task, formatted.start, formatted.end, formatted.duration]);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::Store;
    use chrono::{DateTime, TimeDelta};

    #[test]
    fn activity_rows_resolve_task_names() {
        let store = Store::open_in_memory().unwrap();
        Task::ensure_table_created(&store).unwrap();
        let mut task = Task::new("Design review");
        task.save(&store).unwrap();

        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let mut activity = Activity::new(&task, start);
        activity.set_interval(start, start + TimeDelta::minutes(90));

        let table = View::activities_table(&[activity], &[task]);
        let rendered = table.to_string();
        assert!(rendered.contains("Design review"));
        assert!(rendered.contains("01:30:00"));
        assert_eq!(table.len(), 2);
    }
}
