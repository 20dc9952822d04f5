//! Formatting of durations and time points for terminal output.
//!
//! Durations render as `HH:MM:SS`; negative durations clamp to zero. Time
//! points render in UTC as `YYYY-MM-DD HH:MM:SS`, matching their one-second
//! storage resolution.

use crate::db::activities::{Activity, TimePoint};
use chrono::TimeDelta;

/// One activity pre-formatted for a table row.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedActivity {
    pub id: i64,
    pub task: String,
    pub start: String,
    pub end: String,
    pub duration: String,
}

impl FormattedActivity {
    /// `task_name` is looked up by the caller; activities only hold the id.
    pub fn new(activity: &Activity, task_name: &str) -> Self {
        Self {
            id: activity.id().unwrap_or_default(),
            task: task_name.to_string(),
            start: format_time_point(&activity.start_time()),
            end: activity.end_time().map_or_else(|| "-".to_string(), |end| format_time_point(&end)),
            duration: activity.duration().map_or_else(|| "--:--:--".to_string(), |d| format_duration(&d)),
        }
    }
}

pub fn format_duration(duration: &TimeDelta) -> String {
    let total = duration.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", total / 3600, (total / 60) % 60, total % 60)
}

pub fn format_time_point(time_point: &TimePoint) -> String {
    time_point.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn duration_is_hours_minutes_seconds() {
        assert_eq!(format_duration(&TimeDelta::seconds(0)), "00:00:00");
        assert_eq!(format_duration(&(TimeDelta::hours(2) + TimeDelta::minutes(5) + TimeDelta::seconds(9))), "02:05:09");
        assert_eq!(format_duration(&TimeDelta::hours(31)), "31:00:00");
    }

    #[test]
    fn negative_duration_clamps_to_zero() {
        assert_eq!(format_duration(&TimeDelta::seconds(-90)), "00:00:00");
    }

    #[test]
    fn time_point_is_utc_to_the_second() {
        let time_point = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(format_time_point(&time_point), "2023-11-14 22:13:20");
    }
}
