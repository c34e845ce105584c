//! Task definitions
//!
//! A task is one row of the tasks file: a shell command, who it belongs to,
//! the weekdays and time window it may run in, and the minimum gap between
//! two runs.

use std::fmt;

use chrono::{Datelike, Local, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use super::days::Days;
use crate::error::TaskError;

/// Wall-clock format for window bounds
pub const TIME_FORMAT: &str = "%H:%M";

/// Persisted columns, in file order
pub const TASK_COLUMNS: [&str; 6] = [
    "command",
    "owner",
    "days",
    "time_start",
    "time_end",
    "reload_time",
];

/// A tasks file row before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub command: String,
    pub owner: String,
    pub days: String,
    pub time_start: String,
    pub time_end: String,
    pub reload_time: String,
}

/// A validated task plus its runtime state
#[derive(Debug, Clone)]
pub struct Task {
    pub command: String,
    pub owner: String,
    pub days: Days,
    pub time_start: NaiveTime,
    pub time_end: NaiveTime,
    pub reload_time: TimeDelta,
    reload_raw: String,
    /// When the command last finished; not persisted
    pub last_execution: Option<NaiveDateTime>,
}

impl Task {
    /// Validate a raw record
    pub fn from_record(record: &TaskRecord) -> Result<Self, TaskError> {
        let command = record.command.trim();
        if command.is_empty() {
            return Err(TaskError::Empty { field: "command" });
        }

        Ok(Self {
            command: command.to_string(),
            owner: record.owner.trim().to_string(),
            days: Days::parse(record.days.trim())?,
            time_start: parse_time("time_start", &record.time_start)?,
            time_end: parse_time("time_end", &record.time_end)?,
            reload_time: parse_reload(&record.reload_time)?,
            reload_raw: record.reload_time.trim().to_string(),
            last_execution: None,
        })
    }

    /// Persisted form of this task
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            command: self.command.clone(),
            owner: self.owner.clone(),
            days: self.days.to_string(),
            time_start: self.time_start.format(TIME_FORMAT).to_string(),
            time_end: self.time_end.format(TIME_FORMAT).to_string(),
            reload_time: self.reload_raw.clone(),
        }
    }

    /// Whether the task should run at `now`
    ///
    /// The weekday must be enabled, `now` must lie strictly inside the
    /// window, and more than `reload_time` must have passed since the
    /// last run.
    pub fn is_active_at(&self, now: NaiveDateTime) -> bool {
        let weekday = now.weekday().num_days_from_monday() as usize;
        let time = now.time();

        let outside_reload = match self.last_execution {
            Some(last) => now - last > self.reload_time,
            None => true,
        };

        self.days.is_active_on(weekday)
            && self.time_start < time
            && time < self.time_end
            && outside_reload
    }

    /// Whether the task should run right now (local time)
    pub fn is_active_now(&self) -> bool {
        self.is_active_at(Local::now().naive_local())
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.command == other.command
            && self.owner == other.owner
            && self.days == other.days
            && self.time_start == other.time_start
            && self.time_end == other.time_end
            && self.reload_time == other.reload_time
    }
}

impl Eq for Task {}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last_execution {
            Some(last) => write!(
                f,
                "<({}) from {}, executed on {}>",
                self.command,
                self.owner,
                last.format("%Y-%m-%d %H:%M:%S")
            ),
            None => write!(f, "<({}) from {}, executed on never>", self.command, self.owner),
        }
    }
}

fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, TaskError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| TaskError::InvalidTime {
        field,
        value: value.to_string(),
    })
}

/// Parse `H:MM` into a duration; hours are not capped at 23
fn parse_reload(value: &str) -> Result<TimeDelta, TaskError> {
    let invalid = || TaskError::InvalidReload {
        value: value.to_string(),
    };

    let (hours, minutes) = value.trim().split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }

    TimeDelta::try_minutes(i64::from(hours) * 60 + i64::from(minutes)).ok_or_else(invalid)
}
