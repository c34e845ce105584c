//! Weekly activity mask
//!
//! A task's `days` column is seven 2-letter slots, Monday first. A slot is
//! active when it holds that day's abbreviation; anything else (usually
//! `--`) leaves the day off.

use std::fmt;

use crate::error::TaskError;

/// Day abbreviations, Monday first
pub const DAY_NAMES: [&str; 7] = ["mo", "tu", "we", "th", "fr", "sa", "su"];

/// Length of a day mask string
pub const DAYS_LEN: usize = DAY_NAMES.len() * 2;

/// Which weekdays a task may run on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Days {
    raw: String,
    active: [bool; 7],
}

impl Days {
    /// Parse a day mask such as `mo--we--frsasu`
    pub fn parse(value: &str) -> Result<Self, TaskError> {
        if !value.is_ascii() || value.len() != DAYS_LEN {
            return Err(TaskError::InvalidDays {
                value: value.to_string(),
            });
        }

        let mut active = [false; 7];
        for (index, name) in DAY_NAMES.iter().enumerate() {
            active[index] = &value[index * 2..index * 2 + 2] == *name;
        }

        Ok(Self {
            raw: value.to_string(),
            active,
        })
    }

    /// Whether the task may run on `weekday` (0 = Monday)
    pub fn is_active_on(&self, weekday: usize) -> bool {
        self.active.get(weekday).copied().unwrap_or(false)
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
