use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PlannerError;

/// A single task on the planner's timeline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    /// Unique identifier, assigned at creation.
    pub id: Uuid,
    /// Local wall-clock time the task is scheduled for.
    ///
    /// This is also the moment the task counts as "added"; the form lets the
    /// user pick any date and time before submitting.
    pub scheduled_at: NaiveDateTime,
    /// Display name. Never empty for tasks produced by [`TaskDraft`].
    pub name: String,
    /// Free-form description, possibly empty.
    #[serde(default)]
    pub description: String,
    pub category: Category,
}

impl Task {
    /// Creates a task with a fresh id.
    ///
    /// Does not validate `name`; producers that take user input go through
    /// [`TaskDraft::into_task`].
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        scheduled_at: NaiveDateTime,
        category: Category,
    ) -> Task {
        Task {
            id: Uuid::new_v4(),
            scheduled_at,
            name: name.into(),
            description: description.into(),
            category,
        }
    }

    /// Calendar day the task falls on.
    pub fn day(&self) -> NaiveDate {
        self.scheduled_at.date()
    }
}

/// Fixed set of task categories.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    General,
    Bug,
    Idea,
    Modifiers,
    Challenge,
    Coding,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::General,
        Category::Bug,
        Category::Idea,
        Category::Modifiers,
        Category::Challenge,
        Category::Coding,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Bug => "Bug",
            Category::Idea => "Idea",
            Category::Modifiers => "Modifiers",
            Category::Challenge => "Challenge",
            Category::Coding => "Coding",
        }
    }

    /// The category after this one, wrapping around.
    pub fn next(self) -> Category {
        let i = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// The category before this one, wrapping around.
    pub fn previous(self) -> Category {
        let i = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PlannerError::UnknownCategory(s.to_string()))
    }
}

/// Raw contents of the "Add Task" form before validation.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    /// Date in `YYYY-MM-DD`.
    pub date: String,
    /// Time in `HH:MM` (24-hour).
    pub time: String,
    pub category: Category,
}

impl TaskDraft {
    /// A blank draft whose date and time are pre-filled from `now`.
    pub fn starting_at(now: NaiveDateTime) -> TaskDraft {
        TaskDraft {
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M").to_string(),
            ..TaskDraft::default()
        }
    }

    /// Whether the form may be submitted at all.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Validates the draft and builds a task from it.
    pub fn into_task(self) -> Result<Task, PlannerError> {
        if !self.has_name() {
            return Err(PlannerError::EmptyTaskName);
        }
        let date = parse_date(&self.date)?;
        let time = parse_time(&self.time)?;
        Ok(Task::new(
            self.name.trim(),
            self.description.trim(),
            date.and_time(time),
            self.category,
        ))
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, PlannerError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| PlannerError::InvalidDate(input.to_string()))
}

/// Parses an `HH:MM` time, also accepting `HH:MM:SS`.
pub fn parse_time(input: &str) -> Result<NaiveTime, PlannerError> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| PlannerError::InvalidTime(input.to_string()))
}
