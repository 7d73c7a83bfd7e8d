use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use crate::models::Task;

/// Number of hourly slots on a day's timeline.
pub const HOURS_PER_DAY: usize = 24;

/// Tasks that fall in one hour of one day.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HourBucket<'a> {
    /// Hour of day, `0..=23`.
    pub hour: u32,
    /// Tasks in insertion order.
    pub tasks: Vec<&'a Task>,
}

impl HourBucket<'_> {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// 12-hour clock label, e.g. "12 AM", "9 AM", "1 PM".
    pub fn label(&self) -> String {
        hour_label(self.hour)
    }
}

/// 12-hour clock label for an hour of day.
pub fn hour_label(hour: u32) -> String {
    NaiveTime::from_hms_opt(hour % 24, 0, 0)
        .map(|t| t.format("%-I %p").to_string())
        .unwrap_or_default()
}

/// The session's task list and the hour-of-day view over it.
#[derive(Debug, Clone, Default)]
pub struct TaskScheduleIndex {
    tasks: Vec<Task>,
}

impl TaskScheduleIndex {
    pub fn new() -> TaskScheduleIndex {
        TaskScheduleIndex::default()
    }

    /// Builds an index over an existing list, keeping its order.
    pub fn with_tasks(tasks: Vec<Task>) -> TaskScheduleIndex {
        TaskScheduleIndex { tasks }
    }

    /// Appends a task. Insertion order is kept; nothing is re-sorted.
    pub fn add_task(&mut self, task: Task) {
        tracing::debug!(id = %task.id, name = %task.name, at = %task.scheduled_at, "task added");
        self.tasks.push(task);
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks scheduled on `day`, in insertion order.
    pub fn tasks_on(&self, day: NaiveDate) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| t.day() == day)
    }

    /// Groups the tasks of `day` into 24 hourly buckets.
    ///
    /// Bucket `h` holds every task on `day` whose hour is `h`, in insertion
    /// order. Computed from scratch on every call.
    pub fn hourly_buckets_for(&self, day: NaiveDate) -> [HourBucket<'_>; HOURS_PER_DAY] {
        let mut buckets: [HourBucket<'_>; HOURS_PER_DAY] = std::array::from_fn(|hour| HourBucket {
            hour: hour as u32,
            tasks: Vec::new(),
        });
        for task in self.tasks_on(day) {
            let hour = task.scheduled_at.hour() as usize;
            buckets[hour].tasks.push(task);
        }
        buckets
    }
}

impl FromIterator<Task> for TaskScheduleIndex {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        TaskScheduleIndex::with_tasks(iter.into_iter().collect())
    }
}
