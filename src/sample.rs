use chrono::{DateTime, Local};

use crate::config::PlannerConfig;
use crate::models::{Category, Task};
use crate::schedule::TaskScheduleIndex;

/// (unix timestamp, name, description, category) of the built-in sample tasks.
const SAMPLES: [(i64, &str, &str, Category); 5] = [
    (1680870416, "Edit YT Video", "Edit the video from today's class", Category::General),
    (1680902816, "Matched Geometry Effect (Issue)", "", Category::Bug),
    (1680654416, "Multi-ScrollView", "", Category::Challenge),
    (1680740816, "Complete UI Animation Challenge", "", Category::Challenge),
    (1680913616, "Fix Shadow issue on Mockup's", "", Category::Bug),
];

/// Sample tasks the screen starts with, in local time (early April 2023).
pub fn sample_tasks() -> Vec<Task> {
    SAMPLES
        .iter()
        .filter_map(|(ts, name, description, category)| {
            let at = DateTime::from_timestamp(*ts, 0)?.with_timezone(&Local).naive_local();
            Some(Task::new(*name, *description, at, *category))
        })
        .collect()
}

/// Task list a new session starts with, per configuration.
pub fn session_index(config: &PlannerConfig) -> TaskScheduleIndex {
    if config.sample_tasks {
        TaskScheduleIndex::with_tasks(sample_tasks())
    } else {
        TaskScheduleIndex::new()
    }
}
