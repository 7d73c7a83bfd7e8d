use chrono::{NaiveDate, Timelike};
use taskplanner::error::PlannerError;
use taskplanner::models::{Category, TaskDraft};
use taskplanner::sample::{sample_tasks, session_index};
use taskplanner::config::PlannerConfig;

fn draft(name: &str, date: &str, time: &str) -> TaskDraft {
    TaskDraft {
        name: name.into(),
        description: "about it".into(),
        date: date.into(),
        time: time.into(),
        category: Category::Bug,
    }
}

#[test]
fn test_draft_builds_task() {
    let task = draft("  Fix login  ", "2023-04-07", "09:45").into_task().unwrap();

    assert_eq!(task.name, "Fix login");
    assert_eq!(task.description, "about it");
    assert_eq!(task.category, Category::Bug);
    assert_eq!(task.day(), NaiveDate::from_ymd_opt(2023, 4, 7).unwrap());
    assert_eq!(task.scheduled_at.hour(), 9);
    assert_eq!(task.scheduled_at.minute(), 45);
}

#[test]
fn test_draft_rejects_empty_name() {
    assert!(matches!(draft("", "2023-04-07", "09:45").into_task(), Err(PlannerError::EmptyTaskName)));
    assert!(matches!(draft("   ", "2023-04-07", "09:45").into_task(), Err(PlannerError::EmptyTaskName)));
    assert!(!draft(" ", "2023-04-07", "09:45").has_name());
}

#[test]
fn test_draft_rejects_bad_date_and_time() {
    assert!(matches!(draft("X", "2023-13-01", "09:45").into_task(), Err(PlannerError::InvalidDate(_))));
    assert!(matches!(draft("X", "2023-04-07", "25:00").into_task(), Err(PlannerError::InvalidTime(_))));
}

#[test]
fn test_draft_prefilled_from_now() {
    let now = NaiveDate::from_ymd_opt(2023, 4, 7).unwrap().and_hms_opt(16, 5, 30).unwrap();
    let d = TaskDraft::starting_at(now);
    assert_eq!(d.date, "2023-04-07");
    assert_eq!(d.time, "16:05");
    assert!(d.name.is_empty());
    assert_eq!(d.category, Category::General);
}

#[test]
fn test_task_ids_are_unique() {
    let a = draft("A", "2023-04-07", "09:45").into_task().unwrap();
    let b = draft("A", "2023-04-07", "09:45").into_task().unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_category_names() {
    let names: Vec<String> = Category::ALL.iter().map(|c| c.to_string()).collect();
    assert_eq!(names, vec!["General", "Bug", "Idea", "Modifiers", "Challenge", "Coding"]);

    for c in Category::ALL {
        assert_eq!(c.to_string().parse::<Category>().unwrap(), c);
    }
    assert_eq!("coding".parse::<Category>().unwrap(), Category::Coding);
    assert!(matches!("Chore".parse::<Category>(), Err(PlannerError::UnknownCategory(_))));
}

#[test]
fn test_category_cycle_wraps() {
    assert_eq!(Category::Coding.next(), Category::General);
    assert_eq!(Category::General.previous(), Category::Coding);
    assert_eq!(Category::Bug.next(), Category::Idea);
}

#[test]
fn test_category_serializes_as_name() {
    assert_eq!(serde_json::to_string(&Category::Modifiers).unwrap(), "\"Modifiers\"");
}

#[test]
fn test_sample_tasks() {
    let tasks = sample_tasks();
    assert_eq!(tasks.len(), 5);
    assert_eq!(tasks[0].name, "Edit YT Video");
    assert_eq!(tasks[1].category, Category::Bug);
    assert!(tasks.iter().all(|t| !t.name.is_empty()));
}

#[test]
fn test_session_index_respects_config() {
    let mut config = PlannerConfig::default();
    assert_eq!(session_index(&config).len(), 5);
    config.sample_tasks = false;
    assert!(session_index(&config).is_empty());
}
