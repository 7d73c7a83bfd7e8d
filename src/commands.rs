use chrono::{Local, NaiveDate};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::models::{parse_date, Category};
use crate::sample::session_index;
use crate::schedule::TaskScheduleIndex;
use crate::week::{month_label, week_of, WeekDay};

/// Marker printed for an hour with no tasks.
pub const EMPTY_SLOT: &str = "- - - - - - - -";

fn category_color(category: Category) -> Color {
    match category {
        Category::General => Color::Grey,
        Category::Bug => Color::Green,
        Category::Idea => Color::Magenta,
        Category::Modifiers => Color::Blue,
        Category::Challenge => Color::Rgb { r: 128, g: 0, b: 128 },
        Category::Coding => Color::Rgb { r: 139, g: 69, b: 19 },
    }
}

/// Resolves an optional `YYYY-MM-DD` argument, defaulting to today.
fn date_or_today(date: Option<String>) -> Result<NaiveDate, PlannerError> {
    match date {
        Some(d) => parse_date(&d),
        None => Ok(Local::now().date_naive()),
    }
}

fn today_style(cell: Cell, is_today: bool) -> Cell {
    if is_today {
        cell.add_attribute(Attribute::Bold).fg(Color::Blue)
    } else {
        cell
    }
}

/// Builds the week strip table: one column per day, today in bold.
pub fn week_table(week: &[WeekDay]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(week.iter().map(|d| today_style(Cell::new(d.short_name()), d.is_today)));
    table.add_row(week.iter().map(|d| today_style(Cell::new(d.day_of_month()), d.is_today)));
    table
}

/// The week containing `date` (default: `today`), with `today` flagged.
pub fn week_strip(config: &PlannerConfig, date: Option<String>, today: NaiveDate) -> Result<Vec<WeekDay>, PlannerError> {
    let date = match date {
        Some(d) => parse_date(&d)?,
        None => today,
    };
    Ok(week_of(date, today, config.week_start))
}

/// Builds the 24-hour timeline table for `day`.
pub fn timeline_table(index: &TaskScheduleIndex, day: NaiveDate) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Hour").add_attribute(Attribute::Bold),
            Cell::new("Task").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Description").add_attribute(Attribute::Bold),
        ]);

    for bucket in index.hourly_buckets_for(day) {
        if bucket.is_empty() {
            table.add_row(vec![
                Cell::new(bucket.label()),
                Cell::new(EMPTY_SLOT).fg(Color::DarkGrey),
                Cell::new(""),
                Cell::new(""),
            ]);
            continue;
        }
        for (i, task) in bucket.tasks.iter().enumerate() {
            let color = category_color(task.category);
            table.add_row(vec![
                Cell::new(if i == 0 { bucket.label() } else { String::new() }),
                Cell::new(task.name.to_uppercase()).fg(color),
                Cell::new(task.category).fg(color),
                Cell::new(&task.description),
            ]);
        }
    }
    table
}

/// JSON form of a day's timeline: `{ "day": ..., "buckets": [24 buckets] }`.
pub fn timeline_json(index: &TaskScheduleIndex, day: NaiveDate) -> serde_json::Value {
    serde_json::json!({
        "day": day,
        "buckets": index.hourly_buckets_for(day),
    })
}

/// Prints the week containing `date` (default: today).
pub fn cmd_week(config: &PlannerConfig, date: Option<String>, json: bool) -> Result<(), PlannerError> {
    let week = week_strip(config, date, Local::now().date_naive())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&week).map_err(std::io::Error::from)?);
    } else {
        if let Some(first) = week.first() {
            println!("{}", month_label(first.date));
        }
        println!("{}", week_table(&week));
    }
    Ok(())
}

/// Prints the timeline of `day` (default: today) for the session's initial task list.
pub fn cmd_timeline(config: &PlannerConfig, day: Option<String>, json: bool, no_sample: bool) -> Result<(), PlannerError> {
    let day = date_or_today(day)?;
    let mut config = config.clone();
    if no_sample {
        config.sample_tasks = false;
    }
    let index = session_index(&config);
    tracing::debug!(%day, tasks = index.len(), "rendering timeline");

    if json {
        let out = timeline_json(&index, day);
        println!("{}", serde_json::to_string_pretty(&out).map_err(std::io::Error::from)?);
    } else {
        println!("{}", day.format("%A %d, %B %Y"));
        println!("{}", timeline_table(&index, day));
    }
    Ok(())
}

/// Lists the available categories.
pub fn cmd_categories() {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Category"]);
    for c in Category::ALL {
        table.add_row(vec![Cell::new(c).fg(category_color(c))]);
    }
    println!("{table}");
}
