use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::config::PlannerConfig;
use crate::models::{Task, TaskDraft};
use crate::sample::session_index;
use crate::schedule::{HourBucket, TaskScheduleIndex, HOURS_PER_DAY};
use crate::week::{current_week, WeekDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Adding,
}

/// Field of the "Add Task" form that has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Date,
    Time,
    Category,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Name,
        FormField::Description,
        FormField::Date,
        FormField::Time,
        FormField::Category,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> FormField {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> FormField {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// State of the "Add Task" modal.
#[derive(Debug, Clone)]
pub struct AddForm {
    pub draft: TaskDraft,
    pub focus: FormField,
    /// Last validation error, shown inside the form.
    pub error: Option<String>,
}

impl AddForm {
    pub fn new(now: NaiveDateTime) -> AddForm {
        AddForm {
            draft: TaskDraft::starting_at(now),
            focus: FormField::Name,
            error: None,
        }
    }

    /// Text buffer of the focused field; `None` for the category picker.
    fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.draft.name),
            FormField::Description => Some(&mut self.draft.description),
            FormField::Date => Some(&mut self.draft.date),
            FormField::Time => Some(&mut self.draft.time),
            FormField::Category => None,
        }
    }
}

/// Source of the current local time.
pub type Clock = Box<dyn Fn() -> NaiveDateTime>;

pub struct App {
    pub config: PlannerConfig,
    pub index: TaskScheduleIndex,
    /// Read on every query of "now"; never cached.
    clock: Clock,
    pub selected_day: NaiveDate,
    /// First hour shown on the timeline.
    pub scroll_hour: u32,
    pub input_mode: InputMode,
    pub form: AddForm,
    /// One-line feedback shown under the timeline.
    pub status: Option<String>,
}

impl App {
    /// Creates the screen state for the current local time.
    pub fn new(config: PlannerConfig) -> App {
        App::with_clock(config, Box::new(|| Local::now().naive_local()))
    }

    /// Creates the screen state with a clock frozen at `now`.
    pub fn with_now(config: PlannerConfig, now: NaiveDateTime) -> App {
        App::with_clock(config, Box::new(move || now))
    }

    /// Creates the screen state reading the time from `clock`.
    pub fn with_clock(config: PlannerConfig, clock: Clock) -> App {
        let index = session_index(&config);
        let scroll_hour = config.timeline_start_hour.min(HOURS_PER_DAY as u32 - 1);
        let now = clock();
        App {
            config,
            index,
            clock,
            selected_day: now.date(),
            scroll_hour,
            input_mode: InputMode::Normal,
            form: AddForm::new(now),
            status: None,
        }
    }

    /// Current local time.
    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    /// The week strip, recomputed from the clock on every call.
    pub fn week(&self) -> Vec<WeekDay> {
        current_week(self.now(), self.config.week_start)
    }

    /// Hourly buckets of the selected day, recomputed on every call.
    pub fn buckets(&self) -> [HourBucket<'_>; HOURS_PER_DAY] {
        self.index.hourly_buckets_for(self.selected_day)
    }

    /// Selects the `n`-th day (0-based) of the week strip.
    pub fn select_week_day(&mut self, n: usize) {
        if let Some(day) = self.week().get(n) {
            self.selected_day = day.date;
            tracing::debug!(day = %self.selected_day, "day selected");
        }
    }

    /// Moves the selection one day forward, staying inside the week.
    pub fn next_day(&mut self) {
        self.step_day(1);
    }

    /// Moves the selection one day back, staying inside the week.
    pub fn previous_day(&mut self) {
        self.step_day(-1);
    }

    fn step_day(&mut self, delta: isize) {
        let week = self.week();
        let Some(pos) = week.iter().position(|d| d.date == self.selected_day) else {
            // Selection left the week (clock passed midnight into a new week).
            if let Some(today) = week.iter().find(|d| d.is_today) {
                self.selected_day = today.date;
            }
            return;
        };
        let target = pos as isize + delta;
        if target >= 0 && (target as usize) < week.len() {
            self.select_week_day(target as usize);
        }
    }

    /// Jumps back to today.
    pub fn select_today(&mut self) {
        self.selected_day = self.now().date();
    }

    pub fn scroll_up(&mut self) {
        self.scroll_hour = self.scroll_hour.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_hour + 1 < HOURS_PER_DAY as u32 {
            self.scroll_hour += 1;
        }
    }

    /// Opens the "Add Task" form, pre-filled with the current time.
    pub fn start_add(&mut self) {
        self.input_mode = InputMode::Adding;
        self.form = AddForm::new(self.now());
        self.status = None;
    }

    pub fn cancel_add(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn focus_next(&mut self) {
        self.form.focus = self.form.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.form.focus = self.form.focus.previous();
    }

    /// Types a character into the focused field.
    pub fn input_char(&mut self, c: char) {
        if let Some(buf) = self.form.focused_buffer() {
            buf.push(c);
            self.form.error = None;
        }
    }

    /// Deletes the last character of the focused field.
    pub fn input_backspace(&mut self) {
        if let Some(buf) = self.form.focused_buffer() {
            buf.pop();
            self.form.error = None;
        }
    }

    pub fn next_category(&mut self) {
        if self.form.focus == FormField::Category {
            self.form.draft.category = self.form.draft.category.next();
        }
    }

    pub fn previous_category(&mut self) {
        if self.form.focus == FormField::Category {
            self.form.draft.category = self.form.draft.category.previous();
        }
    }

    /// Whether the submit action is available.
    pub fn can_submit(&self) -> bool {
        self.form.draft.has_name()
    }

    /// Validates the form and appends the task.
    ///
    /// Returns the added task. On a validation error the form stays open with
    /// the error shown; an empty name is ignored like a disabled button.
    pub fn submit_add(&mut self) -> Option<&Task> {
        if !self.can_submit() {
            return None;
        }
        match self.form.draft.clone().into_task() {
            Ok(task) => {
                self.status = Some(format!(
                    "Added '{}' on {}",
                    task.name,
                    task.scheduled_at.format("%a %d %b %H:%M")
                ));
                tracing::info!(id = %task.id, day = %task.day(), category = %task.category, "task created");
                self.index.add_task(task);
                self.input_mode = InputMode::Normal;
                self.index.tasks().last()
            }
            Err(e) => {
                tracing::debug!(error = %e, "add task form rejected");
                self.form.error = Some(e.to_string());
                None
            }
        }
    }
}
