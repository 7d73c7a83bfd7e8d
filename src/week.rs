use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// First day of the calendar week.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
    Saturday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Saturday => Weekday::Sat,
        }
    }
}

/// One date of the current week, as shown in the week strip.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WeekDay {
    pub date: NaiveDate,
    /// Full weekday name, e.g. "Friday".
    pub weekday_name: String,
    pub is_today: bool,
}

impl WeekDay {
    /// Three-letter weekday name, e.g. "Fri".
    pub fn short_name(&self) -> &str {
        self.weekday_name.get(..3).unwrap_or(&self.weekday_name)
    }

    /// Zero-padded day of month, e.g. "07".
    pub fn day_of_month(&self) -> String {
        self.date.format("%d").to_string()
    }
}

/// Returns the 7 days of the week containing `now`, starting at `week_start`.
///
/// Returns an empty list only if the week would leave chrono's date range,
/// which cannot happen for real clock readings.
pub fn current_week(now: NaiveDateTime, week_start: WeekStart) -> Vec<WeekDay> {
    week_of(now.date(), now.date(), week_start)
}

/// Returns the 7 days of the week containing `date`, flagging `today` if it
/// falls inside that week. No day is flagged when it does not.
pub fn week_of(date: NaiveDate, today: NaiveDate, week_start: WeekStart) -> Vec<WeekDay> {
    let Some(first) = start_of_week(date, week_start) else {
        tracing::error!(%date, "week start falls outside the supported date range");
        return Vec::new();
    };

    let days: Option<Vec<NaiveDate>> = (0..7).map(|i| first.checked_add_days(Days::new(i))).collect();
    let Some(days) = days else {
        tracing::error!(%date, "week end falls outside the supported date range");
        return Vec::new();
    };

    days.into_iter()
        .map(|date| WeekDay {
            date,
            weekday_name: date.format("%A").to_string(),
            is_today: date == today,
        })
        .collect()
}

/// First date of the week that contains `date`.
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> Option<NaiveDate> {
    let start = week_start.weekday().num_days_from_monday();
    let current = date.weekday().num_days_from_monday();
    let offset = (current + 7 - start) % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
}

/// Header label for the month of `date`, e.g. "Apr 2023".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}
