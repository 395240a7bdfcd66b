use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::fmt;

/// Dates before 1900-01-01 are never offered by the picker.
pub fn epoch_floor() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineRejection {
    InPast,
    BeforeEpochFloor,
}

impl fmt::Display for DeadlineRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeadlineRejection::InPast => write!(f, "deadline is earlier than now"),
            DeadlineRejection::BeforeEpochFloor => {
                write!(f, "deadline is earlier than {}", epoch_floor())
            }
        }
    }
}

/// Selection-time check applied when a deadline is picked. A day is compared by its
/// start, so the current day is only selectable at exactly midnight.
pub fn check_selectable(date: NaiveDate, now: NaiveDateTime) -> Result<(), DeadlineRejection> {
    if date.and_time(NaiveTime::MIN) < now {
        return Err(DeadlineRejection::InPast);
    }
    if date < epoch_floor() {
        return Err(DeadlineRejection::BeforeEpochFloor);
    }
    Ok(())
}

/// Long human form, e.g. "October 19th, 2026".
pub fn format_deadline(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        day,
        ordinal_suffix(day),
        date.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
