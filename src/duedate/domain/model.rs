use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::utils::date::serializer;

// HolidayWindow is a single observance from the holiday calendar, a half-open
// [start_date, end_date) range of whole days in the local calendar with no
// time-of-day component. Read-only input for the duration of one calculation.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct HolidayWindow {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl HolidayWindow {
    pub fn new(name: &str, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            name: name.to_string(),
            start_date,
            end_date,
        }
    }

    pub fn single_day(name: &str, date: NaiveDate) -> Self {
        Self::new(name, date, date + Duration::days(1))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date < self.end_date
    }
}

// ReferenceInstant is the authoritative "current time" fetched from the time
// gateway rather than a client clock, so a manipulated device clock cannot
// shorten or lengthen a loan.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct ReferenceInstant(#[serde(with = "serializer")] pub NaiveDateTime);

impl ReferenceInstant {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }
}

// DueDateResult carries the computed due timestamp plus the adjustment counts
// so a borrow transaction can record how the date was derived.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DueDateResult {
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
    pub base_days: i64,
    pub weekend_days_added: i64,
    pub holiday_days_added: i64,
}
