use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::Deserialize;

/// One row of the source dataset, exactly as it appears in the CSV.
/// Column names follow the Kaggle appointment schema; columns the
/// pipeline does not use are ignored by the reader.
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentRow {
    #[serde(rename = "ScheduledDay")]
    pub scheduled_day: DateTime<Utc>,
    #[serde(rename = "AppointmentDay")]
    pub appointment_day: DateTime<Utc>,
    #[serde(rename = "Age")]
    pub age: i32,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "No-show")]
    pub no_show: String,
}

/// Fixed age buckets used for grouping. Boundaries are half-open on the
/// left: (0,12], (12,18], (18,60], (60,100]. Ages outside these ranges
/// carry no bucket and are excluded from bucket-based aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeClass {
    Child,
    Teen,
    Adult,
    Old,
}

impl AgeClass {
    pub fn label(self) -> &'static str {
        match self {
            AgeClass::Child => "Child",
            AgeClass::Teen => "Teen",
            AgeClass::Adult => "Adult",
            AgeClass::Old => "Old",
        }
    }
}

/// A source row augmented with its derived fields. Built once by the
/// deriver and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Appointment {
    pub scheduled_at: DateTime<Utc>,
    pub appointment_date: NaiveDate,
    pub age: i32,
    pub gender: String,
    pub weekday: Weekday,
    /// 1 = patient did not attend, 0 = patient showed up.
    pub show_status: u8,
    pub age_class: Option<AgeClass>,
}

/// Overall attendance tally feeding the first chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowCounts {
    pub showed_up: u64,
    pub no_show: u64,
}

/// No-show and show-up percentages within one weekday, both truncated
/// to whole percent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayRates {
    pub weekday: Weekday,
    pub no_show_pct: i64,
    pub show_up_pct: i64,
}

/// Mean no-show percentage for one (age bucket, gender) group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeGenderRate {
    pub age_class: AgeClass,
    pub gender: String,
    pub no_show_pct: i64,
}
