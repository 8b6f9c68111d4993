use chrono::{Datelike, Weekday};

use crate::models::{AgeClass, Appointment, AppointmentRow};

/// Buckets an age into its class. The boundaries (0,12], (12,18],
/// (18,60], (60,100] are a fixed reporting policy; age 0, negative
/// ages, and ages above 100 have no bucket.
pub fn age_class(age: i32) -> Option<AgeClass> {
    match age {
        1..=12 => Some(AgeClass::Child),
        13..=18 => Some(AgeClass::Teen),
        19..=60 => Some(AgeClass::Adult),
        61..=100 => Some(AgeClass::Old),
        _ => None,
    }
}

/// Maps the outcome literal to the binary no-show flag:
/// "Yes" (did not attend) => 1, anything else => 0.
pub fn show_status(no_show: &str) -> u8 {
    if no_show == "Yes" {
        1
    } else {
        0
    }
}

/// Full English weekday label, matching the axis labels on the
/// day-of-week chart.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Attaches derived fields to every loaded row. Pure function of its
/// input; row order is preserved.
pub fn augment(rows: Vec<AppointmentRow>) -> Vec<Appointment> {
    rows.into_iter()
        .map(|row| {
            let appointment_date = row.appointment_day.date_naive();
            Appointment {
                scheduled_at: row.scheduled_day,
                appointment_date,
                age: row.age,
                weekday: appointment_date.weekday(),
                show_status: show_status(&row.no_show),
                age_class: age_class(row.age),
                gender: row.gender,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_row(age: i32, no_show: &str) -> AppointmentRow {
        AppointmentRow {
            scheduled_day: Utc.with_ymd_and_hms(2016, 4, 27, 15, 5, 12).unwrap(),
            appointment_day: Utc.with_ymd_and_hms(2016, 4, 29, 0, 0, 0).unwrap(),
            age,
            gender: "F".to_string(),
            no_show: no_show.to_string(),
        }
    }

    #[test]
    fn buckets_follow_the_fixed_boundaries() {
        assert_eq!(age_class(1), Some(AgeClass::Child));
        assert_eq!(age_class(12), Some(AgeClass::Child));
        assert_eq!(age_class(13), Some(AgeClass::Teen));
        assert_eq!(age_class(18), Some(AgeClass::Teen));
        assert_eq!(age_class(19), Some(AgeClass::Adult));
        assert_eq!(age_class(60), Some(AgeClass::Adult));
        assert_eq!(age_class(61), Some(AgeClass::Old));
        assert_eq!(age_class(100), Some(AgeClass::Old));
    }

    #[test]
    fn out_of_range_ages_have_no_bucket() {
        assert_eq!(age_class(0), None);
        assert_eq!(age_class(-1), None);
        assert_eq!(age_class(101), None);
        assert_eq!(age_class(115), None);
    }

    #[test]
    fn flag_is_one_only_for_no_show_literal() {
        assert_eq!(show_status("Yes"), 1);
        assert_eq!(show_status("No"), 0);
    }

    #[test]
    fn augment_derives_weekday_and_bucket() {
        let records = augment(vec![sample_row(10, "No"), sample_row(70, "Yes")]);
        assert_eq!(records.len(), 2);
        // Source attributes pass through untouched.
        assert_eq!(records[0].age, 10);
        assert_eq!(records[0].gender, "F");
        assert_eq!(
            records[0].scheduled_at,
            Utc.with_ymd_and_hms(2016, 4, 27, 15, 5, 12).unwrap()
        );
        assert_eq!(records[0].appointment_date.to_string(), "2016-04-29");
        // 2016-04-29 was a Friday.
        assert_eq!(records[0].weekday, Weekday::Fri);
        assert_eq!(weekday_name(records[0].weekday), "Friday");
        assert_eq!(records[0].age_class, Some(AgeClass::Child));
        assert_eq!(records[0].show_status, 0);
        assert_eq!(records[1].age_class, Some(AgeClass::Old));
        assert_eq!(records[1].show_status, 1);
    }
}
