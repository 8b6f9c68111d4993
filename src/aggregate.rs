use std::collections::HashMap;

use chrono::Weekday;

use crate::models::{AgeClass, AgeGenderRate, Appointment, ShowCounts, WeekdayRates};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Truncated integer percentage of `part` within `total`. Truncation
/// (never rounding) is part of the reporting contract.
fn pct(part: u64, total: u64) -> i64 {
    if total == 0 {
        0
    } else {
        (part * 100 / total) as i64
    }
}

pub fn show_status_counts(records: &[Appointment]) -> ShowCounts {
    let no_show = records.iter().filter(|r| r.show_status == 1).count() as u64;
    ShowCounts {
        showed_up: records.len() as u64 - no_show,
        no_show,
    }
}

/// No-show and show-up percentage within each weekday, Monday first.
/// Weekdays with no appointments are omitted.
pub fn rates_by_weekday(records: &[Appointment]) -> Vec<WeekdayRates> {
    let mut tallies: HashMap<Weekday, (u64, u64)> = HashMap::new();
    for record in records {
        let entry = tallies.entry(record.weekday).or_insert((0, 0));
        entry.0 += 1;
        if record.show_status == 1 {
            entry.1 += 1;
        }
    }

    WEEK.iter()
        .filter_map(|day| {
            tallies.get(day).map(|&(total, no_shows)| WeekdayRates {
                weekday: *day,
                no_show_pct: pct(no_shows, total),
                show_up_pct: pct(total - no_shows, total),
            })
        })
        .collect()
}

/// Mean no-show percentage per (age bucket, gender) pair, ordered by
/// bucket then gender. Records without an age bucket are dropped.
pub fn no_show_rate_by_age_gender(records: &[Appointment]) -> Vec<AgeGenderRate> {
    let mut tallies: HashMap<(AgeClass, String), (u64, u64)> = HashMap::new();
    for record in records {
        let Some(age_class) = record.age_class else {
            continue;
        };
        let entry = tallies
            .entry((age_class, record.gender.clone()))
            .or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u64::from(record.show_status);
    }

    let mut rates: Vec<AgeGenderRate> = tallies
        .into_iter()
        .map(|((age_class, gender), (total, no_shows))| AgeGenderRate {
            age_class,
            gender,
            no_show_pct: pct(no_shows, total),
        })
        .collect();

    rates.sort_by(|a, b| {
        a.age_class
            .cmp(&b.age_class)
            .then_with(|| a.gender.cmp(&b.gender))
    });
    rates
}
