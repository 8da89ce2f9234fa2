//! Series computation for the schedule charts. Rendering is handed to the
//! external charting library; everything here is pure and unit-testable.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};
use std::collections::BTreeMap;

use crate::models::ScheduleEvent;

/// Occurrences per start hour of day
pub fn hourly_counts(schedule: &[ScheduleEvent]) -> [u32; 24] {
    let mut hours = [0u32; 24];
    for event in schedule {
        if let Some(start) = parse_start(&event.start) {
            hours[start.hour() as usize] += 1;
        }
    }
    hours
}

/// Occurrences per start weekday, Sunday first
pub fn weekday_counts(schedule: &[ScheduleEvent]) -> [u32; 7] {
    let mut days = [0u32; 7];
    for event in schedule {
        if let Some(start) = parse_start(&event.start) {
            days[start.weekday().num_days_from_sunday() as usize] += 1;
        }
    }
    days
}

/// Stage labels in sorted key order with their occurrence counts
pub fn stage_series(distribution: &BTreeMap<String, u32>) -> (Vec<String>, Vec<u32>) {
    // BTreeMap iteration already yields sorted keys
    let labels = distribution.keys().cloned().collect();
    let counts = distribution.values().copied().collect();
    (labels, counts)
}

/// Hour-of-day axis labels: "0:00" .. "23:00"
pub fn hour_labels() -> Vec<String> {
    (0..24).map(|h| format!("{}:00", h)).collect()
}

/// Weekday axis labels, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Event starts come as RFC 3339 when the feed carries an offset and as
/// naive local datetimes otherwise. Unparseable events are skipped.
fn parse_start(start: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(start) {
        return Some(dt.naive_local());
    }
    start.parse::<NaiveDateTime>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(start: &str) -> ScheduleEvent {
        ScheduleEvent {
            start: start.to_string(),
            end: None,
            note: None,
        }
    }

    #[test]
    fn test_hourly_counts_buckets_by_start_hour() {
        let schedule = vec![
            event("2026-08-03T18:00:00"),
            event("2026-08-04T18:30:00"),
            event("2026-08-05T06:00:00"),
            event("not a timestamp"),
        ];

        let hours = hourly_counts(&schedule);
        assert_eq!(hours[18], 2);
        assert_eq!(hours[6], 1);
        assert_eq!(hours.iter().sum::<u32>(), 3);
    }

    #[test]
    fn test_weekday_counts_sunday_first() {
        // 2 August 2026 is a Sunday, 3 August a Monday
        let schedule = vec![
            event("2026-08-02T10:00:00"),
            event("2026-08-03T10:00:00"),
            event("2026-08-03T20:00:00"),
        ];

        let days = weekday_counts(&schedule);
        assert_eq!(days[0], 1);
        assert_eq!(days[1], 2);
        assert_eq!(days.iter().sum::<u32>(), 3);
    }

    #[test]
    fn test_rfc3339_offsets_accepted() {
        let schedule = vec![event("2026-08-03T18:00:00+02:00")];

        let hours = hourly_counts(&schedule);
        assert_eq!(hours[18], 1);
    }

    #[test]
    fn test_stage_series_sorted_by_label() {
        let mut distribution = BTreeMap::new();
        distribution.insert("4".to_string(), 6);
        distribution.insert("2".to_string(), 10);

        let (labels, counts) = stage_series(&distribution);
        assert_eq!(labels, vec!["2", "4"]);
        assert_eq!(counts, vec![10, 6]);
    }

    #[test]
    fn test_hour_labels() {
        let labels = hour_labels();
        assert_eq!(labels.len(), 24);
        assert_eq!(labels[0], "0:00");
        assert_eq!(labels[23], "23:00");
    }
}
