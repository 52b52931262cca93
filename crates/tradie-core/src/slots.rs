// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Slot timestamps and per-day grouping for the booking page.
//
// The backend decides which slots exist. The client only parses the start
// timestamps well enough to bucket them by calendar day for display.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::types::Slot;

/// Naive layouts accepted after RFC 3339 and chrono's own ISO 8601 parser.
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parse a backend timestamp into wall-clock time in `tz`.
///
/// Offset-carrying timestamps are converted into `tz`. Naive timestamps are
/// already wall-clock time and are returned as-is.
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz).naive_local());
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(naive);
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Slots falling on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    /// `None` collects slots whose timestamp could not be parsed.
    pub day: Option<NaiveDate>,
    pub slots: Vec<Slot>,
}

impl DayGroup {
    /// `"Mon Jan 06 2025"`
    pub fn label(&self) -> String {
        match self.day {
            Some(day) => day.format("%a %b %d %Y").to_string(),
            None => "Other times".to_string(),
        }
    }
}

/// Partition slots by calendar day in `tz`.
///
/// Every slot lands in exactly one group. Groups are ordered by the first
/// slot that falls on them and slots keep their input order within a group.
pub fn group_by_day<Tz: TimeZone>(slots: &[Slot], tz: &Tz) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    let mut index: HashMap<Option<NaiveDate>, usize> = HashMap::new();

    for slot in slots {
        let day = slot.day(tz);
        let at = *index.entry(day).or_insert_with(|| {
            groups.push(DayGroup {
                day,
                slots: Vec::new(),
            });
            groups.len() - 1
        });
        groups[at].slots.push(slot.clone());
    }

    groups
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{FixedOffset, Utc};

    use super::*;

    fn slots(starts: &[&str]) -> Vec<Slot> {
        starts.iter().map(|s| Slot::new(*s)).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn groups_in_order_of_first_occurrence() {
        let input = slots(&[
            "2025-01-07T09:00:00Z",
            "2025-01-06T09:00:00Z",
            "2025-01-07T11:00:00Z",
            "2025-01-06T13:30:00Z",
        ]);
        let groups = group_by_day(&input, &Utc);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].day, date(2025, 1, 7));
        assert_eq!(groups[1].day, date(2025, 1, 6));
        assert_eq!(
            groups[0].slots,
            slots(&["2025-01-07T09:00:00Z", "2025-01-07T11:00:00Z"])
        );
        assert_eq!(
            groups[1].slots,
            slots(&["2025-01-06T09:00:00Z", "2025-01-06T13:30:00Z"])
        );
    }

    #[test]
    fn partition_is_exact() {
        let input = slots(&[
            "2025-02-01T08:00:00+10:00",
            "2025-02-01T23:30:00Z",
            "not a time",
            "2025-02-02T08:00:00",
            "2025-02-01 15:00:00",
            "garbage",
        ]);
        let groups = group_by_day(&input, &Utc);

        let total: usize = groups.iter().map(|g| g.slots.len()).sum();
        assert_eq!(total, input.len());

        let mut flattened: Vec<Slot> = groups.iter().flat_map(|g| g.slots.clone()).collect();
        let mut expected = input.clone();
        flattened.sort_by(|a, b| a.start.cmp(&b.start));
        expected.sort_by(|a, b| a.start.cmp(&b.start));
        assert_eq!(flattened, expected);

        let days: HashSet<_> = groups.iter().map(|g| g.day).collect();
        assert_eq!(days.len(), groups.len());
    }

    #[test]
    fn converts_offsets_into_the_display_timezone() {
        // 23:30 UTC on the 1st is already the 2nd in Sydney summer time.
        let sydney = FixedOffset::east_opt(11 * 3600).unwrap();
        let input = slots(&["2025-02-01T10:00:00Z", "2025-02-01T23:30:00Z"]);

        let utc_groups = group_by_day(&input, &Utc);
        assert_eq!(utc_groups.len(), 1);

        let local_groups = group_by_day(&input, &sydney);
        assert_eq!(local_groups.len(), 2);
        assert_eq!(local_groups[1].day, date(2025, 2, 2));
    }

    #[test]
    fn naive_timestamps_are_wall_clock() {
        let sydney = FixedOffset::east_opt(11 * 3600).unwrap();
        let input = slots(&["2025-02-01T23:30:00"]);
        assert_eq!(group_by_day(&input, &sydney)[0].day, date(2025, 2, 1));
        assert_eq!(input[0].time_label(&sydney), "23:30");
    }

    #[test]
    fn unparseable_slots_share_one_group() {
        let input = slots(&["tbd", "2025-03-03T09:00:00Z", "later"]);
        let groups = group_by_day(&input, &Utc);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].day, None);
        assert_eq!(groups[0].label(), "Other times");
        assert_eq!(groups[0].slots, slots(&["tbd", "later"]));
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(group_by_day(&[], &Utc).is_empty());
    }

    #[test]
    fn label_matches_date_string_layout() {
        let group = DayGroup {
            day: date(2025, 1, 6),
            slots: Vec::new(),
        };
        assert_eq!(group.label(), "Mon Jan 06 2025");
    }

    #[test]
    fn parses_fractional_and_minute_precision() {
        assert!(parse_timestamp("2025-01-06T09:00:00.123456", &Utc).is_some());
        assert!(parse_timestamp("2025-01-06T09:00", &Utc).is_some());
        assert!(parse_timestamp("2025-01-06 09:00", &Utc).is_some());
        assert!(parse_timestamp("2025-01-06", &Utc).is_none());
    }
}
