//! Exhaustive checks that the twelve windows partition the leap-year calendar.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use gd_zodiac::{SignKind, resolve, resolve_month_day, sign};

/// Every (month, day) pair of a leap year, in calendar order.
fn all_month_days() -> Vec<(u32, u32)> {
    let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut pairs = Vec::with_capacity(366);
    while date.year() == 2024 {
        pairs.push((date.month(), date.day()));
        date = date.succ_opt().unwrap();
    }
    pairs
}

fn in_window(kind: SignKind, month: u32, day: u32) -> bool {
    let (start, end) = kind.window();
    let key = (month, day);
    if start <= end {
        start <= key && key <= end
    } else {
        key >= start || key <= end
    }
}

#[test]
fn calendar_has_366_pairs() {
    assert_eq!(all_month_days().len(), 366);
}

#[test]
fn every_day_resolves_to_exactly_one_window() {
    for (month, day) in all_month_days() {
        let containing: Vec<SignKind> = SignKind::ALL
            .into_iter()
            .filter(|kind| in_window(*kind, month, day))
            .collect();
        assert_eq!(
            containing.len(),
            1,
            "{month:02}-{day:02} is covered by {containing:?}"
        );

        let resolved = resolve_month_day(month, day).expect("valid pair");
        assert_eq!(
            resolved.kind, containing[0],
            "{month:02}-{day:02} resolved outside its window"
        );
    }
}

#[test]
fn every_sign_is_reached_and_day_counts_sum_to_366() {
    let mut counts: HashMap<SignKind, usize> = HashMap::new();
    for (month, day) in all_month_days() {
        *counts
            .entry(resolve_month_day(month, day).unwrap().kind)
            .or_default() += 1;
    }
    assert_eq!(counts.len(), 12);
    assert_eq!(counts.values().sum::<usize>(), 366);
    assert_eq!(counts[&SignKind::Pisces], 31, "Feb 19 - Mar 20 incl. Feb 29");
    assert_eq!(counts[&SignKind::Capricorn], 29);
}

#[test]
fn windows_are_contiguous_in_calendar_order() {
    // Walking the year, a sign change only happens at a window start.
    let days = all_month_days();
    let mut changes = 0;
    for pair in days.windows(2) {
        let (m0, d0) = pair[0];
        let (m1, d1) = pair[1];
        let before = resolve_month_day(m0, d0).unwrap().kind;
        let after = resolve_month_day(m1, d1).unwrap().kind;
        if before != after {
            changes += 1;
            assert_eq!(after.window().0, (m1, d1), "{after} entered mid-window");
            assert_eq!(before.window().1, (m0, d0), "{before} left mid-window");
        }
    }
    // Twelve windows on a circle, one of which straddles Jan 1.
    assert_eq!(changes, 12);
}

#[test]
fn resolve_agrees_for_every_date_of_a_common_year() {
    let mut date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    while date.year() == 2023 {
        let expected = resolve_month_day(date.month(), date.day()).unwrap();
        assert!(std::ptr::eq(resolve(date), expected));
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn date_range_labels_name_the_window_bounds() {
    const MONTHS: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    for kind in SignKind::ALL {
        let ((m0, d0), (m1, d1)) = kind.window();
        let label = format!(
            "{} {d0} - {} {d1}",
            MONTHS[(m0 - 1) as usize],
            MONTHS[(m1 - 1) as usize]
        );
        assert_eq!(sign(kind).date_range, label);
    }
}
