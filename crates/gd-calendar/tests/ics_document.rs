//! Structural properties of the encoded calendar document.

use gd_calendar::{CalendarExportEvent, encode};
use pretty_assertions::assert_eq;

fn sample() -> CalendarExportEvent {
    CalendarExportEvent::new(
        "T",
        "line1\nline2",
        "2024-01-01T10:00:00Z",
        "2024-01-01T11:00:00Z",
    )
}

#[test]
fn contains_expected_fields() {
    let doc = encode(&sample());
    for field in [
        "DTSTART:20240101T100000Z",
        "DTEND:20240101T110000Z",
        "SUMMARY:T",
        "DESCRIPTION:line1\\nline2",
    ] {
        assert!(
            doc.lines().any(|line| line.trim_end_matches('\r') == field),
            "missing line {field:?} in {doc:?}"
        );
    }
}

#[test]
fn every_line_ends_with_crlf() {
    let doc = encode(&sample());
    assert!(doc.ends_with("\r\n"));
    for line in doc.split_inclusive('\n') {
        assert!(line.ends_with("\r\n"), "bare LF in line {line:?}");
    }
    assert!(!doc.replace("\r\n", "").contains('\n'));
    assert!(!doc.replace("\r\n", "").contains('\r'));
}

#[test]
fn begins_and_ends_with_calendar_markers() {
    let doc = encode(&sample());
    let lines: Vec<&str> = doc.split("\r\n").filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.first(), Some(&"BEGIN:VCALENDAR"));
    assert_eq!(lines.last(), Some(&"END:VCALENDAR"));
    assert_eq!(lines.len(), 11);
}

#[test]
fn exactly_one_event_block() {
    let doc = encode(&sample());
    assert_eq!(doc.matches("BEGIN:VEVENT").count(), 1);
    assert_eq!(doc.matches("END:VEVENT").count(), 1);
}

#[test]
fn header_is_fixed_regardless_of_input() {
    let other = CalendarExportEvent::new("VERSION:9.9", "PRODID:x", "2030-06-01", "2030-06-02");
    let doc = encode(&other);
    assert!(doc.starts_with(
        "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Good Dates//Calendar//EN\r\nCALSCALE:GREGORIAN\r\n"
    ));
}

#[test]
fn encoding_is_idempotent() {
    let event = sample();
    let first = encode(&event);
    let second = encode(&event);
    assert_eq!(first.as_bytes(), second.as_bytes());
}
