use super::common::*;
use crate::validation::timing::{effective_instant, is_late};

#[test]
fn later_update_determines_the_effective_instant() {
    let created = before_deadline();
    let updated = after_deadline();
    assert_eq!(effective_instant(created, Some(updated)), updated);
}

#[test]
fn creation_wins_when_update_is_older() {
    let created = after_deadline();
    let updated = before_deadline();
    assert_eq!(effective_instant(created, Some(updated)), created);
}

#[test]
fn absent_update_falls_back_to_creation() {
    let created = before_deadline();
    assert_eq!(effective_instant(created, None), created);
}

#[test]
fn instant_equal_to_deadline_is_on_time() {
    assert!(!is_late(deadline(), deadline()));
}

#[test]
fn one_second_past_deadline_is_late() {
    let effective = deadline() + chrono::Duration::seconds(1);
    assert!(is_late(effective, deadline()));
}

#[test]
fn lateness_is_monotonic_in_the_effective_instant() {
    let instants = [
        utc(2022, 4, 5, 16, 59, 59),
        deadline(),
        utc(2022, 4, 5, 17, 0, 1),
        utc(2022, 5, 1, 0, 0, 0),
    ];

    let mut seen_late = false;
    for instant in instants {
        let late = is_late(instant, deadline());
        assert!(!seen_late || late, "lateness must never reset as time moves forward");
        seen_late = late;
    }
}
