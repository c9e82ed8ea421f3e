use chrono::{DateTime, Utc};

/// The instant a submission is judged on. An edit after creation resets the
/// timeliness clock, so the later of the two events always wins; a pull
/// request never edited since creation carries no `updated` instant.
pub fn effective_instant(created: DateTime<Utc>, updated: Option<DateTime<Utc>>) -> DateTime<Utc> {
    match updated {
        Some(updated) => created.max(updated),
        None => created,
    }
}

/// Strictly after the deadline. An instant exactly equal to the deadline is
/// still on time.
pub fn is_late(effective: DateTime<Utc>, deadline: DateTime<Utc>) -> bool {
    effective > deadline
}
