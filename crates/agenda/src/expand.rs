//! Bounded expansion of event definitions into concrete occurrences.

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, TimeZone, Utc};
use tracing::debug;

use crate::event::{EventDefinition, EventInstance};
use crate::rule::{Frequency, RecurrenceEnd};

/// Expansion bound for open-ended rules when no window is given.
///
/// A weekly rule with no end date and no window would otherwise never
/// terminate; expansion stops one year past the definition start.
pub const OPEN_ENDED_HORIZON_DAYS: i64 = 366;

/// Expands a definition into its occurrences within a window.
///
/// Both bounds are inclusive instants; either may be `None`, which is the
/// "null filter" used when a caller wants every occurrence. A one-off
/// definition yields exactly one instance when its start passes the window
/// (or unconditionally without one). A weekly definition yields one
/// instance per matching weekday, keeping the definition's time of day,
/// offset, and duration, and never walks past the rule's end date, the
/// window end, or — when both are absent — [`OPEN_ENDED_HORIZON_DAYS`]
/// after the start.
///
/// Instances are emitted in chronological order, at most one per civil day.
pub fn expand(
    definition: &EventDefinition,
    window_start: Option<DateTime<Utc>>,
    window_end: Option<DateTime<Utc>>,
) -> Vec<EventInstance> {
    let rule = match &definition.recurrence {
        Some(rule) if rule.frequency() == Frequency::Weekly => *rule,
        _ => return expand_single(definition, window_start, window_end),
    };

    // A WEEKLY rule with no weekday set degrades to a single occurrence
    // rather than silently dropping the event.
    if rule.week_days().is_empty() {
        debug!(event = %definition.id, "weekly rule without weekdays, treating as one-off");
        return expand_single(definition, window_start, window_end);
    }

    let until = match rule.end() {
        RecurrenceEnd::Until(end) => Some(end),
        RecurrenceEnd::Never => None,
    };
    let cap = match (until, window_end) {
        (Some(u), Some(w)) => u.min(w),
        (Some(u), None) => u,
        (None, Some(w)) => w,
        (None, None) => {
            (definition.start + Duration::days(OPEN_ENDED_HORIZON_DAYS)).with_timezone(&Utc)
        }
    };

    let offset = *definition.start.offset();
    let start_date = definition.start.date_naive();
    let time_of_day = definition.start.time();

    let mut instances = Vec::new();
    let mut date = start_date;
    loop {
        let candidate = local_instant(&offset, date.and_time(time_of_day));
        if candidate > cap {
            break;
        }
        let after_start = window_start.is_none_or(|ws| candidate >= ws);
        if after_start && rule.week_days().contains(date.weekday()) {
            instances.push(EventInstance::at(definition, candidate, true));
        }
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    debug!(
        event = %definition.id,
        instances = instances.len(),
        "expanded weekly rule"
    );
    instances
}

fn expand_single(
    definition: &EventDefinition,
    window_start: Option<DateTime<Utc>>,
    window_end: Option<DateTime<Utc>>,
) -> Vec<EventInstance> {
    let start = definition.start;
    let in_window = window_start.is_none_or(|ws| start >= ws)
        && window_end.is_none_or(|we| start <= we);
    if in_window {
        vec![EventInstance::at(definition, start, false)]
    } else {
        Vec::new()
    }
}

fn local_instant(
    offset: &chrono::FixedOffset,
    naive: NaiveDateTime,
) -> DateTime<chrono::FixedOffset> {
    offset
        .from_local_datetime(&naive)
        .single()
        .expect("fixed offsets have no gaps or folds")
}
