//! Date-range filtering of event instances.

use chrono::{NaiveDate, NaiveTime, TimeZone};

use crate::event::EventInstance;

/// Filters instances to those starting within `[start_date, end_date]`.
///
/// Both bounds are civil dates, applied independently and inclusively. The
/// midnight boundaries are evaluated in each instance's *own* offset, not a
/// global one: an instance passes the start bound when it starts at or
/// after `start_date`'s midnight in its offset, and passes the end bound
/// when it starts before the midnight following `end_date` in its offset.
///
/// With both bounds `None` the input is returned unchanged. Filtering is
/// non-destructive and order-preserving.
pub fn filter_instances(
    instances: &[EventInstance],
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Vec<EventInstance> {
    if start_date.is_none() && end_date.is_none() {
        return instances.to_vec();
    }

    instances
        .iter()
        .filter(|instance| {
            let offset = *instance.start.offset();
            let passes_start = start_date.is_none_or(|date| {
                let bound = offset
                    .from_local_datetime(&date.and_time(NaiveTime::MIN))
                    .single()
                    .expect("fixed offsets have no gaps or folds");
                instance.start >= bound
            });
            let passes_end = end_date.is_none_or(|date| {
                // End of day expressed as "before the next midnight".
                match date.succ_opt() {
                    Some(next) => {
                        let bound = offset
                            .from_local_datetime(&next.and_time(NaiveTime::MIN))
                            .single()
                            .expect("fixed offsets have no gaps or folds");
                        instance.start < bound
                    }
                    None => true,
                }
            });
            passes_start && passes_end
        })
        .cloned()
        .collect()
}

/// An immutable date-filter selection.
///
/// Replaces mutable "has the filter been initialized" view-model state: the
/// unconfigured value is `FilterState::default()` (both bounds absent), and
/// "explicitly show everything" is the documented sentinel range
/// 1900-01-01..=2100-12-31, so the two are distinguishable. The sentinel
/// convention is part of the surrounding application's UI contract and must
/// survive reimplementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl FilterState {
    /// Returns the state selecting the sentinel "show everything" range.
    pub fn show_all() -> Self {
        Self {
            start: Some(show_all_start()),
            end: Some(show_all_end()),
        }
    }

    /// Returns the start bound, if configured.
    pub fn start(self) -> Option<NaiveDate> {
        self.start
    }

    /// Returns the end bound, if configured.
    pub fn end(self) -> Option<NaiveDate> {
        self.end
    }

    /// Returns a copy with the start bound replaced.
    pub fn with_start(self, start: Option<NaiveDate>) -> Self {
        Self { start, ..self }
    }

    /// Returns a copy with the end bound replaced.
    pub fn with_end(self, end: Option<NaiveDate>) -> Self {
        Self { end, ..self }
    }

    /// Returns `true` when both bounds sit at the sentinel extremes.
    pub fn is_show_all(self) -> bool {
        self.start == Some(show_all_start()) && self.end == Some(show_all_end())
    }

    /// Applies this selection to a list of instances.
    pub fn apply(self, instances: &[EventInstance]) -> Vec<EventInstance> {
        filter_instances(instances, self.start, self.end)
    }
}

fn show_all_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).expect("sentinel date is valid")
}

fn show_all_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2100, 12, 31).expect("sentinel date is valid")
}
