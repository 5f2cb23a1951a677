//! Event definitions and materialized occurrences.

use awde_ethiopic::EthiopicDate;
use chrono::{DateTime, Duration, FixedOffset};

use crate::rule::RecurrenceRule;

/// A stored event, as materialized from the persistence layer.
///
/// The instant carries its resolved UTC offset; the engine treats the
/// offset as opaque and never consults a timezone database. The Ethiopian
/// anchor is derived from the start instant at construction, so the two
/// can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDefinition {
    /// Stable identifier from the persistence layer.
    pub id: String,
    /// Event title.
    pub summary: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Start instant in the event's own offset.
    pub start: DateTime<FixedOffset>,
    /// End instant; `None` for point-in-time events and reminders.
    pub end: Option<DateTime<FixedOffset>>,
    /// Whether the event covers the whole day.
    pub all_day: bool,
    /// Recurrence description; `None` for one-off events.
    pub recurrence: Option<RecurrenceRule>,
    /// The Ethiopian date the start instant falls on.
    pub anchor: EthiopicDate,
}

impl EventDefinition {
    /// Creates a one-off event starting at `start`.
    pub fn new(id: impl Into<String>, summary: impl Into<String>, start: DateTime<FixedOffset>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            description: None,
            start,
            end: None,
            all_day: false,
            recurrence: None,
            anchor: anchor_for(start),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the end instant.
    pub fn with_end(mut self, end: DateTime<FixedOffset>) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the end instant from a duration after the start.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.end = Some(self.start + duration);
        self
    }

    /// Marks the event as all-day.
    pub fn all_day(mut self) -> Self {
        self.all_day = true;
        self
    }

    /// Sets the recurrence rule.
    pub fn with_recurrence(mut self, rule: RecurrenceRule) -> Self {
        self.recurrence = Some(rule);
        self
    }

    /// Returns the event duration, when an end instant is set.
    pub fn duration(&self) -> Option<Duration> {
        self.end.map(|end| end - self.start)
    }
}

/// Computes the Ethiopian date of an instant's civil day.
pub(crate) fn anchor_for(instant: DateTime<FixedOffset>) -> EthiopicDate {
    EthiopicDate::from_gregorian(instant.date_naive())
        .expect("civil dates of representable instants convert")
}

/// One materialized occurrence of an event.
///
/// A one-off event has exactly one instance (itself); a weekly event has
/// one per matching date up to its end condition or the expansion bound.
#[derive(Debug, Clone, PartialEq)]
pub struct EventInstance {
    /// Identifier of the originating [`EventDefinition`].
    pub event_id: String,
    /// Event title, copied from the definition.
    pub summary: String,
    /// Description, copied from the definition.
    pub description: Option<String>,
    /// Start instant of this occurrence, in the definition's offset.
    pub start: DateTime<FixedOffset>,
    /// End instant of this occurrence.
    pub end: Option<DateTime<FixedOffset>>,
    /// Whether the occurrence covers the whole day.
    pub all_day: bool,
    /// `true` when the occurrence came from a recurring rule.
    pub recurring: bool,
    /// The Ethiopian date this occurrence falls on.
    pub anchor: EthiopicDate,
}

impl EventInstance {
    /// Materializes the occurrence of `definition` starting at `start`.
    pub(crate) fn at(definition: &EventDefinition, start: DateTime<FixedOffset>, recurring: bool) -> Self {
        Self {
            event_id: definition.id.clone(),
            summary: definition.summary.clone(),
            description: definition.description.clone(),
            start,
            end: definition.duration().map(|d| start + d),
            all_day: definition.all_day,
            recurring,
            anchor: anchor_for(start),
        }
    }
}
