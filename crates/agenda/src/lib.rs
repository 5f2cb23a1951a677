//! # awde-agenda
//!
//! Recurring-event rules for the Ethiopian calendar application: a
//! canonical recurrence description with a persisted one-line text form,
//! bounded expansion of definitions into concrete occurrences, and
//! date-range filtering of the result.
//!
//! The crate is pure and synchronous. Event instants carry their own
//! resolved UTC offset; nothing here reads a clock or a timezone database.
//!
//! ## Quick Start
//!
//! ```ignore
//! use awde_agenda::{expand, filter_instances, EventDefinition, RecurrenceRule, WeekdaySet};
//! use chrono::Weekday;
//!
//! let rule = RecurrenceRule::weekly([Weekday::Mon].into_iter().collect()).until(end);
//! assert_eq!(RecurrenceRule::parse_descriptor(&rule.to_descriptor())?, rule);
//!
//! let event = EventDefinition::new("id", "Standup", start).with_recurrence(rule);
//! let instances = expand(&event, Some(window_start), Some(window_end));
//! let visible = filter_instances(&instances, Some(from), Some(to));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `rule` | Recurrence rule, weekday set, descriptor (de)serialization |
//! | `event` | Event definitions and materialized instances |
//! | `expand` | Bounded expansion into occurrences |
//! | `filter` | Date-range filtering and filter state |
//! | `error` | Error types |

mod error;
mod event;
mod expand;
mod filter;
mod rule;

pub use error::ParseError;
pub use event::{EventDefinition, EventInstance};
pub use expand::{expand, OPEN_ENDED_HORIZON_DAYS};
pub use filter::{filter_instances, FilterState};
pub use rule::{Frequency, RecurrenceEnd, RecurrenceRule, WeekdaySet};
