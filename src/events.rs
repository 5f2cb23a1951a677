//! Loading raw event records from a JSON event file.
//!
//! The JSON file stands in for the persistence layer: a flat list of
//! records with RFC 3339 instants and an optional recurrence descriptor
//! string. A record whose descriptor fails to parse keeps its event and
//! drops only the recurrence — the documented degraded behavior applied
//! here, at the call site, never inside the parser.

use std::path::Path;

use anyhow::{Context, Result};
use awde_agenda::{EventDefinition, RecurrenceRule};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use tracing::warn;

/// One persisted event record.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventRecord {
    pub id: String,
    pub summary: String,
    #[serde(default)]
    pub description: Option<String>,
    /// RFC 3339 start instant, carrying its resolved offset.
    pub start: DateTime<FixedOffset>,
    /// RFC 3339 end instant.
    #[serde(default)]
    pub end: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub all_day: bool,
    /// Recurrence descriptor, e.g. `WEEKLY;BYDAY=MO,WE`.
    #[serde(default)]
    pub recurrence: Option<String>,
}

/// Reads and materializes every record of an event file.
pub fn load_events(path: &Path) -> Result<Vec<EventDefinition>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading event file {}", path.display()))?;
    let records: Vec<EventRecord> = serde_json::from_str(&text)
        .with_context(|| format!("parsing event file {}", path.display()))?;
    Ok(records.into_iter().map(materialize).collect())
}

fn materialize(record: EventRecord) -> EventDefinition {
    let recurrence = record.recurrence.as_deref().and_then(|descriptor| {
        match RecurrenceRule::parse_descriptor(descriptor) {
            Ok(rule) => Some(rule),
            Err(error) => {
                warn!(
                    id = %record.id,
                    %error,
                    "malformed recurrence descriptor, treating event as non-recurring"
                );
                None
            }
        }
    });

    let mut definition = EventDefinition::new(record.id, record.summary, record.start);
    definition.description = record.description;
    definition.end = record.end;
    definition.all_day = record.all_day;
    definition.recurrence = recurrence;
    definition
}
