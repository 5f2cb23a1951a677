//! Recurrence rules and their persisted text descriptor.
//!
//! The descriptor grammar is one line:
//!
//! ```text
//! FREQ[;BYDAY=D1,D2,...][;UNTIL=<epoch-millis>]
//! ```
//!
//! with `FREQ` in `{NONE, WEEKLY}`, weekday codes from the fixed set
//! `MO TU WE TH FR SA SU`, and `UNTIL` present iff the rule has an end
//! date. Serialization is canonical (weekdays Monday-first), and
//! `parse` is its exact inverse.

use chrono::{DateTime, Utc, Weekday};

use crate::error::ParseError;

/// How often an event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Frequency {
    /// A single occurrence; the definition is its own only instance.
    #[default]
    None,
    /// One occurrence per matching weekday per week.
    Weekly,
}

impl Frequency {
    fn token(self) -> &'static str {
        match self {
            Frequency::None => "NONE",
            Frequency::Weekly => "WEEKLY",
        }
    }
}

/// When a recurring rule stops producing occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecurrenceEnd {
    /// The rule never ends; expansion is bounded by the caller's window or
    /// the fixed horizon.
    #[default]
    Never,
    /// The rule ends at the given instant, inclusive.
    Until(DateTime<Utc>),
}

/// A set of weekdays stored as a 7-bit mask, iterated Monday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns `true` when no weekday is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of weekdays in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Adds a weekday to the set.
    pub fn insert(&mut self, day: Weekday) {
        self.0 |= 1 << day.num_days_from_monday();
    }

    /// Returns `true` when the set contains `day`.
    pub fn contains(self, day: Weekday) -> bool {
        self.0 & (1 << day.num_days_from_monday()) != 0
    }

    /// Iterates the set in Monday-first order.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        ALL_WEEKDAYS.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        let mut set = Self::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn weekday_code(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
        Weekday::Sun => "SU",
    }
}

fn weekday_from_code(code: &str) -> Option<Weekday> {
    match code {
        "MO" => Some(Weekday::Mon),
        "TU" => Some(Weekday::Tue),
        "WE" => Some(Weekday::Wed),
        "TH" => Some(Weekday::Thu),
        "FR" => Some(Weekday::Fri),
        "SA" => Some(Weekday::Sat),
        "SU" => Some(Weekday::Sun),
        _ => None,
    }
}

/// A recurrence description: frequency, weekday set, and end condition.
///
/// Invariants are enforced at construction: the weekday set is empty unless
/// the frequency is [`Frequency::Weekly`], and an end date is present iff
/// the end option is [`RecurrenceEnd::Until`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecurrenceRule {
    frequency: Frequency,
    week_days: WeekdaySet,
    end: RecurrenceEnd,
}

impl RecurrenceRule {
    /// A rule that never repeats.
    pub fn once() -> Self {
        Self::default()
    }

    /// A weekly rule repeating on the given weekdays.
    pub fn weekly(week_days: WeekdaySet) -> Self {
        Self {
            frequency: Frequency::Weekly,
            week_days,
            end: RecurrenceEnd::Never,
        }
    }

    /// Sets an inclusive end instant.
    pub fn until(mut self, end: DateTime<Utc>) -> Self {
        self.end = RecurrenceEnd::Until(end);
        self
    }

    /// Returns the frequency.
    pub fn frequency(self) -> Frequency {
        self.frequency
    }

    /// Returns the weekday set (always empty for [`Frequency::None`]).
    pub fn week_days(self) -> WeekdaySet {
        self.week_days
    }

    /// Returns the end condition.
    pub fn end(self) -> RecurrenceEnd {
        self.end
    }

    /// Serializes the rule to its canonical one-line descriptor.
    pub fn to_descriptor(self) -> String {
        let mut out = String::from(self.frequency.token());
        if self.frequency == Frequency::Weekly && !self.week_days.is_empty() {
            out.push_str(";BYDAY=");
            let codes: Vec<&str> = self.week_days.iter().map(weekday_code).collect();
            out.push_str(&codes.join(","));
        }
        if let RecurrenceEnd::Until(end) = self.end {
            out.push_str(";UNTIL=");
            out.push_str(&end.timestamp_millis().to_string());
        }
        out
    }

    /// Parses a descriptor produced by [`Self::to_descriptor`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] on any deviation from the grammar: unknown
    /// frequency or weekday tokens, unknown or duplicated fields, `BYDAY`
    /// on a `NONE` rule, or a non-numeric `UNTIL` value. Unknown fields
    /// are rejected, not ignored.
    pub fn parse_descriptor(input: &str) -> Result<Self, ParseError> {
        let mut parts = input.split(';');
        let freq_token = parts.next().unwrap_or_default();
        let frequency = match freq_token {
            "NONE" => Frequency::None,
            "WEEKLY" => Frequency::Weekly,
            "" => return Err(ParseError::Empty),
            other => {
                return Err(ParseError::UnknownFrequency {
                    token: other.to_string(),
                })
            }
        };

        let mut week_days: Option<WeekdaySet> = None;
        let mut end: Option<RecurrenceEnd> = None;

        for part in parts {
            let (key, value) = part.split_once('=').ok_or_else(|| ParseError::MalformedField {
                part: part.to_string(),
            })?;
            match key {
                "BYDAY" => {
                    if frequency != Frequency::Weekly {
                        return Err(ParseError::FieldNotAllowed {
                            field: key.to_string(),
                            frequency: frequency.token(),
                        });
                    }
                    if week_days.is_some() {
                        return Err(ParseError::DuplicateField {
                            field: key.to_string(),
                        });
                    }
                    let mut set = WeekdaySet::empty();
                    for code in value.split(',') {
                        let day = weekday_from_code(code).ok_or_else(|| {
                            ParseError::UnknownWeekday {
                                token: code.to_string(),
                            }
                        })?;
                        set.insert(day);
                    }
                    week_days = Some(set);
                }
                "UNTIL" => {
                    if end.is_some() {
                        return Err(ParseError::DuplicateField {
                            field: key.to_string(),
                        });
                    }
                    let millis: i64 =
                        value.parse().map_err(|_| ParseError::InvalidTimestamp {
                            value: value.to_string(),
                        })?;
                    let instant = DateTime::from_timestamp_millis(millis).ok_or_else(|| {
                        ParseError::InvalidTimestamp {
                            value: value.to_string(),
                        }
                    })?;
                    end = Some(RecurrenceEnd::Until(instant));
                }
                other => {
                    return Err(ParseError::UnknownField {
                        field: other.to_string(),
                    })
                }
            }
        }

        Ok(Self {
            frequency,
            week_days: week_days.unwrap_or_default(),
            end: end.unwrap_or_default(),
        })
    }
}
