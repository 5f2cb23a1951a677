//! Error types for the awde-agenda crate.

/// Error type for malformed recurrence descriptors.
///
/// Parsing is strict: unknown tokens and fields are rejected rather than
/// ignored, so a descriptor that parses is guaranteed to round-trip.
/// The documented fallback for a failed parse — treating the event as
/// non-recurring — belongs to the caller, never to the parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Returned when the descriptor is empty.
    #[error("empty recurrence descriptor")]
    Empty,

    /// Returned when the frequency token is not `NONE` or `WEEKLY`.
    #[error("unknown frequency token: {token:?}")]
    UnknownFrequency {
        /// The unrecognized frequency token.
        token: String,
    },

    /// Returned when a `BYDAY` entry is outside the fixed 7-code alphabet.
    #[error("unknown weekday code: {token:?}")]
    UnknownWeekday {
        /// The unrecognized weekday code.
        token: String,
    },

    /// Returned when a field key is not part of the descriptor grammar.
    #[error("unknown field: {field:?}")]
    UnknownField {
        /// The unrecognized field key.
        field: String,
    },

    /// Returned when a field is valid but not allowed for the frequency,
    /// such as `BYDAY` on a `NONE` rule.
    #[error("field {field:?} not allowed for frequency {frequency}")]
    FieldNotAllowed {
        /// The offending field key.
        field: String,
        /// The frequency token the field conflicts with.
        frequency: &'static str,
    },

    /// Returned when the same field appears twice.
    #[error("duplicate field: {field:?}")]
    DuplicateField {
        /// The repeated field key.
        field: String,
    },

    /// Returned when a segment is not a `KEY=VALUE` pair.
    #[error("malformed field: {part:?}")]
    MalformedField {
        /// The segment that could not be split.
        part: String,
    },

    /// Returned when an `UNTIL` value is not a representable epoch-millisecond
    /// timestamp.
    #[error("invalid UNTIL timestamp: {value:?}")]
    InvalidTimestamp {
        /// The value that failed to parse.
        value: String,
    },
}
