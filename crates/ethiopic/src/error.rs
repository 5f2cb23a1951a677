//! Error types for the awde-ethiopic crate.

/// Error type for all fallible operations in the awde-ethiopic crate.
///
/// This enum covers validation failures for month numbers, day-within-month
/// values (including the 5-vs-6-day Pagume boundary), and the supported
/// year/epoch-day conversion range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EthiopicError {
    /// Returned when a month number is outside the valid range 1..=13.
    #[error("invalid month: {month} (must be 1..=13)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number is invalid for the given year and month.
    #[error("invalid date: {year:04}-{month:02}-{day:02} (day must be 1..={max_day})")]
    InvalidDate {
        /// The year for which the day is invalid.
        year: i32,
        /// The month for which the day is invalid.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The maximum valid day for the given year and month.
        max_day: u8,
    },

    /// Returned when a year is outside the supported conversion range.
    #[error("year out of range: {year} (must be {min}..={max})", min = crate::date::MIN_YEAR, max = crate::date::MAX_YEAR)]
    YearOutOfRange {
        /// The out-of-range year that was provided.
        year: i64,
    },

    /// Returned when an epoch day maps outside the supported year range.
    #[error("epoch day out of range: {epoch_day}")]
    EpochDayOutOfRange {
        /// The out-of-range epoch day that was provided.
        epoch_day: i64,
    },
}
