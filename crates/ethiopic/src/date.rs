//! Proleptic Ethiopian calendar date with validated fields.

use chrono::{NaiveDate, Weekday};

use crate::epoch;
use crate::error::EthiopicError;

/// Number of months in the Ethiopian year, including Pagume.
pub const MONTHS_PER_YEAR: u8 = 13;

/// The short thirteenth month (5 days, 6 in a leap year).
pub const PAGUME: u8 = 13;

/// Smallest supported proleptic year.
///
/// The window is chosen so that every valid [`EthiopicDate`] has a Gregorian
/// equivalent representable by [`chrono::NaiveDate`], in both directions.
pub const MIN_YEAR: i32 = -260_000;

/// Largest supported proleptic year.
pub const MAX_YEAR: i32 = 260_000;

/// Offset such that `epoch_day + 3` is congruent to the Monday-first weekday
/// index mod 7 (1970-01-01 was a Thursday).
const WEEKDAY_EPOCH_SHIFT: i64 = 3;

/// A date in the proleptic Ethiopian calendar.
///
/// Months 1..=12 always have 30 days; month 13 (Pagume) has 5 days, or 6 in
/// a leap year. The total order of dates matches the order of their
/// Gregorian equivalents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EthiopicDate {
    year: i32,
    month: u8,
    day: u8,
}

/// Returns `true` when the Ethiopian year has a 6-day Pagume.
///
/// The Ethiopic leap cycle is a plain four-year cycle aligned so that every
/// year congruent to 3 mod 4 is a leap year. No century correction exists.
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

/// Returns the number of days in the given month of the given year.
///
/// # Errors
///
/// Returns [`EthiopicError::InvalidMonth`] if `month` is not in 1..=13.
pub fn month_length(year: i32, month: u8) -> Result<u8, EthiopicError> {
    if !(1..=MONTHS_PER_YEAR).contains(&month) {
        return Err(EthiopicError::InvalidMonth { month });
    }
    if month == PAGUME {
        Ok(if is_leap_year(year) { 6 } else { 5 })
    } else {
        Ok(30)
    }
}

/// Returns the number of days in the given year (365 or 366).
pub fn year_length(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

impl EthiopicDate {
    /// Creates a new `EthiopicDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`EthiopicError::InvalidMonth`] if the month is outside
    /// 1..=13, [`EthiopicError::InvalidDate`] if the day is invalid for the
    /// month (respecting the Pagume 5-vs-6 boundary), and
    /// [`EthiopicError::YearOutOfRange`] outside the supported window.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, EthiopicError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(EthiopicError::YearOutOfRange {
                year: i64::from(year),
            });
        }
        let max_day = month_length(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(EthiopicError::InvalidDate {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates an `EthiopicDate` from a Unix epoch day.
    ///
    /// # Errors
    ///
    /// Returns [`EthiopicError::EpochDayOutOfRange`] when the day count maps
    /// outside the supported year window.
    pub fn from_epoch_day(epoch_day: i64) -> Result<Self, EthiopicError> {
        // Coarse guard so the field extraction cannot overflow; the exact
        // year-window check happens after extraction. The slack covers the
        // offset between the Unix and Ethiopic epochs.
        if epoch_day.unsigned_abs() > (MAX_YEAR as u64 + 2) * 366 + 1_000_000 {
            return Err(EthiopicError::EpochDayOutOfRange { epoch_day });
        }
        let (year, month, day) = epoch::fields_from_epoch_day(epoch_day);
        let year = i32::try_from(year)
            .ok()
            .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
            .ok_or(EthiopicError::EpochDayOutOfRange { epoch_day })?;
        Ok(Self { year, month, day })
    }

    /// Creates the `EthiopicDate` falling on the same day as a Gregorian date.
    ///
    /// Total for every `NaiveDate` whose equivalent lands inside the
    /// supported year window, which covers all of chrono's range except the
    /// outermost few years.
    ///
    /// # Errors
    ///
    /// Returns [`EthiopicError::EpochDayOutOfRange`] at those extremes.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, EthiopicError> {
        Self::from_epoch_day(epoch::epoch_day_from_gregorian(date))
    }

    /// Returns the Gregorian date falling on the same day as this date.
    pub fn to_gregorian(self) -> NaiveDate {
        // The year window guarantees the epoch day is representable.
        epoch::gregorian_from_epoch_day(self.to_epoch_day())
            .expect("supported year window maps inside chrono's range")
    }

    /// Returns the Unix epoch day of this date.
    pub fn to_epoch_day(self) -> i64 {
        epoch::epoch_day_from_fields(i64::from(self.year), i64::from(self.day_of_year0()))
    }

    /// Returns the proleptic year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=13).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=30, 1..=5 or 1..=6 for Pagume).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the 1-based day of year (1..=366).
    pub fn day_of_year(self) -> u16 {
        self.day_of_year0() + 1
    }

    fn day_of_year0(self) -> u16 {
        u16::from(self.month - 1) * 30 + u16::from(self.day - 1)
    }

    /// Returns `true` when this date's year has a 6-day Pagume.
    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.year)
    }

    /// Returns the number of days in this date's month.
    pub fn month_length(self) -> u8 {
        month_length(self.year, self.month).expect("constructed month is valid")
    }

    /// Returns the weekday of this date.
    ///
    /// Derived from the linear day count mod 7 with a fixed anchor, so it
    /// always agrees with the Gregorian weekday of the same day.
    pub fn weekday(self) -> Weekday {
        match (self.to_epoch_day() + WEEKDAY_EPOCH_SHIFT).rem_euclid(7) {
            0 => Weekday::Mon,
            1 => Weekday::Tue,
            2 => Weekday::Wed,
            3 => Weekday::Thu,
            4 => Weekday::Fri,
            5 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    /// Returns the first day of this date's month.
    pub fn first_of_month(self) -> Self {
        Self {
            day: 1,
            ..self
        }
    }

    /// Returns the last day of this date's month.
    pub fn last_of_month(self) -> Self {
        Self {
            day: self.month_length(),
            ..self
        }
    }

    /// Returns the date `n` days after this one (before, for negative `n`).
    ///
    /// Day arithmetic goes through the linear day count and therefore never
    /// needs clamping.
    ///
    /// # Errors
    ///
    /// Returns [`EthiopicError::EpochDayOutOfRange`] when the result leaves
    /// the supported window.
    pub fn add_days(self, n: i64) -> Result<Self, EthiopicError> {
        Self::from_epoch_day(self.to_epoch_day() + n)
    }

    /// Returns the date `n` months after this one, wrapping the year at the
    /// 13/1 boundary.
    ///
    /// The day is clamped to the destination month's length, so adding one
    /// month to Meskerem 30 lands on the last day of a short Pagume when it
    /// must.
    ///
    /// # Errors
    ///
    /// Returns [`EthiopicError::YearOutOfRange`] when the result leaves the
    /// supported window.
    pub fn add_months(self, n: i64) -> Result<Self, EthiopicError> {
        let target = self.proleptic_month() + n;
        let year = target.div_euclid(13);
        let month = (target.rem_euclid(13) + 1) as u8;
        let year = i32::try_from(year)
            .ok()
            .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
            .ok_or(EthiopicError::YearOutOfRange { year })?;
        Ok(Self::resolve_previous_valid(year, month, self.day))
    }

    /// Returns the date `n` years after this one, day clamped as for
    /// [`Self::add_months`].
    ///
    /// # Errors
    ///
    /// Returns [`EthiopicError::YearOutOfRange`] when the result leaves the
    /// supported window.
    pub fn add_years(self, n: i64) -> Result<Self, EthiopicError> {
        let year = i64::from(self.year) + n;
        let year = i32::try_from(year)
            .ok()
            .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
            .ok_or(EthiopicError::YearOutOfRange { year })?;
        Ok(Self::resolve_previous_valid(year, self.month, self.day))
    }

    /// Returns the signed number of days from `self` to `other`.
    pub fn days_until(self, other: Self) -> i64 {
        other.to_epoch_day() - self.to_epoch_day()
    }

    /// Returns the 0-based month count since year 0, Meskerem.
    ///
    /// Used for month arithmetic and month-page indexing.
    pub fn proleptic_month(self) -> i64 {
        i64::from(self.year) * 13 + i64::from(self.month) - 1
    }

    /// Builds a date from fields, pulling an overflowing Pagume day back to
    /// the last valid day of the month.
    fn resolve_previous_valid(year: i32, month: u8, day: u8) -> Self {
        let max_day = month_length(year, month).expect("month in 1..=13");
        Self {
            year,
            month,
            day: day.min(max_day),
        }
    }
}

impl std::fmt::Display for EthiopicDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
