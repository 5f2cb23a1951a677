//! Closed-form conversion between Ethiopic date fields and the Unix epoch day.
//!
//! Both calendars are mapped onto a single linear day count (days since
//! 1970-01-01 Gregorian). The Ethiopic side uses the fact that months 1..=12
//! always have 30 days and the leap day falls at the end of month 13, so the
//! year/day-of-year split is a pure division by the 1461-day four-year cycle.

use chrono::{Datelike, NaiveDate};

/// Offset between the Ethiopic day count (days since the Ethiopic epoch,
/// 0008-08-29 Julian) and the Unix epoch day.
pub(crate) const EPOCH_DAY_DIFFERENCE: i64 = 716_367;

/// Days from 0001-01-01 CE to 1970-01-01 in chrono's day count.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Pre-shift applied to negative Ethiopic day counts so the year extraction
/// can use plain (truncating) division: 1461 * 250_000 days = 1_000_000 years.
const NEGATIVE_RANGE_SHIFT_DAYS: i64 = 1461 * 250_000;
const NEGATIVE_RANGE_SHIFT_YEARS: i64 = 1_000_000;

/// Converts Ethiopic `(year, doy0)` fields to a Unix epoch day.
///
/// `doy0` is the 0-based day of year, `(month - 1) * 30 + day - 1`.
pub(crate) fn epoch_day_from_fields(year: i64, doy0: i64) -> i64 {
    (year - 1) * 365 + year.div_euclid(4) + doy0 - EPOCH_DAY_DIFFERENCE
}

/// Converts a Unix epoch day to Ethiopic `(year, month, day)` fields.
///
/// Inverts [`epoch_day_from_fields`] for every `i64` input that yields a
/// year representable as `i64`; the caller range-checks the year.
pub(crate) fn fields_from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
    let mut ethiopic_day = epoch_day + EPOCH_DAY_DIFFERENCE;
    let mut adjustment = 0;
    if ethiopic_day < 0 {
        ethiopic_day += NEGATIVE_RANGE_SHIFT_DAYS;
        adjustment = -NEGATIVE_RANGE_SHIFT_YEARS;
    }
    let year = (ethiopic_day * 4 + 1463) / 1461;
    let start_of_year = (year - 1) * 365 + year / 4;
    let doy0 = ethiopic_day - start_of_year;
    let month = (doy0 / 30 + 1) as u8;
    let day = (doy0 % 30 + 1) as u8;
    (year + adjustment, month, day)
}

/// Converts a Gregorian date to a Unix epoch day.
pub(crate) fn epoch_day_from_gregorian(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
}

/// Converts a Unix epoch day to a Gregorian date.
///
/// Returns `None` when the epoch day is outside chrono's representable range.
pub(crate) fn gregorian_from_epoch_day(epoch_day: i64) -> Option<NaiveDate> {
    let days_from_ce = i32::try_from(epoch_day + UNIX_EPOCH_DAYS_FROM_CE).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days_from_ce)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_is_tahsas_23_1962() {
        assert_eq!(fields_from_epoch_day(0), (1962, 4, 23));
        assert_eq!(epoch_day_from_fields(1962, 3 * 30 + 22), 0);
    }

    #[test]
    fn new_year_2016() {
        // 2016-01-01 EC == 2023-09-12 Gregorian.
        let ed = epoch_day_from_fields(2016, 0);
        assert_eq!(
            gregorian_from_epoch_day(ed),
            NaiveDate::from_ymd_opt(2023, 9, 12)
        );
        assert_eq!(fields_from_epoch_day(ed), (2016, 1, 1));
    }

    #[test]
    fn leap_pagume_2015() {
        // 2015 is a leap year (2015 % 4 == 3): Pagume 6 exists and is the
        // day before the 2016 new year.
        let pagume6 = epoch_day_from_fields(2015, 12 * 30 + 5);
        let new_year = epoch_day_from_fields(2016, 0);
        assert_eq!(new_year - pagume6, 1);
        assert_eq!(
            gregorian_from_epoch_day(pagume6),
            NaiveDate::from_ymd_opt(2023, 9, 11)
        );
    }

    #[test]
    fn gregorian_epoch_day_anchor() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(epoch_day_from_gregorian(epoch), 0);
        assert_eq!(gregorian_from_epoch_day(0), Some(epoch));
    }

    #[test]
    fn fields_roundtrip_contiguous_range() {
        // Eight consecutive years cover two full leap cycles.
        let start = epoch_day_from_fields(2012, 0);
        let end = epoch_day_from_fields(2020, 0);
        for ed in start..end {
            let (y, m, d) = fields_from_epoch_day(ed);
            let doy0 = i64::from(m - 1) * 30 + i64::from(d - 1);
            assert_eq!(epoch_day_from_fields(y, doy0), ed, "epoch day {ed}");
        }
    }

    #[test]
    fn fields_roundtrip_negative_epoch_days() {
        for ed in [-1, -365, -1461, -716_367, -716_368, -1_000_000] {
            let (y, m, d) = fields_from_epoch_day(ed);
            let doy0 = i64::from(m - 1) * 30 + i64::from(d - 1);
            assert_eq!(epoch_day_from_fields(y, doy0), ed, "epoch day {ed}");
        }
    }

    #[test]
    fn ethiopic_epoch_is_year_one() {
        assert_eq!(fields_from_epoch_day(-EPOCH_DAY_DIFFERENCE), (1, 1, 1));
    }
}
