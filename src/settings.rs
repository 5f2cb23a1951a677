//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{bail, Result};

use awde_holidays::{Holiday, HolidayClassFilter, HolidayKind, HolidayRule};
use awde_pager::{AdjacentDayPolicy, CalendarKind, GridOptions};

use crate::config::{AwdeConfig, SuppliedHolidayToml};

/// Parses a primary-calendar name string into the corresponding enum variant.
pub fn parse_calendar_kind(s: &str) -> Result<CalendarKind> {
    match s.to_lowercase().as_str() {
        "ethiopic" | "ethiopian" => Ok(CalendarKind::Ethiopic),
        "gregorian" => Ok(CalendarKind::Gregorian),
        other => bail!("unknown primary calendar: {other:?}"),
    }
}

/// Parses an adjacent-day policy name string into the corresponding enum
/// variant.
pub fn parse_adjacent_policy(s: &str) -> Result<AdjacentDayPolicy> {
    match s.to_lowercase().as_str() {
        "show" => Ok(AdjacentDayPolicy::Show),
        "blank" => Ok(AdjacentDayPolicy::Blank),
        other => bail!("unknown adjacent-day policy: {other:?}"),
    }
}

/// Parses a holiday kind name string into the corresponding enum variant.
pub fn parse_holiday_kind(s: &str) -> Result<HolidayKind> {
    match s.to_lowercase().as_str() {
        "national-day-off" => Ok(HolidayKind::NationalDayOff),
        "orthodox-day-off" => Ok(HolidayKind::OrthodoxDayOff),
        "orthodox-working" => Ok(HolidayKind::OrthodoxWorking),
        "muslim-day-off" => Ok(HolidayKind::MuslimDayOff),
        "muslim-working" => Ok(HolidayKind::MuslimWorking),
        "cultural" => Ok(HolidayKind::Cultural),
        other => bail!("unknown holiday kind: {other:?}"),
    }
}

/// Builds grid options from the configuration.
pub fn grid_options(config: &AwdeConfig) -> Result<GridOptions> {
    Ok(GridOptions {
        primary: parse_calendar_kind(&config.calendar.primary)?,
        show_dual_numbers: config.calendar.dual_numbers,
        adjacent_days: parse_adjacent_policy(&config.calendar.adjacent_days)?,
    })
}

/// Builds the holiday class filter from the configuration.
pub fn class_filter(config: &AwdeConfig) -> HolidayClassFilter {
    HolidayClassFilter {
        all_day_off: config.holidays.all_day_off,
        working_orthodox: config.holidays.working_orthodox,
        working_muslim: config.holidays.working_muslim,
    }
}

/// Builds the holiday catalog: the built-in entries plus the externally
/// supplied per-year dates from the configuration.
pub fn holiday_catalog(config: &AwdeConfig) -> Result<Vec<Holiday>> {
    let mut catalog = awde_holidays::default_catalog();
    for entry in &config.holidays.supplied {
        catalog.push(supplied_holiday(entry)?);
    }
    Ok(catalog)
}

fn supplied_holiday(entry: &SuppliedHolidayToml) -> Result<Holiday> {
    Ok(Holiday::new(
        entry.id.clone(),
        entry.title.clone(),
        parse_holiday_kind(&entry.kind)?,
        HolidayRule::Dated {
            year: entry.year,
            month: entry.month,
            day: entry.day,
        },
    ))
}
