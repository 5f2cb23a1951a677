//! Calendar grid generation: complete Monday-first weeks of annotated cells.

use awde_agenda::EventInstance;
use awde_ethiopic::EthiopicDate;
use awde_holidays::HolidayOccurrence;
use chrono::{Datelike, NaiveDate};

use crate::error::PagerError;

/// Which calendar's month boundary defines the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarKind {
    /// The grid covers an Ethiopian month.
    #[default]
    Ethiopic,
    /// The grid covers a Gregorian month.
    Gregorian,
}

/// What to show in the leading/trailing slots outside the display month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdjacentDayPolicy {
    /// Show the adjacent month's days, flagged as outside the month.
    #[default]
    Show,
    /// Leave the slots empty.
    Blank,
}

/// Grid generation options.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridOptions {
    /// Which calendar's month boundary defines "current month".
    pub primary: CalendarKind,
    /// Whether to annotate each cell with the other calendar's day number.
    pub show_dual_numbers: bool,
    /// Policy for slots outside the display month.
    pub adjacent_days: AdjacentDayPolicy,
}

/// One slot of the calendar grid.
///
/// A blank slot (adjacent-day policy [`AdjacentDayPolicy::Blank`]) carries
/// no date and no annotations. `secondary_day` is populated only when dual
/// numbers are requested, so "not shown" is distinguishable from any real
/// day number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalendarCell {
    /// The Ethiopian date of this slot, absent for blanks.
    pub date: Option<EthiopicDate>,
    /// The Gregorian date of the same day, absent for blanks.
    pub gregorian: Option<NaiveDate>,
    /// Whether the slot belongs to the display month of the primary
    /// calendar.
    pub is_current_month: bool,
    /// Whether the slot is the injected "today".
    pub is_today: bool,
    /// Day number in the primary calendar.
    pub primary_day: Option<u8>,
    /// Day number in the secondary calendar, when dual numbers are shown.
    pub secondary_day: Option<u8>,
    /// Holidays falling on this day.
    pub holidays: Vec<HolidayOccurrence>,
    /// Whether any event instance falls on this day.
    pub has_events: bool,
}

/// A month grid: complete weeks of seven cells, Monday first.
pub type MonthGrid = Vec<[CalendarCell; 7]>;

/// Builds the grid for the Ethiopian month containing `month`.
///
/// Weeks are complete: leading slots align day 1 to its weekday and
/// trailing slots fill the last week. `is_current_month` is keyed on the
/// Ethiopian month boundary.
pub fn ethiopic_month_grid(
    month: EthiopicDate,
    today: EthiopicDate,
    options: &GridOptions,
    holidays: &[HolidayOccurrence],
    events: &[EventInstance],
) -> Result<MonthGrid, PagerError> {
    let first = month.first_of_month();
    let leading = i64::from(first.weekday().num_days_from_monday());
    let days_in_month = i64::from(month.month_length());
    let total = complete_weeks(leading + days_in_month);

    let mut cells = Vec::with_capacity(total as usize);
    for slot in 0..total {
        let date = first.add_days(slot - leading)?;
        let in_month = slot >= leading && slot < leading + days_in_month;
        cells.push(build_cell(date, in_month, today, options, holidays, events));
    }
    Ok(into_weeks(cells))
}

/// Builds the grid for the Gregorian display month of an Ethiopian month:
/// the Gregorian month containing that month's *last* day.
///
/// Cells are still keyed by Ethiopian date, but `is_current_month` is
/// keyed on the Gregorian month boundary.
pub fn gregorian_month_grid(
    month: EthiopicDate,
    today: EthiopicDate,
    options: &GridOptions,
    holidays: &[HolidayOccurrence],
    events: &[EventInstance],
) -> Result<MonthGrid, PagerError> {
    let anchor = month.last_of_month().to_gregorian();
    let first = anchor.with_day(1).expect("day 1 exists in every month");
    let leading = i64::from(first.weekday().num_days_from_monday());
    let days_in_month = i64::from(gregorian_month_length(first));
    let total = complete_weeks(leading + days_in_month);

    let first_ethiopic = EthiopicDate::from_gregorian(first)?;
    let mut cells = Vec::with_capacity(total as usize);
    for slot in 0..total {
        let date = first_ethiopic.add_days(slot - leading)?;
        let in_month = slot >= leading && slot < leading + days_in_month;
        cells.push(build_cell(date, in_month, today, options, holidays, events));
    }
    Ok(into_weeks(cells))
}

fn build_cell(
    date: EthiopicDate,
    in_month: bool,
    today: EthiopicDate,
    options: &GridOptions,
    holidays: &[HolidayOccurrence],
    events: &[EventInstance],
) -> CalendarCell {
    if !in_month && options.adjacent_days == AdjacentDayPolicy::Blank {
        return CalendarCell::default();
    }

    let gregorian = date.to_gregorian();
    let (primary_day, other_day) = match options.primary {
        CalendarKind::Ethiopic => (date.day(), gregorian.day() as u8),
        CalendarKind::Gregorian => (gregorian.day() as u8, date.day()),
    };

    CalendarCell {
        date: Some(date),
        gregorian: Some(gregorian),
        is_current_month: in_month,
        is_today: date == today,
        primary_day: Some(primary_day),
        secondary_day: options.show_dual_numbers.then_some(other_day),
        holidays: holidays
            .iter()
            .filter(|occurrence| occurrence.date == date)
            .cloned()
            .collect(),
        has_events: events.iter().any(|instance| instance.anchor == date),
    }
}

fn complete_weeks(filled: i64) -> i64 {
    ((filled + 6) / 7) * 7
}

fn into_weeks(cells: Vec<CalendarCell>) -> MonthGrid {
    cells
        .chunks_exact(7)
        .map(|week| {
            <[CalendarCell; 7]>::try_from(week.to_vec()).expect("chunks are exactly one week")
        })
        .collect()
}

fn gregorian_month_length(first: NaiveDate) -> u32 {
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    next_month
        .expect("first of month is always valid")
        .signed_duration_since(first)
        .num_days() as u32
}
