//! Bijection between page indices and Ethiopian months.

use awde_ethiopic::EthiopicDate;
use chrono::Datelike;

use crate::error::PagerError;
use crate::grid::CalendarKind;

/// Navigable months before the reference month.
pub const MONTHS_BEFORE: usize = 60;

/// Navigable months after the reference month.
pub const MONTHS_AFTER: usize = 60;

/// Total page count of the virtualized pager.
pub const TOTAL_PAGES: usize = MONTHS_BEFORE + 1 + MONTHS_AFTER;

/// Index into the fixed page range `[0, TOTAL_PAGES)`.
pub type PageIndex = usize;

/// Maps page indices to Ethiopian months and back.
///
/// The pager is anchored on an injected "today": page [`MONTHS_BEFORE`] is
/// today's Ethiopian month, and moving one page moves exactly one month,
/// wrapping the year at the 13/1 boundary. The mapping is a strictly
/// monotonic bijection over the page range; indices outside it are
/// rejected, never wrapped.
#[derive(Debug, Clone, Copy)]
pub struct MonthPager {
    today: EthiopicDate,
    reference_month: i64,
}

impl MonthPager {
    /// Creates a pager anchored on the given current date.
    pub fn new(today: EthiopicDate) -> Self {
        Self {
            today,
            reference_month: today.proleptic_month(),
        }
    }

    /// Returns the injected current date.
    pub fn today(&self) -> EthiopicDate {
        self.today
    }

    /// Returns the first day of the month shown on `page`.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::PageOutOfRange`] outside `[0, TOTAL_PAGES)`.
    pub fn date_for_page(&self, page: PageIndex) -> Result<EthiopicDate, PagerError> {
        if page >= TOTAL_PAGES {
            return Err(PagerError::PageOutOfRange {
                page: page as i64,
                total: TOTAL_PAGES,
            });
        }
        let target = self.reference_month - MONTHS_BEFORE as i64 + page as i64;
        let year = i32::try_from(target.div_euclid(13)).expect("pager range stays in-range");
        let month = (target.rem_euclid(13) + 1) as u8;
        EthiopicDate::new(year, month, 1).map_err(PagerError::from)
    }

    /// Returns the page showing the month that contains `date`.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::PageOutOfRange`] when the month lies outside
    /// the navigable range; the error carries the index it would have had.
    pub fn page_for_date(&self, date: EthiopicDate) -> Result<PageIndex, PagerError> {
        let offset = date.proleptic_month() - self.reference_month;
        let page = MONTHS_BEFORE as i64 + offset;
        if !(0..TOTAL_PAGES as i64).contains(&page) {
            return Err(PagerError::PageOutOfRange {
                page,
                total: TOTAL_PAGES,
            });
        }
        Ok(page as PageIndex)
    }

    /// Returns the page to open the pager on.
    pub fn initial_page(&self, primary: CalendarKind) -> PageIndex {
        self.today_page(primary)
    }

    /// Returns the page whose displayed month contains today.
    ///
    /// For an Ethiopian-primary view this is the reference page. For a
    /// Gregorian-primary view the displayed Gregorian month of a page is
    /// offset from its Ethiopian month, so the pages around the reference
    /// are searched for the one displaying today's Gregorian month.
    pub fn today_page(&self, primary: CalendarKind) -> PageIndex {
        match primary {
            CalendarKind::Ethiopic => MONTHS_BEFORE,
            CalendarKind::Gregorian => {
                let today = self.today.to_gregorian();
                for offset in -2i64..=2 {
                    let page = (MONTHS_BEFORE as i64 + offset) as PageIndex;
                    if let Ok((year, month)) = self.display_gregorian_month(page) {
                        if (year, month) == (today.year(), today.month()) {
                            return page;
                        }
                    }
                }
                MONTHS_BEFORE
            }
        }
    }

    /// Returns the Gregorian `(year, month)` a page displays when the
    /// primary calendar is Gregorian: the month containing the *last* day
    /// of the page's Ethiopian month.
    pub fn display_gregorian_month(&self, page: PageIndex) -> Result<(i32, u32), PagerError> {
        let last = self.date_for_page(page)?.last_of_month().to_gregorian();
        Ok((last.year(), last.month()))
    }
}
