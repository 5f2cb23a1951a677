//! Assembled per-page month data for the presentation layer.

use awde_agenda::EventInstance;
use awde_ethiopic::EthiopicDate;
use awde_holidays::{
    filter_occurrences, occurrences_for_year, Holiday, HolidayClassFilter, HolidayOccurrence,
};
use chrono::Datelike;
use tracing::debug;

use crate::error::PagerError;
use crate::grid::{ethiopic_month_grid, gregorian_month_grid, CalendarKind, GridOptions, MonthGrid};
use crate::paging::{MonthPager, PageIndex};

/// Everything the presentation layer needs to render one month page.
#[derive(Debug, Clone)]
pub struct MonthPageData {
    /// The page this data belongs to.
    pub page: PageIndex,
    /// First day of the page's Ethiopian month.
    pub month: EthiopicDate,
    /// The Gregorian `(year, month)` shown when the primary calendar is
    /// Gregorian; absent otherwise.
    pub gregorian_month: Option<(i32, u32)>,
    /// Grid oriented on the Ethiopian month boundary.
    pub ethiopic_grid: MonthGrid,
    /// Grid oriented on the Gregorian display month.
    pub gregorian_grid: MonthGrid,
    /// Holiday occurrences within the display month, class-filtered and
    /// date-sorted.
    pub holidays: Vec<HolidayOccurrence>,
    /// Event instances whose day falls within the display month.
    pub events: Vec<EventInstance>,
}

impl MonthPager {
    /// Assembles the full data for one page: both grid orientations,
    /// holiday occurrences, and the events of the display month.
    ///
    /// Holidays are resolved for every Ethiopian year the grids touch,
    /// class-filtered, then narrowed to the display month: Ethiopian
    /// year/month equality normally, or the Gregorian first/last-day range
    /// when the primary calendar is Gregorian. Events are narrowed by the
    /// same criterion.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::PageOutOfRange`] for an invalid page.
    pub fn month_page(
        &self,
        page: PageIndex,
        options: &GridOptions,
        catalog: &[Holiday],
        class_filter: HolidayClassFilter,
        events: &[EventInstance],
    ) -> Result<MonthPageData, PagerError> {
        let month = self.date_for_page(page)?;

        // The two grids can spill into the neighbouring Ethiopian years.
        let mut occurrences = Vec::new();
        for year in grid_years(month)? {
            occurrences.extend(occurrences_for_year(year, catalog));
        }
        let occurrences = filter_occurrences(&occurrences, class_filter);

        let ethiopic_grid = ethiopic_month_grid(month, self.today(), options, &occurrences, events)?;
        let gregorian_grid =
            gregorian_month_grid(month, self.today(), options, &occurrences, events)?;

        let gregorian_month = match options.primary {
            CalendarKind::Gregorian => Some(self.display_gregorian_month(page)?),
            CalendarKind::Ethiopic => None,
        };

        let in_display_month = |date: EthiopicDate| -> bool {
            match gregorian_month {
                Some((year, month_number)) => {
                    let g = date.to_gregorian();
                    (g.year(), g.month()) == (year, month_number)
                }
                None => (date.year(), date.month()) == (month.year(), month.month()),
            }
        };

        let holidays: Vec<HolidayOccurrence> = occurrences
            .into_iter()
            .filter(|occurrence| in_display_month(occurrence.date))
            .collect();
        let events: Vec<EventInstance> = events
            .iter()
            .filter(|instance| in_display_month(instance.anchor))
            .cloned()
            .collect();

        debug!(
            page,
            month = %month,
            holidays = holidays.len(),
            events = events.len(),
            "assembled month page"
        );
        Ok(MonthPageData {
            page,
            month,
            gregorian_month,
            ethiopic_grid,
            gregorian_grid,
            holidays,
            events,
        })
    }
}

/// Returns the Ethiopian years the grids of `month` can touch.
fn grid_years(month: EthiopicDate) -> Result<Vec<i32>, PagerError> {
    // A week of slack on both sides covers leading/trailing grid cells and
    // the Gregorian display-month offset.
    let earliest = month.first_of_month().add_days(-7)?;
    let latest = month.last_of_month().add_days(42)?;
    Ok((earliest.year()..=latest.year()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use awde_agenda::{expand, EventDefinition};
    use awde_holidays::default_catalog;
    use chrono::{FixedOffset, TimeZone};

    fn eth(y: i32, m: u8, d: u8) -> EthiopicDate {
        EthiopicDate::new(y, m, d).unwrap()
    }

    fn pager() -> MonthPager {
        MonthPager::new(eth(2016, 5, 6))
    }

    fn sample_events() -> Vec<EventInstance> {
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        // Tir 13, 2016 == 2024-01-22.
        let event = EventDefinition::new(
            "meeting",
            "Meeting",
            offset.with_ymd_and_hms(2024, 1, 22, 10, 0, 0).unwrap(),
        );
        expand(&event, None, None)
    }

    #[test]
    fn reference_page_data() {
        let data = pager()
            .month_page(
                60,
                &GridOptions::default(),
                &default_catalog(),
                HolidayClassFilter::default(),
                &sample_events(),
            )
            .unwrap();

        assert_eq!(data.month, eth(2016, 5, 1));
        assert!(data.gregorian_month.is_none());
        assert!(!data.ethiopic_grid.is_empty());
        assert!(!data.gregorian_grid.is_empty());

        // Timket (Tir 11) is the month's holiday in 2016.
        assert!(data.holidays.iter().any(|h| h.id == "timket"));
        assert!(data.holidays.iter().all(|h| h.date.month() == 5));

        assert_eq!(data.events.len(), 1);
        assert_eq!(data.events[0].anchor, eth(2016, 5, 13));

        let cell = data
            .ethiopic_grid
            .iter()
            .flatten()
            .find(|c| c.date == Some(eth(2016, 5, 13)))
            .unwrap();
        assert!(cell.has_events);
    }

    #[test]
    fn gregorian_primary_narrows_by_gregorian_month() {
        let options = GridOptions {
            primary: CalendarKind::Gregorian,
            ..Default::default()
        };
        let data = pager()
            .month_page(
                60,
                &options,
                &default_catalog(),
                HolidayClassFilter::default(),
                &[],
            )
            .unwrap();

        // Tir 2016 ends in February 2024.
        assert_eq!(data.gregorian_month, Some((2024, 2)));
        for holiday in &data.holidays {
            let g = holiday.date.to_gregorian();
            assert_eq!((g.year(), g.month()), (2024, 2), "{}", holiday.id);
        }
    }

    #[test]
    fn class_filter_reaches_the_page_data() {
        let day_off_only = HolidayClassFilter {
            all_day_off: true,
            working_orthodox: false,
            working_muslim: false,
        };
        // Page of Yekatit 2016, the Nineveh month.
        let page = 61;
        let all = pager()
            .month_page(
                page,
                &GridOptions::default(),
                &default_catalog(),
                HolidayClassFilter::default(),
                &[],
            )
            .unwrap();
        assert!(all.holidays.iter().any(|h| h.id == "nineveh"));

        let filtered = pager()
            .month_page(
                page,
                &GridOptions::default(),
                &default_catalog(),
                day_off_only,
                &[],
            )
            .unwrap();
        assert!(!filtered.holidays.iter().any(|h| h.id == "nineveh"));
    }

    #[test]
    fn out_of_range_page_propagates() {
        let err = pager()
            .month_page(
                crate::paging::TOTAL_PAGES,
                &GridOptions::default(),
                &default_catalog(),
                HolidayClassFilter::default(),
                &[],
            )
            .unwrap_err();
        assert!(matches!(err, PagerError::PageOutOfRange { .. }));
    }
}
