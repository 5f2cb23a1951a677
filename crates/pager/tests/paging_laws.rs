use awde_ethiopic::EthiopicDate;
use awde_pager::{CalendarKind, GridOptions, MonthPager, MONTHS_BEFORE, TOTAL_PAGES};

fn eth(y: i32, m: u8, d: u8) -> EthiopicDate {
    EthiopicDate::new(y, m, d).unwrap()
}

#[test]
fn round_trip_law_for_every_page() {
    // pageForDate(dateForPage(p)) == p across the whole range, for pagers
    // anchored on several different todays.
    let todays = [
        eth(2016, 5, 6),
        eth(2015, 13, 6),
        eth(2016, 1, 1),
        eth(2000, 7, 15),
    ];
    for today in todays {
        let pager = MonthPager::new(today);
        for page in 0..TOTAL_PAGES {
            let date = pager.date_for_page(page).unwrap();
            assert_eq!(
                pager.page_for_date(date).unwrap(),
                page,
                "today {today}, page {page}"
            );
        }
    }
}

#[test]
fn plus_one_minus_one_is_identity() {
    let pager = MonthPager::new(eth(2016, 5, 6));
    for page in 1..TOTAL_PAGES - 1 {
        let forward = pager.date_for_page(page + 1).unwrap();
        let back = pager.page_for_date(forward).unwrap() - 1;
        assert_eq!(back, page);
    }
}

#[test]
fn navigation_crosses_year_boundaries_by_single_months() {
    // Anchor inside Pagume so the +-1 navigation immediately wraps years.
    let pager = MonthPager::new(eth(2015, 13, 3));
    let here = pager.date_for_page(MONTHS_BEFORE).unwrap();
    assert_eq!((here.year(), here.month()), (2015, 13));

    let next = pager.date_for_page(MONTHS_BEFORE + 1).unwrap();
    assert_eq!((next.year(), next.month()), (2016, 1));

    let previous = pager.date_for_page(MONTHS_BEFORE - 1).unwrap();
    assert_eq!((previous.year(), previous.month()), (2015, 12));
}

#[test]
fn full_page_sweep_produces_well_formed_grids() {
    let pager = MonthPager::new(eth(2016, 5, 6));
    let catalog = awde_holidays::default_catalog();
    for page in (0..TOTAL_PAGES).step_by(13) {
        let data = pager
            .month_page(
                page,
                &GridOptions::default(),
                &catalog,
                Default::default(),
                &[],
            )
            .unwrap();
        // Complete weeks, all seven-wide, covering the whole month.
        assert!(data.ethiopic_grid.len() >= 4 && data.ethiopic_grid.len() <= 6);
        let in_month = data
            .ethiopic_grid
            .iter()
            .flatten()
            .filter(|c| c.is_current_month)
            .count();
        assert_eq!(in_month as u8, data.month.month_length(), "page {page}");
    }
}

#[test]
fn today_is_marked_on_exactly_one_cell_of_its_page() {
    let today = eth(2016, 5, 6);
    let pager = MonthPager::new(today);
    let data = pager
        .month_page(
            pager.today_page(CalendarKind::Ethiopic),
            &GridOptions::default(),
            &awde_holidays::default_catalog(),
            Default::default(),
            &[],
        )
        .unwrap();
    let marked: Vec<_> = data
        .ethiopic_grid
        .iter()
        .flatten()
        .filter(|c| c.is_today)
        .collect();
    assert_eq!(marked.len(), 1);
    assert_eq!(marked[0].date, Some(today));
}
