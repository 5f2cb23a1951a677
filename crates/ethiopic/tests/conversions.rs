use awde_ethiopic::{is_leap_year, EthiopicDate, EthiopicError};
use chrono::{Datelike, NaiveDate, Weekday};

#[test]
fn roundtrip_ethiopic_to_gregorian_decade() {
    // Every day of a full leap cycle plus change.
    let mut d = EthiopicDate::new(2011, 1, 1).unwrap();
    let end = EthiopicDate::new(2021, 1, 1).unwrap();
    while d < end {
        let g = d.to_gregorian();
        let back = EthiopicDate::from_gregorian(g).unwrap();
        assert_eq!(back, d, "roundtrip failed for {d} -> {g}");
        d = d.add_days(1).unwrap();
    }
}

#[test]
fn roundtrip_gregorian_to_ethiopic_decade() {
    let mut g = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2028, 1, 1).unwrap();
    while g < end {
        let e = EthiopicDate::from_gregorian(g).unwrap();
        assert_eq!(e.to_gregorian(), g, "roundtrip failed for {g} -> {e}");
        g = g.succ_opt().unwrap();
    }
}

#[test]
fn known_anchor_dates() {
    let cases: &[((i32, u8, u8), (i32, u32, u32))] = &[
        ((2016, 1, 1), (2023, 9, 12)),  // Enkutatash after a leap year
        ((2017, 1, 1), (2024, 9, 11)),  // Enkutatash in an ordinary year
        ((2015, 13, 6), (2023, 9, 11)), // leap-year Pagume 6
        ((2016, 4, 28), (2024, 1, 7)),  // Genna
        ((2016, 5, 11), (2024, 1, 20)), // Timket
        ((1962, 4, 23), (1970, 1, 1)),  // Unix epoch
        ((1, 1, 1), (8, 8, 27)),        // proleptic year one
    ];
    for &((ey, em, ed), (gy, gm, gd)) in cases {
        let e = EthiopicDate::new(ey, em, ed).unwrap();
        let g = NaiveDate::from_ymd_opt(gy, gm, gd).unwrap();
        assert_eq!(e.to_gregorian(), g, "ethiopic {e}");
        assert_eq!(EthiopicDate::from_gregorian(g).unwrap(), e, "gregorian {g}");
    }
}

#[test]
fn weekday_matches_gregorian_across_year_boundary() {
    // Walk from mid-Pagume 2015 into Meskerem 2016; the weekday sequence
    // must stay in lockstep with the Gregorian one.
    let mut d = EthiopicDate::new(2015, 13, 1).unwrap();
    for _ in 0..40 {
        assert_eq!(d.weekday(), d.to_gregorian().weekday(), "{d}");
        d = d.add_days(1).unwrap();
    }
}

#[test]
fn new_year_weekday_anchor() {
    // 2023-09-12 was a Tuesday.
    assert_eq!(
        EthiopicDate::new(2016, 1, 1).unwrap().weekday(),
        Weekday::Tue
    );
}

#[test]
fn pagume_six_only_in_leap_years() {
    for year in 1990..2030 {
        let result = EthiopicDate::new(year, 13, 6);
        if is_leap_year(year) {
            assert!(result.is_ok(), "year {year} is leap, Pagume 6 must exist");
        } else {
            assert!(
                matches!(result, Err(EthiopicError::InvalidDate { max_day: 5, .. })),
                "year {year} is not leap, Pagume 6 must be rejected"
            );
        }
    }
}

#[test]
fn epoch_day_roundtrip_sparse_millennia() {
    for epoch_day in (-800_000..800_000).step_by(373) {
        let d = EthiopicDate::from_epoch_day(epoch_day).unwrap();
        assert_eq!(d.to_epoch_day(), epoch_day, "epoch day {epoch_day} -> {d}");
    }
}

#[test]
fn gregorian_leap_day_converts_cleanly() {
    let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let e = EthiopicDate::from_gregorian(leap_day).unwrap();
    assert_eq!(e, EthiopicDate::new(2016, 6, 21).unwrap());
    assert_eq!(e.to_gregorian(), leap_day);
}
