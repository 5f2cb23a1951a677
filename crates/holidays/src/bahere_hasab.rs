//! Bahere Hasab: the traditional Ethiopian computus for movable feasts.
//!
//! The calculation runs metqi -> tewusak -> mebaja hamer -> Nineveh; every
//! other movable feast is a fixed day offset from Nineveh
//! ([`MovableFeast::days_from_nineveh`]).

use awde_ethiopic::EthiopicDate;

use crate::catalog::MovableFeast;

/// Years from creation to the Incarnation era (Amete Alem minus Amete
/// Mihret).
const AMETE_ALEM_OFFSET: i64 = 5500;

/// Length of the lunar month used by the metqi calculation.
const LUNAR_MONTH_DAYS: i64 = 30;

/// Length of the Metonic cycle in years.
const METONIC_CYCLE_YEARS: i64 = 19;

const MONTH_MESKEREM: u8 = 1;
const MONTH_TIKIMT: u8 = 2;
const MONTH_TIR: u8 = 5;
const MONTH_YEKATIT: u8 = 6;

/// Metqi values at or below this fall in Tikimt, above it in Meskerem.
const METQI_TIKIMT_MAX: i64 = 14;

/// Computes the metqi for an Ethiopian year from its position in the
/// Metonic cycle.
pub fn metqi(year: i32) -> u8 {
    let amete_alem = AMETE_ALEM_OFFSET + i64::from(year);
    let medeb = amete_alem.rem_euclid(METONIC_CYCLE_YEARS);
    let wember = (medeb - 1).rem_euclid(METONIC_CYCLE_YEARS);
    let abekte = (wember * 11).rem_euclid(LUNAR_MONTH_DAYS);
    (LUNAR_MONTH_DAYS - abekte) as u8
}

/// Computes the date of the Fast of Nineveh for an Ethiopian year.
pub fn nineveh(year: i32) -> EthiopicDate {
    let metqi = i64::from(metqi(year));
    let metqi_month = if metqi <= METQI_TIKIMT_MAX {
        MONTH_TIKIMT
    } else {
        MONTH_MESKEREM
    };
    let tewusak = tewusak(year, metqi_month, metqi as u8);
    let mebaja_hamer = metqi + tewusak;

    let month = if mebaja_hamer > 30 || metqi_month == MONTH_TIKIMT {
        MONTH_YEKATIT
    } else {
        MONTH_TIR
    };
    let day = match mebaja_hamer.rem_euclid(30) {
        0 => 30,
        d => d,
    } as u8;
    EthiopicDate::new(year, month, day).expect("mebaja hamer day fits a 30-day month")
}

/// Computes the date of any movable feast for an Ethiopian year.
pub fn feast_date(feast: MovableFeast, year: i32) -> EthiopicDate {
    nineveh(year)
        .add_days(feast.days_from_nineveh())
        .expect("feast offsets stay within the supported range")
}

/// Tewusak for the weekday of the Beale Metqi: the day count to the next
/// lunar boundary, read off the traditional weekday table.
fn tewusak(year: i32, month: u8, day: u8) -> i64 {
    let beale_metqi =
        EthiopicDate::new(year, month, day).expect("metqi day fits a 30-day month");
    let weekday = i64::from(beale_metqi.weekday().number_from_monday());
    // Monday 6, Tuesday 5, ..., Friday 2, Saturday 8, Sunday 7.
    match (7 - weekday).rem_euclid(7) {
        t if t <= 1 => t + 7,
        t => t,
    }
}
