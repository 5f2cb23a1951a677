//! Date argument parsing and display names for the CLI.
//!
//! This module is also the single place where ambient wall-clock time is
//! sampled; everything below it takes explicit dates.

use anyhow::{bail, Context, Result};
use awde_ethiopic::EthiopicDate;
use chrono::NaiveDate;

/// Transliterated Ethiopian month names, indexed by month number - 1.
pub const MONTH_NAMES: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miyazya", "Ginbot",
    "Sene", "Hamle", "Nehase", "Pagume",
];

/// Returns the display name of an Ethiopian month.
pub fn month_name(month: u8) -> &'static str {
    MONTH_NAMES
        .get(usize::from(month.saturating_sub(1)))
        .copied()
        .unwrap_or("?")
}

/// Samples the system clock once and converts to the Ethiopian calendar.
pub fn today() -> Result<EthiopicDate> {
    let today = chrono::Local::now().date_naive();
    EthiopicDate::from_gregorian(today).context("converting today's date")
}

/// Parses a `YYYY-MM-DD` Gregorian date argument.
pub fn parse_gregorian(s: &str) -> Result<NaiveDate> {
    s.parse()
        .with_context(|| format!("invalid Gregorian date {s:?} (expected YYYY-MM-DD)"))
}

/// Parses a `YYYY-MM-DD` Ethiopian date argument.
pub fn parse_ethiopic(s: &str) -> Result<EthiopicDate> {
    let mut parts = s.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        bail!("invalid Ethiopian date {s:?} (expected YYYY-MM-DD)");
    };
    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid Ethiopian year in {s:?}"))?;
    let month: u8 = month
        .parse()
        .with_context(|| format!("invalid Ethiopian month in {s:?}"))?;
    let day: u8 = day
        .parse()
        .with_context(|| format!("invalid Ethiopian day in {s:?}"))?;
    EthiopicDate::new(year, month, day).with_context(|| format!("invalid Ethiopian date {s:?}"))
}
