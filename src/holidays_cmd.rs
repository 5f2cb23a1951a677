//! The `holidays` subcommand: list one year's holiday occurrences.

use anyhow::Result;
use awde_holidays::{filter_occurrences, occurrences_for_year};
use tracing::info;

use crate::cli::HolidaysArgs;
use crate::config::AwdeConfig;
use crate::dates;
use crate::settings;

pub fn run(args: HolidaysArgs) -> Result<()> {
    let config = AwdeConfig::load(&args.config)?;
    let catalog = settings::holiday_catalog(&config)?;
    let class_filter = settings::class_filter(&config);

    let year = match args.year {
        Some(year) => year,
        None => dates::today()?.year(),
    };
    info!(year, "listing holidays");

    let occurrences = filter_occurrences(&occurrences_for_year(year, &catalog), class_filter);
    println!("Holidays of {year}:");
    for occurrence in &occurrences {
        let gregorian = occurrence.date.to_gregorian();
        let day_off = if occurrence.kind.is_day_off() {
            "day off"
        } else {
            "working"
        };
        println!(
            "  {:>9} {:>2}  ({})  {:<28} {}",
            dates::month_name(occurrence.date.month()),
            occurrence.date.day(),
            gregorian.format("%Y-%m-%d"),
            occurrence.title,
            day_off,
        );
    }
    println!("{} holidays", occurrences.len());
    Ok(())
}
