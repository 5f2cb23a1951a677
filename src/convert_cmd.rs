//! The `convert` subcommand: one-shot date conversion.

use anyhow::{bail, Result};
use awde_ethiopic::EthiopicDate;
use tracing::info;

use crate::cli::ConvertArgs;
use crate::dates;

pub fn run(args: ConvertArgs) -> Result<()> {
    let (ethiopic, origin) = match (&args.gregorian, &args.ethiopic) {
        (Some(gregorian), None) => {
            let date = dates::parse_gregorian(gregorian)?;
            (EthiopicDate::from_gregorian(date)?, "gregorian")
        }
        (None, Some(ethiopic)) => (dates::parse_ethiopic(ethiopic)?, "ethiopic"),
        (None, None) => (dates::today()?, "today"),
        (Some(_), Some(_)) => bail!("pass either --gregorian or --ethiopic, not both"),
    };
    info!(origin, "converting date");

    let gregorian = ethiopic.to_gregorian();
    println!(
        "Ethiopian: {} ({} {}, {})",
        ethiopic,
        dates::month_name(ethiopic.month()),
        ethiopic.day(),
        ethiopic.year(),
    );
    println!("Gregorian: {}", gregorian.format("%Y-%m-%d"));
    println!("Weekday:   {}", ethiopic.weekday());
    Ok(())
}
