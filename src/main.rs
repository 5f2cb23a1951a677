mod agenda_cmd;
mod cli;
mod config;
mod convert_cmd;
mod dates;
mod events;
mod holidays_cmd;
mod logging;
mod month_cmd;
mod settings;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Convert(args) => convert_cmd::run(args),
        Command::Month(args) => month_cmd::run(args),
        Command::Holidays(args) => holidays_cmd::run(args),
        Command::Agenda(args) => agenda_cmd::run(args),
    }
}
