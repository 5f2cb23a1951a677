use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Awde Ethiopian calendar tool.
#[derive(Parser)]
#[command(
    name = "awde",
    version,
    about = "Ethiopian calendar: conversion, month grids, holidays, events"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a single date between the two calendars.
    Convert(ConvertArgs),
    /// Render a month grid with holidays and event markers.
    Month(MonthArgs),
    /// List the holiday occurrences of an Ethiopian year.
    Holidays(HolidaysArgs),
    /// Expand and filter the events of an event file.
    Agenda(AgendaArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian date to convert (YYYY-MM-DD).
    #[arg(short, long, conflicts_with = "ethiopic")]
    pub gregorian: Option<String>,

    /// Ethiopian date to convert (YYYY-MM-DD).
    #[arg(short, long)]
    pub ethiopic: Option<String>,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "awde.toml")]
    pub config: PathBuf,

    /// Ethiopian year to show (defaults to the current month's).
    #[arg(short, long, requires = "month")]
    pub year: Option<i32>,

    /// Ethiopian month to show (1-13).
    #[arg(short, long, requires = "year")]
    pub month: Option<u8>,

    /// Page offset from the current month (e.g. -1 for the previous one).
    #[arg(short, long, conflicts_with_all = ["year", "month"], allow_hyphen_values = true)]
    pub page_offset: Option<i64>,

    /// Path to a JSON event file for event markers.
    #[arg(short, long)]
    pub events: Option<PathBuf>,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "awde.toml")]
    pub config: PathBuf,

    /// Ethiopian year to list (defaults to the current year).
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// Arguments for the `agenda` subcommand.
#[derive(clap::Args)]
pub struct AgendaArgs {
    /// Path to a JSON event file.
    #[arg(short, long)]
    pub events: PathBuf,

    /// Keep only instances on or after this Gregorian date (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<String>,

    /// Keep only instances on or before this Gregorian date (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<String>,

    /// Use the explicit show-everything range instead of no filter.
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub all: bool,
}
