use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Awde configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AwdeConfig {
    /// Calendar display settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Holiday display settings.
    #[serde(default)]
    pub holidays: HolidaysToml,
}

impl AwdeConfig {
    /// Loads the configuration file, falling back to defaults when the
    /// default path does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    /// Primary calendar orientation: "ethiopic" or "gregorian".
    #[serde(default = "default_primary")]
    pub primary: String,

    /// Show the secondary calendar's day numbers in grid cells.
    #[serde(default)]
    pub dual_numbers: bool,

    /// Adjacent-day slots at grid edges: "show" or "blank".
    #[serde(default = "default_adjacent_days")]
    pub adjacent_days: String,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            dual_numbers: false,
            adjacent_days: default_adjacent_days(),
        }
    }
}

fn default_primary() -> String {
    "ethiopic".to_string()
}

fn default_adjacent_days() -> String {
    "show".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidaysToml {
    /// Show day-off holidays of every class.
    #[serde(default = "default_true")]
    pub all_day_off: bool,

    /// Show Orthodox working-day observances.
    #[serde(default = "default_true")]
    pub working_orthodox: bool,

    /// Show Muslim working-day observances.
    #[serde(default = "default_true")]
    pub working_muslim: bool,

    /// Externally supplied per-year holiday dates (lunar estimates).
    #[serde(default)]
    pub supplied: Vec<SuppliedHolidayToml>,
}

impl Default for HolidaysToml {
    fn default() -> Self {
        Self {
            all_day_off: true,
            working_orthodox: true,
            working_muslim: true,
            supplied: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// One externally supplied holiday date, valid for a single Ethiopian year.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuppliedHolidayToml {
    pub id: String,
    pub title: String,
    /// Holiday class: "national-day-off", "orthodox-day-off",
    /// "orthodox-working", "muslim-day-off", "muslim-working", "cultural".
    pub kind: String,
    pub year: i32,
    pub month: u8,
    pub day: u8,
}
