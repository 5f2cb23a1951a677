//! # awde-holidays
//!
//! Ethiopian holiday catalog and per-year occurrence resolution.
//!
//! A catalog is a flat list of [`Holiday`] definitions; resolving it
//! against a year turns each definition into a concrete
//! [`HolidayOccurrence`]. Fixed entries anchored at the Pagume boundary
//! clamp to the month's last valid day; the movable Orthodox feasts are
//! computed with the Bahere Hasab; lunar holiday dates are not computed
//! here and enter the catalog as externally supplied per-year entries.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `catalog` | Holiday kinds, date rules, built-in catalog, class filter |
//! | `bahere_hasab` | Movable-feast computus (metqi, tewusak, Nineveh) |
//! | `resolve` | Per-year and per-month occurrence resolution |

mod bahere_hasab;
mod catalog;
mod resolve;

pub use bahere_hasab::{feast_date, metqi, nineveh};
pub use catalog::{
    default_catalog, Holiday, HolidayClassFilter, HolidayKind, HolidayRule, MovableFeast,
};
pub use resolve::{
    filter_occurrences, occurrences_for_month, occurrences_for_year, HolidayOccurrence,
};
