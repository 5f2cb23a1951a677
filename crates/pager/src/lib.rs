//! # awde-pager
//!
//! Virtualized month-by-month paging over the Ethiopian calendar.
//!
//! A [`MonthPager`] maps a bounded page index to an Ethiopian month and
//! back, anchored on an injected "today". Each page can be rendered as a
//! grid of complete Monday-first weeks in either calendar's orientation,
//! with cells optionally annotated with the other calendar's day numbers,
//! holiday occurrences, and event markers.
//!
//! ## Quick Start
//!
//! ```ignore
//! use awde_pager::{CalendarKind, GridOptions, MonthPager, MONTHS_BEFORE};
//!
//! let pager = MonthPager::new(today);
//! assert_eq!(pager.today_page(CalendarKind::Ethiopic), MONTHS_BEFORE);
//!
//! let data = pager.month_page(
//!     pager.initial_page(CalendarKind::Ethiopic),
//!     &GridOptions::default(),
//!     &catalog,
//!     Default::default(),
//!     &instances,
//! )?;
//! for week in &data.ethiopic_grid { /* render seven cells */ }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `paging` | Page index <-> month bijection, today/initial page |
//! | `grid` | Week grid generation and cell annotation |
//! | `page` | Assembled per-page data for the presentation layer |
//! | `error` | Error types |

mod error;
mod grid;
mod page;
mod paging;

pub use error::PagerError;
pub use grid::{
    AdjacentDayPolicy, CalendarCell, CalendarKind, GridOptions, MonthGrid,
};
pub use page::MonthPageData;
pub use paging::{MonthPager, PageIndex, MONTHS_AFTER, MONTHS_BEFORE, TOTAL_PAGES};
