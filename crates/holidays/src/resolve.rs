//! Resolution of holiday definitions against a concrete year.

use awde_ethiopic::{month_length, EthiopicDate};
use tracing::{debug, warn};

use crate::bahere_hasab;
use crate::catalog::{Holiday, HolidayClassFilter, HolidayKind, HolidayRule};

/// One holiday falling on one concrete date.
///
/// Recomputed on demand from the catalog; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayOccurrence {
    /// Identifier of the originating [`Holiday`].
    pub id: String,
    /// Display title, copied from the definition.
    pub title: String,
    /// Classification, copied from the definition.
    pub kind: HolidayKind,
    /// The resolved date.
    pub date: EthiopicDate,
}

/// Resolves every catalog entry against a year.
///
/// `Dated` entries for other years are skipped; fixed entries anchored past
/// the end of a short Pagume resolve to the month's last valid day. The
/// result is de-duplicated and sorted by date (ties by id).
pub fn occurrences_for_year(year: i32, catalog: &[Holiday]) -> Vec<HolidayOccurrence> {
    let mut occurrences: Vec<HolidayOccurrence> = catalog
        .iter()
        .filter_map(|holiday| {
            resolve(holiday, year).map(|date| HolidayOccurrence {
                id: holiday.id.clone(),
                title: holiday.title.clone(),
                kind: holiday.kind,
                date,
            })
        })
        .collect();

    occurrences.sort_by(|a, b| (a.date, &a.id).cmp(&(b.date, &b.id)));
    occurrences.dedup_by(|a, b| a.id == b.id && a.date == b.date);
    debug!(year, count = occurrences.len(), "resolved holiday catalog");
    occurrences
}

/// Resolves the catalog to the occurrences of a single month.
pub fn occurrences_for_month(year: i32, month: u8, catalog: &[Holiday]) -> Vec<HolidayOccurrence> {
    occurrences_for_year(year, catalog)
        .into_iter()
        .filter(|occurrence| occurrence.date.month() == month)
        .collect()
}

/// Applies the display class filter, preserving order.
pub fn filter_occurrences(
    occurrences: &[HolidayOccurrence],
    filter: HolidayClassFilter,
) -> Vec<HolidayOccurrence> {
    occurrences
        .iter()
        .filter(|occurrence| filter.allows(occurrence.kind))
        .cloned()
        .collect()
}

fn resolve(holiday: &Holiday, year: i32) -> Option<EthiopicDate> {
    match holiday.rule {
        HolidayRule::Fixed { month, day } => resolve_fixed(holiday, year, month, day),
        HolidayRule::LeapShifted {
            month,
            common_day,
            leap_day,
        } => {
            let day = if awde_ethiopic::is_leap_year(year) {
                leap_day
            } else {
                common_day
            };
            resolve_fixed(holiday, year, month, day)
        }
        HolidayRule::Movable(feast) => Some(bahere_hasab::feast_date(feast, year)),
        HolidayRule::Dated {
            year: entry_year,
            month,
            day,
        } => {
            if entry_year != year {
                return None;
            }
            resolve_fixed(holiday, year, month, day)
        }
    }
}

/// Builds the date of a fixed anchor, pulling a day past the end of a short
/// Pagume back to the month's last valid day.
fn resolve_fixed(holiday: &Holiday, year: i32, month: u8, day: u8) -> Option<EthiopicDate> {
    let max_day = match month_length(year, month) {
        Ok(max_day) => max_day,
        Err(error) => {
            warn!(id = %holiday.id, %error, "skipping unresolvable holiday entry");
            return None;
        }
    };
    match EthiopicDate::new(year, month, day.min(max_day)) {
        Ok(date) => Some(date),
        Err(error) => {
            warn!(id = %holiday.id, %error, "skipping unresolvable holiday entry");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_catalog, MovableFeast};

    fn entry(id: &str, kind: HolidayKind, rule: HolidayRule) -> Holiday {
        Holiday::new(id, id.to_uppercase(), kind, rule)
    }

    #[test]
    fn fixed_entries_resolve_to_their_anchor() {
        let catalog = vec![entry(
            "meskel",
            HolidayKind::OrthodoxDayOff,
            HolidayRule::Fixed { month: 1, day: 17 },
        )];
        let out = occurrences_for_year(2016, &catalog);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].date, EthiopicDate::new(2016, 1, 17).unwrap());
    }

    #[test]
    fn pagume_anchor_clamps_in_common_years() {
        let catalog = vec![entry(
            "pagume-feast",
            HolidayKind::Cultural,
            HolidayRule::Fixed { month: 13, day: 6 },
        )];
        // 2015 is leap: Pagume 6 exists.
        let leap = occurrences_for_year(2015, &catalog);
        assert_eq!(leap[0].date, EthiopicDate::new(2015, 13, 6).unwrap());
        // 2016 is common: the anchor resolves to Pagume 5.
        let common = occurrences_for_year(2016, &catalog);
        assert_eq!(common[0].date, EthiopicDate::new(2016, 13, 5).unwrap());
    }

    #[test]
    fn leap_shifted_genna() {
        let catalog = vec![entry(
            "genna",
            HolidayKind::OrthodoxDayOff,
            HolidayRule::LeapShifted {
                month: 4,
                common_day: 28,
                leap_day: 29,
            },
        )];
        assert_eq!(
            occurrences_for_year(2016, &catalog)[0].date,
            EthiopicDate::new(2016, 4, 28).unwrap()
        );
        assert_eq!(
            occurrences_for_year(2015, &catalog)[0].date,
            EthiopicDate::new(2015, 4, 29).unwrap()
        );
    }

    #[test]
    fn dated_entries_only_match_their_year() {
        let catalog = vec![entry(
            "eid-al-fitr",
            HolidayKind::MuslimDayOff,
            HolidayRule::Dated {
                year: 2016,
                month: 8,
                day: 2,
            },
        )];
        assert_eq!(occurrences_for_year(2016, &catalog).len(), 1);
        assert!(occurrences_for_year(2017, &catalog).is_empty());
    }

    #[test]
    fn invalid_entry_is_skipped_not_fatal() {
        let catalog = vec![
            entry(
                "broken",
                HolidayKind::Cultural,
                HolidayRule::Fixed { month: 14, day: 1 },
            ),
            entry(
                "valid",
                HolidayKind::Cultural,
                HolidayRule::Fixed { month: 1, day: 1 },
            ),
        ];
        let out = occurrences_for_year(2016, &catalog);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "valid");
    }

    #[test]
    fn occurrences_are_sorted_and_deduplicated() {
        let catalog = vec![
            entry("b", HolidayKind::Cultural, HolidayRule::Fixed { month: 5, day: 11 }),
            entry("a", HolidayKind::Cultural, HolidayRule::Fixed { month: 1, day: 17 }),
            entry("a", HolidayKind::Cultural, HolidayRule::Fixed { month: 1, day: 17 }),
        ];
        let out = occurrences_for_year(2016, &catalog);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, "a");
        assert_eq!(out[1].id, "b");
        assert!(out[0].date < out[1].date);
    }

    #[test]
    fn month_narrowing() {
        let out = occurrences_for_month(2016, 1, &default_catalog());
        assert!(!out.is_empty());
        assert!(out.iter().all(|o| o.date.month() == 1));
        assert!(out.iter().any(|o| o.id == "enkutatash"));
        assert!(out.iter().any(|o| o.id == "meskel"));
    }

    #[test]
    fn default_catalog_resolves_movables() {
        let out = occurrences_for_year(2016, &default_catalog());
        let fasika = out.iter().find(|o| o.id == "fasika").unwrap();
        assert_eq!(fasika.date, bahere_hasab::feast_date(MovableFeast::Fasika, 2016));
        for pair in out.windows(2) {
            assert!(pair[0].date <= pair[1].date, "sorted output");
        }
    }

    #[test]
    fn class_filter_drops_working_holidays() {
        let all = occurrences_for_year(2016, &default_catalog());
        let day_off_only = filter_occurrences(
            &all,
            HolidayClassFilter {
                all_day_off: true,
                working_orthodox: false,
                working_muslim: false,
            },
        );
        assert!(day_off_only.iter().all(|o| o.kind.is_day_off()));
        assert!(day_off_only.len() < all.len());
    }
}
