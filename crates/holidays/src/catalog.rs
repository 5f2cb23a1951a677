//! Holiday definitions: kinds, date rules, and the built-in catalog.

/// Classification of a holiday, used for display filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayKind {
    /// National public holiday, day off.
    NationalDayOff,
    /// Orthodox holiday, day off.
    OrthodoxDayOff,
    /// Orthodox observance on a working day.
    OrthodoxWorking,
    /// Muslim holiday, day off.
    MuslimDayOff,
    /// Muslim observance on a working day.
    MuslimWorking,
    /// Cultural observance.
    Cultural,
}

impl HolidayKind {
    /// Returns `true` for kinds that are public days off.
    pub fn is_day_off(self) -> bool {
        matches!(
            self,
            HolidayKind::NationalDayOff | HolidayKind::OrthodoxDayOff | HolidayKind::MuslimDayOff
        )
    }
}

/// The movable Orthodox feasts derived from Nineveh.
///
/// Every movable feast is a fixed day offset from the Fast of Nineveh,
/// which the Bahere Hasab computes per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovableFeast {
    /// Fast of Nineveh, the reference point.
    Nineveh,
    /// Beginning of the Great Lent.
    AbiyTsom,
    /// Mid-Lent Sunday.
    DebreZeit,
    /// Palm Sunday.
    Hosanna,
    /// Good Friday.
    Siklet,
    /// Easter.
    Fasika,
    /// Priests' meeting, 24 days after Easter.
    RikbeKahinat,
    /// Ascension.
    Erget,
    /// Pentecost.
    Paraclete,
    /// Apostles' fast begins.
    TsomeHawariat,
    /// Fast of Salvation begins.
    TsomeDihnet,
}

impl MovableFeast {
    /// Day offset of this feast from Nineveh.
    pub(crate) fn days_from_nineveh(self) -> i64 {
        match self {
            MovableFeast::Nineveh => 0,
            MovableFeast::AbiyTsom => 14,
            MovableFeast::DebreZeit => 41,
            MovableFeast::Hosanna => 62,
            MovableFeast::Siklet => 67,
            MovableFeast::Fasika => 69,
            MovableFeast::RikbeKahinat => 93,
            MovableFeast::Erget => 108,
            MovableFeast::Paraclete => 118,
            MovableFeast::TsomeHawariat => 119,
            MovableFeast::TsomeDihnet => 121,
        }
    }
}

/// How a holiday's date is determined for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// The same Ethiopian month and day every year. A day anchored past the
    /// end of a short Pagume resolves to the month's last valid day.
    Fixed { month: u8, day: u8 },
    /// A fixed month whose day shifts by one in leap years (Genna falls on
    /// Tahsas 29 when the preceding Pagume had six days).
    LeapShifted {
        month: u8,
        common_day: u8,
        leap_day: u8,
    },
    /// Computed from the Bahere Hasab for the requested year.
    Movable(MovableFeast),
    /// An externally supplied date valid for one specific year, used for
    /// lunar holiday estimates that this engine does not compute.
    Dated { year: i32, month: u8, day: u8 },
}

/// A holiday definition: identity plus the rule producing its date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    /// Stable identifier, unique within a catalog.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Classification for display filtering.
    pub kind: HolidayKind,
    /// Date rule.
    pub rule: HolidayRule,
}

impl Holiday {
    /// Creates a holiday definition.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: HolidayKind,
        rule: HolidayRule,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            rule,
        }
    }
}

/// Display filter over holiday classes.
///
/// Mirrors the application's three settings toggles: each flag admits the
/// kinds listed in its arm, and a kind passes when any enabled flag admits
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayClassFilter {
    /// Show all day-off holidays (national, Orthodox, Muslim).
    pub all_day_off: bool,
    /// Show Orthodox holidays, including working-day observances.
    pub working_orthodox: bool,
    /// Show Muslim holidays, including working-day observances.
    pub working_muslim: bool,
}

impl Default for HolidayClassFilter {
    fn default() -> Self {
        Self {
            all_day_off: true,
            working_orthodox: true,
            working_muslim: true,
        }
    }
}

impl HolidayClassFilter {
    /// Returns `true` when the filter admits the given kind.
    pub fn allows(self, kind: HolidayKind) -> bool {
        let by_day_off = self.all_day_off && kind.is_day_off();
        let by_orthodox = self.working_orthodox
            && matches!(kind, HolidayKind::OrthodoxWorking | HolidayKind::OrthodoxDayOff);
        let by_muslim = self.working_muslim
            && matches!(kind, HolidayKind::MuslimWorking | HolidayKind::MuslimDayOff);
        by_day_off || by_orthodox || by_muslim
    }
}

/// Returns the built-in catalog: national public holidays, fixed Orthodox
/// feasts, and the Nineveh-derived movable feasts.
///
/// Lunar (Muslim) holiday dates are not computed by this engine; callers
/// append externally supplied [`HolidayRule::Dated`] entries per year.
pub fn default_catalog() -> Vec<Holiday> {
    use HolidayKind::*;
    use HolidayRule::*;

    vec![
        Holiday::new("enkutatash", "New Year", NationalDayOff, Fixed { month: 1, day: 1 }),
        Holiday::new("meskel", "Finding of the True Cross", OrthodoxDayOff, Fixed { month: 1, day: 17 }),
        Holiday::new(
            "genna",
            "Christmas",
            OrthodoxDayOff,
            LeapShifted { month: 4, common_day: 28, leap_day: 29 },
        ),
        Holiday::new("timket", "Epiphany", OrthodoxDayOff, Fixed { month: 5, day: 11 }),
        Holiday::new("adwa", "Adwa Victory Day", NationalDayOff, Fixed { month: 6, day: 23 }),
        Holiday::new("labour-day", "Labour Day", NationalDayOff, Fixed { month: 8, day: 23 }),
        Holiday::new("patriots-day", "Patriots' Victory Day", NationalDayOff, Fixed { month: 8, day: 27 }),
        Holiday::new("ginbot-20", "Downfall of the Derg", NationalDayOff, Fixed { month: 9, day: 20 }),
        Holiday::new("nineveh", "Fast of Nineveh", OrthodoxWorking, Movable(MovableFeast::Nineveh)),
        Holiday::new("abiy-tsom", "Great Lent", OrthodoxWorking, Movable(MovableFeast::AbiyTsom)),
        Holiday::new("debre-zeit", "Debre Zeit", OrthodoxWorking, Movable(MovableFeast::DebreZeit)),
        Holiday::new("hosanna", "Palm Sunday", OrthodoxWorking, Movable(MovableFeast::Hosanna)),
        Holiday::new("siklet", "Good Friday", OrthodoxDayOff, Movable(MovableFeast::Siklet)),
        Holiday::new("fasika", "Easter", OrthodoxDayOff, Movable(MovableFeast::Fasika)),
    ]
}
