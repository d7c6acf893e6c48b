//! Vimshottari dasha: the 120-year, nine-lord cycle.

use crate::graha::Graha;

use super::balance::vimshottari_birth_balance;
use super::subperiod::{complete_level, cycle_from};
use super::types::{DAYS_PER_YEAR, DashaHierarchy, DashaLevel, DashaPeriod};

/// Lords and full lengths in years, in cycle order.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

/// Full mahadasha length of a lord, in years.
pub const fn vimshottari_years(lord: Graha) -> f64 {
    match lord {
        Graha::Ketu => 7.0,
        Graha::Shukra => 20.0,
        Graha::Surya => 6.0,
        Graha::Chandra => 10.0,
        Graha::Mangal => 7.0,
        Graha::Rahu => 18.0,
        Graha::Guru => 16.0,
        Graha::Shani => 19.0,
        Graha::Buddh => 17.0,
    }
}

/// The nine mahadashas following birth.
///
/// The first is the Moon's nakshatra lord, shortened by the fraction
/// already elapsed. Boundaries are `epoch + cumulative days`, so each start
/// equals the previous end.
pub fn mahadashas(epoch: f64, moon_sidereal_lon: f64) -> Vec<DashaPeriod> {
    let balance = vimshottari_birth_balance(moon_sidereal_lon);
    let mut periods = Vec::with_capacity(VIMSHOTTARI_SEQUENCE.len());
    let mut cumulative_years = 0.0;
    let mut cursor = epoch;

    for (i, (lord, years)) in cycle_from(balance.lord).enumerate() {
        let span = if i == 0 { balance.balance_years } else { years };
        cumulative_years += span;
        let end = epoch + cumulative_years * DAYS_PER_YEAR;
        periods.push(DashaPeriod {
            lord,
            start: cursor,
            end,
            level: DashaLevel::Mahadasha,
            order: (i as u16) + 1,
            parent_idx: 0,
        });
        cursor = end;
    }
    periods
}

/// Materialize every level down to `max_level`.
pub fn vimshottari_hierarchy(
    epoch: f64,
    moon_sidereal_lon: f64,
    max_level: DashaLevel,
) -> DashaHierarchy {
    let balance = vimshottari_birth_balance(moon_sidereal_lon);
    let mut levels = vec![mahadashas(epoch, moon_sidereal_lon)];
    let mut level = DashaLevel::Mahadasha;
    while level < max_level {
        let Some(next) = level.child_level() else {
            break;
        };
        let children = complete_level(levels.last().map(Vec::as_slice).unwrap_or(&[]));
        levels.push(children);
        level = next;
    }
    DashaHierarchy {
        epoch,
        balance,
        levels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::NAKSHATRA_SPAN_27;

    #[test]
    fn sequence_totals_120() {
        let total: f64 = VIMSHOTTARI_SEQUENCE.iter().map(|(_, y)| y).sum();
        assert!((total - 120.0).abs() < 1e-12);
        for (g, y) in VIMSHOTTARI_SEQUENCE {
            assert_eq!(vimshottari_years(g), y);
        }
    }

    #[test]
    fn nine_contiguous_mahadashas() {
        let periods = mahadashas(0.0, 100.0);
        assert_eq!(periods.len(), 9);
        assert_eq!(periods[0].start, 0.0);
        for w in periods.windows(2) {
            assert_eq!(w[0].end, w[1].start);
        }
    }

    #[test]
    fn span_is_120_minus_elapsed() {
        // Midpoint of Ashwini: half of Ketu's 7 years elapsed.
        let periods = mahadashas(0.0, NAKSHATRA_SPAN_27 / 2.0);
        let span_years = (periods[8].end - periods[0].start) / DAYS_PER_YEAR;
        assert!((span_years - 116.5).abs() < 1e-9, "span {span_years}");
        assert_eq!(periods[0].lord, Graha::Ketu);
        assert_eq!(periods[1].lord, Graha::Shukra);
        assert!((periods[1].duration_years() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn epoch_offsets_every_boundary() {
        let a = mahadashas(0.0, 200.0);
        let b = mahadashas(2_451_545.0, 200.0);
        for (x, y) in a.iter().zip(&b) {
            assert!((y.start - x.start - 2_451_545.0).abs() < 1e-6);
        }
    }

    #[test]
    fn hierarchy_depths() {
        let h = vimshottari_hierarchy(0.0, 55.0, DashaLevel::Pratyantardasha);
        assert_eq!(h.levels.len(), 3);
        assert_eq!(h.levels[0].len(), 9);
        assert_eq!(h.levels[1].len(), 81);
        assert_eq!(h.levels[2].len(), 729);
        assert_eq!(h.levels[1][0].lord, h.levels[0][0].lord);

        let shallow = vimshottari_hierarchy(0.0, 55.0, DashaLevel::Mahadasha);
        assert_eq!(shallow.levels.len(), 1);
    }
}
