//! Proportional sub-period generation.
//!
//! A child of lord L' inside a parent of duration P lasts
//! `P * years(L') / 120`; the children start from the parent's own lord.

use crate::graha::Graha;

use super::types::{DashaLevel, DashaPeriod, VIMSHOTTARI_TOTAL_YEARS};
use super::vimshottari::VIMSHOTTARI_SEQUENCE;

/// Snap the last child's end to the parent's end to absorb floating-point drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end: f64) {
    if let Some(last) = children.last_mut() {
        last.end = parent_end;
    }
}

/// Position of a lord in the Vimshottari sequence.
pub const fn cycle_position(lord: Graha) -> usize {
    match lord {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// The Vimshottari sequence rotated to begin at `lord`.
pub fn cycle_from(lord: Graha) -> impl Iterator<Item = (Graha, f64)> {
    let pos = cycle_position(lord);
    let n = VIMSHOTTARI_SEQUENCE.len();
    (0..n).map(move |i| VIMSHOTTARI_SEQUENCE[(pos + i) % n])
}

/// Generate the nine proportional children of `parent`.
///
/// Child boundaries are `parent.start + cumulative share`, so every start
/// equals the previous end exactly.
pub fn proportional_children(parent: &DashaPeriod, parent_idx: u32) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    let parent_duration = parent.duration_days();
    let mut children = Vec::with_capacity(VIMSHOTTARI_SEQUENCE.len());
    let mut cumulative_years = 0.0;
    let mut cursor = parent.start;

    for (order_0, (lord, years)) in cycle_from(parent.lord).enumerate() {
        cumulative_years += years;
        let end = parent.start + parent_duration * (cumulative_years / VIMSHOTTARI_TOTAL_YEARS);
        children.push(DashaPeriod {
            lord,
            start: cursor,
            end,
            level: child_level,
            order: (order_0 as u16) + 1,
            parent_idx,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end);
    children
}

/// Children for every period of a level.
pub fn complete_level(parents: &[DashaPeriod]) -> Vec<DashaPeriod> {
    parents
        .iter()
        .enumerate()
        .flat_map(|(idx, p)| proportional_children(p, idx as u32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maha(lord: Graha, start: f64, years: f64) -> DashaPeriod {
        DashaPeriod {
            lord,
            start,
            end: start + years * super::super::types::DAYS_PER_YEAR,
            level: DashaLevel::Mahadasha,
            order: 1,
            parent_idx: 0,
        }
    }

    #[test]
    fn cycle_starts_at_lord() {
        let seq: Vec<Graha> = cycle_from(Graha::Guru).map(|(g, _)| g).collect();
        assert_eq!(seq[0], Graha::Guru);
        assert_eq!(seq[1], Graha::Shani);
        assert_eq!(seq[2], Graha::Buddh);
        assert_eq!(seq[3], Graha::Ketu);
        assert_eq!(seq.len(), 9);
    }

    #[test]
    fn every_lord_has_its_own_cycle_position() {
        for (i, (g, _)) in VIMSHOTTARI_SEQUENCE.iter().enumerate() {
            assert_eq!(cycle_position(*g), i, "{g}");
            let first = cycle_from(*g).next().map(|(l, _)| l);
            assert_eq!(first, Some(*g));
            let total: f64 = cycle_from(*g).map(|(_, y)| y).sum();
            assert_eq!(total, VIMSHOTTARI_TOTAL_YEARS);
        }
    }

    #[test]
    fn children_tile_parent() {
        let parent = maha(Graha::Shukra, 1000.0, 20.0);
        let children = proportional_children(&parent, 0);
        assert_eq!(children.len(), 9);
        assert_eq!(children[0].lord, Graha::Shukra);
        assert_eq!(children[0].start, parent.start);
        assert_eq!(children[8].end, parent.end);
        for w in children.windows(2) {
            assert_eq!(w[0].end, w[1].start);
        }
        let sum: f64 = children.iter().map(|c| c.duration_days()).sum();
        assert!((sum - parent.duration_days()).abs() < 1e-6);
    }

    #[test]
    fn child_length_is_proportional() {
        let parent = maha(Graha::Surya, 0.0, 6.0);
        let children = proportional_children(&parent, 0);
        // Sun-Sun: 6 * 6 / 120 years.
        assert!((children[0].duration_years() - 0.3).abs() < 1e-9);
        // Sun-Moon: 6 * 10 / 120 years.
        assert_eq!(children[1].lord, Graha::Chandra);
        assert!((children[1].duration_years() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn deepest_level_has_no_children() {
        let mut p = maha(Graha::Ketu, 0.0, 7.0);
        p.level = DashaLevel::Pratyantardasha;
        assert!(proportional_children(&p, 0).is_empty());
    }
}
