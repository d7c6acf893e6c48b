//! Integration tests for the Vimshottari day-axis engine.

use kundali_base::Graha;
use kundali_base::NAKSHATRA_SPAN_27;
use kundali_base::dasha::{
    DAYS_PER_YEAR, DashaLevel, active_chain, find_active_period, mahadashas,
    vimshottari_birth_balance, vimshottari_hierarchy,
};

/// Moon at 0 deg: full Ketu mahadasha, then Shukra.
#[test]
fn moon_at_zero_gives_full_ketu() {
    let level0 = mahadashas(0.0, 0.0);
    assert_eq!(level0.len(), 9);
    assert_eq!(level0[0].lord, Graha::Ketu);
    assert_eq!(level0[0].order, 1);
    let ketu_days = 7.0 * DAYS_PER_YEAR;
    assert!(
        (level0[0].duration_days() - ketu_days).abs() < 1e-6,
        "got {}",
        level0[0].duration_days()
    );
    assert_eq!(level0[1].lord, Graha::Shukra);
    let span = level0[8].end - level0[0].start;
    assert!((span - 120.0 * DAYS_PER_YEAR).abs() < 1e-6);
}

/// Every lord appears exactly once among the mahadashas.
#[test]
fn each_lord_once() {
    let level0 = mahadashas(0.0, 201.7);
    let mut lords: Vec<Graha> = level0.iter().map(|p| p.lord).collect();
    lords.sort();
    lords.dedup();
    assert_eq!(lords.len(), 9);
}

/// Nine mahadashas spanning 120 years minus the elapsed fraction.
#[test]
fn span_accounts_for_pre_birth_fraction() {
    let moon = 40.0 + NAKSHATRA_SPAN_27 * 0.3;
    let balance = vimshottari_birth_balance(moon);
    assert_eq!(balance.lord, Graha::Chandra);
    let level0 = mahadashas(0.0, moon);
    assert_eq!(level0.len(), 9);
    let span_years = (level0[8].end - level0[0].start) / DAYS_PER_YEAR;
    let expected = 120.0 - balance.fraction_elapsed * 10.0;
    assert!((span_years - expected).abs() < 1e-9, "{span_years} vs {expected}");
}

/// Eighty-one antardashas whose sums match their parents.
#[test]
fn antardashas_sum_to_parents() {
    let h = vimshottari_hierarchy(0.0, 123.4, DashaLevel::Antardasha);
    let maha = &h.levels[0];
    let antar = &h.levels[1];
    assert_eq!(antar.len(), 81);
    for (i, parent) in maha.iter().enumerate() {
        let sum: f64 = antar
            .iter()
            .filter(|a| a.parent_idx as usize == i)
            .map(|a| a.duration_days())
            .sum();
        assert!(
            (sum - parent.duration_days()).abs() < 1e-6,
            "maha {i}: {sum} vs {}",
            parent.duration_days()
        );
    }
    for w in antar.windows(2) {
        assert_eq!(w[0].end, w[1].start);
    }
}

/// The flattened antardasha list is contiguous across mahadasha boundaries.
#[test]
fn antardasha_lookup_across_boundary() {
    let h = vimshottari_hierarchy(0.0, 77.7, DashaLevel::Antardasha);
    let boundary = h.levels[0][1].start;
    let idx = find_active_period(&h.levels[1], boundary).unwrap();
    assert_eq!(h.levels[1][idx].parent_idx, 1);
    assert_eq!(h.levels[1][idx].lord, h.levels[0][1].lord);
    let before = find_active_period(&h.levels[1], boundary - 0.01).unwrap();
    assert_eq!(before + 1, idx);
}

/// Active chain agrees with individual lookups.
#[test]
fn chain_matches_lookups() {
    let h = vimshottari_hierarchy(0.0, 310.0, DashaLevel::Pratyantardasha);
    let t = 25.0 * DAYS_PER_YEAR;
    let chain = active_chain(&h, t);
    assert_eq!(chain.len(), 3);
    for (lvl, p) in chain.iter().enumerate() {
        let idx = find_active_period(&h.levels[lvl], t).unwrap();
        assert_eq!(h.levels[lvl][idx], *p);
    }
    assert!(active_chain(&h, -1.0).is_empty());
}
