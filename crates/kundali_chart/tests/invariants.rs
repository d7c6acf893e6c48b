//! Property tests for chart-level invariants.

use chrono::{TimeZone, Utc};
use kundali_base::{ALL_DIVISIONS, ALL_GRAHAS};
use kundali_chart::{ChartModel, DashaTimeline};
use kundali_ephem::{EphemerisSnapshot, PlanetPosition};
use proptest::prelude::*;

fn arb_snapshot() -> impl Strategy<Value = EphemerisSnapshot> {
    (0.0f64..360.0, prop::collection::vec(0.0f64..360.0, 9), any::<[bool; 9]>()).prop_map(
        |(asc, lons, retro)| {
            EphemerisSnapshot::new(
                asc,
                ALL_GRAHAS
                    .iter()
                    .zip(lons)
                    .zip(retro)
                    .map(|((&g, l), r)| PlanetPosition::new(g, l, r)),
            )
        },
    )
}

proptest! {
    #[test]
    fn ten_bodies_in_every_division(snap in arb_snapshot()) {
        let chart = ChartModel::new(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(), snap);
        for d in ALL_DIVISIONS {
            prop_assert_eq!(chart.dump(d).body_count(), 10);
            let varga = chart.varga(d);
            let mut signs: Vec<u8> = varga.houses().iter().map(|h| h.sign.index()).collect();
            prop_assert_eq!(signs[0], varga.ascendant_sign());
            signs.sort_unstable();
            prop_assert_eq!(signs, (0..12).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn antardashas_fill_each_mahadasha(moon in 0.0f64..360.0) {
        let t = DashaTimeline::new(Utc.with_ymd_and_hms(1980, 6, 1, 0, 0, 0).unwrap(), moon);
        for (i, m) in t.mahadashas().iter().enumerate() {
            let children = t.antardashas_of(i).unwrap();
            prop_assert_eq!(children[0].start, m.start);
            prop_assert_eq!(children[8].end, m.end);
        }
    }
}
