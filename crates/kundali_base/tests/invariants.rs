//! Property tests over the pure sidereal layer.

use kundali_base::dasha::{DAYS_PER_YEAR, mahadashas};
use kundali_base::{
    ALL_DIVISIONS, ALL_GRAHAS, Dignity, aspects_house, dignity_set, house_of_sign,
    nakshatra_from_longitude, relative_house, sign_of_house, varga_position,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn house_rotation_round_trips(asc in 0u8..12, house in 1u8..=12) {
        let sign = sign_of_house(asc, house);
        prop_assert!(sign < 12);
        prop_assert_eq!(house_of_sign(asc, sign), house);
    }

    #[test]
    fn relative_house_in_range(a in 1u8..=12, b in 1u8..=12) {
        let r = relative_house(a, b);
        prop_assert!((1..=12).contains(&r));
        prop_assert_eq!(relative_house(a, a), 1);
    }

    #[test]
    fn varga_positions_in_range(lon in 0.0f64..360.0) {
        for d in ALL_DIVISIONS {
            let p = varga_position(lon, d);
            prop_assert!(p.sign < 12);
            prop_assert!(p.degree >= 0.0 && p.degree < 30.0, "{d} {lon} -> {}", p.degree);
        }
    }

    #[test]
    fn d1_is_identity_sign(lon in 0.0f64..360.0) {
        let p = varga_position(lon, kundali_base::Division::D1);
        prop_assert_eq!(p.sign, ((lon / 30.0).floor() as u8).min(11));
    }

    #[test]
    fn exalted_and_debilitated_exclusive(lon in 0.0f64..360.0) {
        for g in ALL_GRAHAS {
            let set = dignity_set(g, lon);
            prop_assert!(!set.is_empty());
            prop_assert!(!(set.contains(Dignity::Exalted) && set.contains(Dignity::Debilitated)));
        }
    }

    #[test]
    fn pada_and_nakshatra_in_range(lon in 0.0f64..360.0) {
        let info = nakshatra_from_longitude(lon);
        prop_assert!(info.nakshatra_index < 27);
        prop_assert!((1..=4).contains(&info.pada));
    }

    #[test]
    fn seventh_aspect_universal(house in 1u8..=12) {
        for g in ALL_GRAHAS {
            prop_assert!(aspects_house(g, house, ((house + 5) % 12) + 1));
        }
    }

    #[test]
    fn mahadashas_contiguous(moon in 0.0f64..360.0) {
        let periods = mahadashas(0.0, moon);
        prop_assert_eq!(periods.len(), 9);
        for w in periods.windows(2) {
            prop_assert_eq!(w[0].end, w[1].start);
        }
        let span = (periods[8].end - periods[0].start) / DAYS_PER_YEAR;
        prop_assert!(span > 100.0 - 1e-9 && span <= 120.0 + 1e-9);
    }
}
