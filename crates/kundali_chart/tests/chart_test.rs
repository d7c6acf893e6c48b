//! End-to-end chart scenarios over the analytic ephemeris.

use chrono::Duration;
use kundali_base::dasha::DAYS_PER_YEAR;
use kundali_base::{ALL_DIVISIONS, Division, Graha, nakshatra_from_longitude, nth_house_from};
use kundali_chart::{ChartDump, ChartModel, DashaDump, DashaError};
use kundali_ephem::{AnalyticEphemeris, BirthInputs};
use pretty_assertions::assert_eq;

fn delhi_1990() -> ChartModel {
    let inputs = BirthInputs::new(1990, 1, 1, 12, 0, 0, 28.6139, 77.2090, "+05:30");
    ChartModel::from_inputs(&inputs, &AnalyticEphemeris::new()).unwrap()
}

#[test]
fn nine_mahadashas_cover_the_remaining_cycle() {
    let chart = delhi_1990();
    let timeline = chart.dasha().unwrap();
    let maha = timeline.mahadashas();
    assert_eq!(maha.len(), 9);

    let moon = chart.longitude(Graha::Chandra).unwrap();
    let nak = nakshatra_from_longitude(moon);
    assert_eq!(maha[0].lord, nak.lord);

    let span_days = (maha[8].end - maha[0].start).num_milliseconds() as f64 / 86_400_000.0;
    let first_years = kundali_base::dasha::vimshottari_years(nak.lord);
    let expected = (120.0 - nak.fraction_elapsed * first_years) * DAYS_PER_YEAR;
    assert!((span_days - expected).abs() < 1e-3, "{span_days} vs {expected}");
}

#[test]
fn saturn_aspects_third_seventh_and_tenth() {
    let chart = delhi_1990();
    let records = chart.aspects(1, Some(Graha::Shani)).unwrap();
    let rec = &records[0];
    let from = rec.from_house;
    assert_eq!(
        rec.houses(),
        vec![
            nth_house_from(from, 3),
            nth_house_from(from, 7),
            nth_house_from(from, 10)
        ]
    );
}

#[test]
fn every_division_places_nine_planets_and_lagna() {
    let chart = delhi_1990();
    for d in ALL_DIVISIONS {
        let dump = chart.dump(d);
        assert_eq!(dump.body_count(), 10, "{d}");
        let varga = chart.varga(d);
        for (i, h) in varga.houses().iter().enumerate() {
            assert_eq!(h.sign.index(), (varga.ascendant_sign() + i as u8) % 12);
        }
    }
}

#[test]
fn dasha_navigation_by_offset() {
    let chart = delhi_1990();
    let t = chart.dasha().unwrap();
    let k = 3;
    let at = t.mahadashas()[k].start + Duration::days(30);
    assert_eq!(t.mahadasha_by_offset(at, 1).unwrap().index, k + 1);
    assert_eq!(t.mahadasha_by_offset(at, -1).unwrap().index, k - 1);
    assert!(matches!(
        t.mahadasha_by_offset(at, 1000),
        Err(DashaError::OffsetOutOfRange { index: 3, offset: 1000 })
    ));
}

#[test]
fn dumps_round_trip() {
    let chart = delhi_1990();
    let dump = chart.dump(Division::D9);
    let json = serde_json::to_string_pretty(&dump).unwrap();
    let back: ChartDump = serde_json::from_str(&json).unwrap();
    assert_eq!(serde_json::to_string_pretty(&back).unwrap(), json);

    let nested = chart.dasha().unwrap().to_nested();
    let json = serde_json::to_string(&nested).unwrap();
    let back: DashaDump = serde_json::from_str(&json).unwrap();
    assert_eq!(back, nested);
    assert_eq!(serde_json::to_string(&back).unwrap(), json);
}

#[test]
fn unsupported_division_is_an_error() {
    let chart = delhi_1990();
    for code in [0u16, 5, 6, 8, 11, 61, 108] {
        assert!(chart.get_varga(code).is_err(), "D{code}");
    }
}
