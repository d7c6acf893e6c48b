//! Catalog scenarios over hand-placed charts.

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use kundali_base::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
use kundali_chart::ChartModel;
use kundali_ephem::{AnalyticEphemeris, BirthInputs, EphemerisSnapshot, PlanetPosition};
use kundali_yoga::{
    ConservativeStrength, Polarity, YogaResult, catalog, evaluate_all, evaluate_one, slugify,
};
use pretty_assertions::assert_eq;

/// Longitudes in `ALL_GRAHAS` order.
fn chart(asc: f64, lons: [f64; 9]) -> ChartModel {
    let snap = EphemerisSnapshot::new(
        asc,
        ALL_GRAHAS
            .into_iter()
            .zip(lons)
            .map(|(g, l)| PlanetPosition::new(g, l, false)),
    );
    ChartModel::new(Utc.with_ymd_and_hms(1990, 1, 1, 6, 30, 0).unwrap(), snap)
}

fn partial(asc: f64, positions: &[(Graha, f64)]) -> ChartModel {
    let snap = EphemerisSnapshot::new(
        asc,
        positions.iter().map(|&(g, l)| PlanetPosition::new(g, l, false)),
    );
    ChartModel::new(Utc.with_ymd_and_hms(1990, 1, 1, 6, 30, 0).unwrap(), snap)
}

fn find<'a>(results: &'a [YogaResult], name: &str) -> &'a YogaResult {
    results
        .iter()
        .find(|y| y.name == name)
        .unwrap_or_else(|| panic!("{name} missing from results"))
}

fn present(results: &[YogaResult], names: &[&str]) -> Vec<String> {
    names
        .iter()
        .filter(|n| find(results, n).present)
        .map(|n| n.to_string())
        .collect()
}

const SANKHYA: [&str; 7] = ["Vallaki", "Damni", "Pasa", "Kedara", "Sula", "Yuga", "Gola"];

// Aries lagna; the seven grahas fill houses 1-4 exactly.
fn four_house_chart() -> ChartModel {
    chart(5.0, [10.0, 40.0, 70.0, 100.0, 15.0, 45.0, 75.0, 200.0, 20.0])
}

#[test]
fn catalog_names_are_unique_and_large() {
    let names: Vec<&str> = catalog().names().collect();
    assert!(names.len() >= 150, "{}", names.len());
    let slugs: HashSet<String> = names.iter().map(|n| slugify(n)).collect();
    assert_eq!(slugs.len(), names.len());
}

#[test]
fn compute_all_follows_registration_order() {
    let c = four_house_chart();
    let results = evaluate_all(&c, &ConservativeStrength);
    let got: Vec<&str> = results.iter().map(|y| y.name.as_str()).collect();
    let want: Vec<&str> = catalog().names().collect();
    assert_eq!(got, want);
}

/// The Sankhya name expected for a chart: 7 houses is Vallaki, 1 is Gola.
fn expected_sankhya(c: &ChartModel) -> &'static str {
    let houses: HashSet<u8> = SAPTA_GRAHAS
        .into_iter()
        .map(|g| c.rasi().house_of(g).unwrap())
        .collect();
    SANKHYA[7 - houses.len()]
}

#[test]
fn exactly_one_sankhya_yoga() {
    let c = chart(
        95.0,
        [200.0, 20.0, 300.0, 215.0, 110.0, 170.0, 40.0, 60.0, 240.0],
    );
    let results = evaluate_all(&c, &ConservativeStrength);
    assert_eq!(expected_sankhya(&c), "Vallaki");
    assert_eq!(present(&results, &SANKHYA), ["Vallaki"]);
}

#[test]
fn sankhya_for_delhi_1990() {
    let inputs = BirthInputs::new(1990, 1, 1, 12, 0, 0, 28.6139, 77.2090, "+05:30");
    let c = ChartModel::from_inputs(&inputs, &AnalyticEphemeris::new()).unwrap();
    let results = evaluate_all(&c, &ConservativeStrength);
    assert_eq!(present(&results, &SANKHYA), [expected_sankhya(&c)]);
}

#[test]
fn yupa_with_exact_first_four_houses() {
    let c = four_house_chart();
    let results = evaluate_all(&c, &ConservativeStrength);
    let yupa = find(&results, "Yupa");
    assert!(yupa.present);
    assert_eq!(yupa.strength, 1.0);
    assert_eq!(yupa.polarity, Polarity::Positive);
    for other in ["Ishu", "Sakti", "Danda"] {
        assert!(!find(&results, other).present, "{other}");
    }
    assert_eq!(present(&results, &SANKHYA), ["Kedara"]);
}

#[test]
fn harsha_from_sixth_lord_in_sixth() {
    // Aries lagna: Mercury rules the 6th, Mars the 8th, Jupiter the 12th.
    let c = chart(5.0, [100.0, 50.0, 215.0, 160.0, 20.0, 250.0, 300.0, 30.0, 210.0]);
    let results = evaluate_all(&c, &ConservativeStrength);
    let harsha = find(&results, "Harsha");
    assert!(harsha.present);
    assert_eq!(harsha.strength, 1.0);
    assert!(find(&results, "Sarala").present);
    assert!(!find(&results, "Vimala").present);
}

#[test]
fn gajakesari_graded_by_kendra_and_dignity() {
    let c = partial(5.0, &[(Graha::Chandra, 10.0), (Graha::Guru, 100.0)]);
    let y = evaluate_one(&c, &ConservativeStrength, "gajakesari").unwrap();
    assert!(y.present);
    assert!((y.strength - 0.875).abs() < 1e-12, "{}", y.strength);
}

#[test]
fn sunapha_with_mars_second_from_moon() {
    // Sun in the 2nd from the Moon does not count.
    let c = chart(5.0, [45.0, 10.0, 40.0, 100.0, 160.0, 190.0, 250.0, 300.0, 120.0]);
    let results = evaluate_all(&c, &ConservativeStrength);
    let sunapha = find(&results, "Sunapha");
    assert!(sunapha.present);
    assert_eq!(sunapha.strength, 0.5);
    for other in ["Anapha", "Durudhara", "Kemadruma"] {
        assert!(!find(&results, other).present, "{other}");
    }
}

#[test]
fn node_beside_the_moon_breaks_kemadruma() {
    // Rahu alone in the 2nd from the Moon.
    let c = partial(5.0, &[(Graha::Chandra, 10.0), (Graha::Rahu, 40.0), (Graha::Ketu, 220.0)]);
    let results = evaluate_all(&c, &ConservativeStrength);
    let sunapha = find(&results, "Sunapha");
    assert!(sunapha.present, "{}", sunapha.details);
    assert_eq!(sunapha.strength, 0.5);
    assert!(!find(&results, "Kemadruma").present);
    assert!(!find(&results, "Kemadruma Bhanga").present);

    // Ketu alone in the 12th.
    let c = partial(5.0, &[(Graha::Chandra, 10.0), (Graha::Rahu, 160.0), (Graha::Ketu, 340.0)]);
    let results = evaluate_all(&c, &ConservativeStrength);
    assert!(find(&results, "Anapha").present);
    assert!(!find(&results, "Kemadruma").present);
}

#[test]
fn moon_second_from_sun_is_vesi() {
    let c = partial(5.0, &[(Graha::Surya, 10.0), (Graha::Chandra, 40.0)]);
    let results = evaluate_all(&c, &ConservativeStrength);
    let vesi = find(&results, "Vesi");
    assert!(vesi.present, "{}", vesi.details);
    assert!((vesi.strength - 0.7).abs() < 1e-12);
    assert!(!find(&results, "Vasi").present);
    assert!(!find(&results, "Ubhayachari").present);

    // Nodes do not form Vesi.
    let c = partial(5.0, &[(Graha::Surya, 10.0), (Graha::Rahu, 40.0), (Graha::Ketu, 220.0)]);
    let results = evaluate_all(&c, &ConservativeStrength);
    assert!(!find(&results, "Vesi").present);
}

#[test]
fn budha_aditya_outside_combustion() {
    let c = partial(5.0, &[(Graha::Surya, 100.0), (Graha::Buddh, 115.0)]);
    let y = evaluate_one(&c, &ConservativeStrength, "Budha Aditya").unwrap();
    assert!(y.present);
    assert_eq!(y.strength, 1.0);

    let c = partial(5.0, &[(Graha::Surya, 100.0), (Graha::Buddh, 105.0)]);
    let y = evaluate_one(&c, &ConservativeStrength, "budha-aditya").unwrap();
    assert_eq!(y.strength, 0.5);
}

#[test]
fn kala_sarpa_when_all_ahead_of_rahu() {
    let c = chart(5.0, [30.0, 50.0, 70.0, 90.0, 110.0, 130.0, 150.0, 10.0, 190.0]);
    let y = evaluate_one(&c, &ConservativeStrength, "Kala Sarpa").unwrap();
    assert!(y.present);
    assert_eq!(y.polarity, Polarity::Negative);
}

#[test]
fn neecha_bhanga_variants_for_the_sun_in_libra() {
    // Aries lagna: Sun debilitated in the 7th at Libra 21, which is Aries
    // in the navamsa; Saturn exalted beside it; Venus aspecting from the 1st.
    let c = chart(5.0, [201.0, 100.0, 130.0, 160.0, 250.0, 20.0, 195.0, 300.0, 120.0]);
    let results = evaluate_all(&c, &ConservativeStrength);
    for (name, strength) in [
        ("Neecha Bhanga Kendra", 1.0),
        ("Neecha Bhanga Uchcha Graha", 1.0),
        ("Neecha Bhanga Drishti", 0.75),
        ("Neecha Bhanga Navamsa", 1.0),
    ] {
        let y = find(&results, name);
        assert!(y.present, "{name}: {}", y.details);
        assert_eq!(y.strength, strength, "{name}");
    }

    // Libra 10 falls in the Capricorn navamsa.
    let c = chart(5.0, [190.0, 100.0, 130.0, 160.0, 250.0, 20.0, 195.0, 300.0, 120.0]);
    let y = evaluate_one(&c, &ConservativeStrength, "Neecha Bhanga Navamsa").unwrap();
    assert!(!y.present);
}

#[test]
fn shakata_cancelled_by_moon_in_kendra() {
    // Moon 6th from Jupiter, in the 9th.
    let c = partial(5.0, &[(Graha::Chandra, 250.0), (Graha::Guru, 100.0)]);
    let results = evaluate_all(&c, &ConservativeStrength);
    assert!(find(&results, "Shakata").present);
    assert!(!find(&results, "Shakata Bhanga").present);

    // Moon 8th from Jupiter, in the lagna.
    let c = partial(5.0, &[(Graha::Chandra, 10.0), (Graha::Guru, 160.0)]);
    let results = evaluate_all(&c, &ConservativeStrength);
    assert!(!find(&results, "Shakata").present);
    let bhanga = find(&results, "Shakata Bhanga");
    assert!(bhanga.present, "{}", bhanga.details);
    assert_eq!(bhanga.strength, 1.0);
}

#[test]
fn mahabhagya_by_day_and_by_night() {
    let day = partial(5.0, &[(Graha::Surya, 190.0), (Graha::Chandra, 130.0)]);
    assert!(evaluate_one(&day, &ConservativeStrength, "Mahabhagya").unwrap().present);

    // Taurus lagna, Sun below the horizon in the 3rd.
    let night = partial(35.0, &[(Graha::Surya, 100.0), (Graha::Chandra, 280.0)]);
    assert!(evaluate_one(&night, &ConservativeStrength, "Mahabhagya").unwrap().present);

    let mixed = partial(5.0, &[(Graha::Surya, 190.0), (Graha::Chandra, 100.0)]);
    assert!(!evaluate_one(&mixed, &ConservativeStrength, "Mahabhagya").unwrap().present);
}

#[test]
fn pravrajya_needs_four_in_one_house() {
    assert!(!evaluate_one(&four_house_chart(), &ConservativeStrength, "Pravrajya").unwrap().present);

    let four = [
        (Graha::Surya, 10.0),
        (Graha::Mangal, 25.0),
        (Graha::Buddh, 15.0),
        (Graha::Shukra, 20.0),
    ];
    let c = partial(5.0, &four);
    let y = evaluate_one(&c, &ConservativeStrength, "Pravrajya").unwrap();
    assert!(y.present);
    assert_eq!(y.strength, 0.75);

    // Saturn rules the 10th for an Aries lagna.
    let mut five = four.to_vec();
    five.push((Graha::Shani, 28.0));
    let c = partial(5.0, &five);
    let y = evaluate_one(&c, &ConservativeStrength, "Pravrajya").unwrap();
    assert_eq!(y.strength, 1.0);
    assert_eq!(y.polarity, Polarity::Neutral);
}

#[test]
fn balarishta_and_its_cancellation() {
    // Moon in the 6th, aspected by Saturn from the 4th and Mars from the 11th.
    let c = chart(5.0, [10.0, 160.0, 300.0, 40.0, 70.0, 45.0, 100.0, 220.0, 40.0]);
    let results = evaluate_all(&c, &ConservativeStrength);
    let bala = find(&results, "Balarishta");
    assert!(bala.present, "{}", bala.details);
    assert_eq!(bala.strength, 1.0);
    for other in ["Lagnarishta", "Chandrarishta", "Arishta Bhanga"] {
        assert!(!find(&results, other).present, "{other}");
    }

    // Jupiter moved into the 4th.
    let c = chart(5.0, [10.0, 160.0, 300.0, 40.0, 100.0, 45.0, 100.0, 220.0, 40.0]);
    let results = evaluate_all(&c, &ConservativeStrength);
    assert!(find(&results, "Balarishta").present);
    let bhanga = find(&results, "Arishta Bhanga");
    assert!(bhanga.present);
    assert_eq!(bhanga.strength, 1.0);
    assert_eq!(bhanga.polarity, Polarity::Positive);
}

#[test]
fn mangal_dosha_by_house() {
    for (lon, strength) in [(190.0, 1.0), (100.0, 0.75), (130.0, 0.0)] {
        let c = partial(5.0, &[(Graha::Mangal, lon)]);
        let y = evaluate_one(&c, &ConservativeStrength, "Mangal Dosha").unwrap();
        assert_eq!(y.present, strength > 0.0, "{lon}");
        assert_eq!(y.strength, strength, "{lon}");
    }
}

#[test]
fn pitru_dosha_from_the_sun_and_rahu() {
    let cases: [(&[(Graha, f64)], f64); 4] = [
        (&[(Graha::Surya, 250.0), (Graha::Shani, 255.0)], 1.0),
        (&[(Graha::Surya, 10.0), (Graha::Rahu, 12.0)], 0.75),
        (&[(Graha::Surya, 10.0), (Graha::Rahu, 250.0)], 0.75),
        (&[(Graha::Surya, 10.0), (Graha::Rahu, 130.0)], 0.0),
    ];
    for (positions, strength) in cases {
        let c = partial(5.0, positions);
        let y = evaluate_one(&c, &ConservativeStrength, "Pitru Dosha").unwrap();
        assert_eq!(y.strength, strength, "{}", y.details);
    }
}

#[test]
fn punarphoo_is_aspect_not_conjunction() {
    let mutual = partial(5.0, &[(Graha::Shani, 10.0), (Graha::Chandra, 190.0)]);
    let y = evaluate_one(&mutual, &ConservativeStrength, "Punarphoo").unwrap();
    assert_eq!((y.present, y.strength), (true, 1.0));

    // Saturn's 3rd-house aspect.
    let one_way = partial(5.0, &[(Graha::Shani, 10.0), (Graha::Chandra, 70.0)]);
    let y = evaluate_one(&one_way, &ConservativeStrength, "Punarphoo").unwrap();
    assert_eq!((y.present, y.strength), (true, 0.75));

    let joined = partial(5.0, &[(Graha::Shani, 10.0), (Graha::Chandra, 15.0)]);
    let results = evaluate_all(&joined, &ConservativeStrength);
    assert!(!find(&results, "Punarphoo").present);
    assert!(find(&results, "Visha").present);
}

#[test]
fn missing_moon_degrades_to_absent() {
    let c = partial(5.0, &[(Graha::Surya, 10.0), (Graha::Guru, 100.0)]);
    let results = evaluate_all(&c, &ConservativeStrength);
    let kema = find(&results, "Kemadruma");
    assert!(!kema.present);
    assert_eq!(kema.strength, 0.0);
    assert!(kema.details.contains("not found"), "{}", kema.details);
    assert!(present(&results, &SANKHYA).is_empty());
}

#[test]
fn unknown_yoga_is_an_error() {
    let c = four_house_chart();
    assert!(evaluate_one(&c, &ConservativeStrength, "Not A Yoga").is_err());
}

#[test]
fn results_serialize_with_type_field() {
    let c = four_house_chart();
    let y = evaluate_one(&c, &ConservativeStrength, "Yupa").unwrap();
    let v: serde_json::Value = serde_json::to_value(&y).unwrap();
    assert_eq!(v["type"], "Positive");
    assert_eq!(v["id"], "yupa");
    assert_eq!(v["present"], true);
}
