//! One divisional chart: twelve houses anchored on the divisional ascendant.
//!
//! House numbers passed to queries wrap modulo 12 (13 is house 1).

use kundali_base::{
    ALL_GRAHAS, Division, Graha, Rashi, dignity_set, house_of_sign, is_kendra, is_trikona,
    nth_house_from, rashi_lord_by_index, relative_house, sign_of_house, varga_position,
};
use kundali_ephem::EphemerisSnapshot;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::placement::{LagnaPlacement, PlanetPlacement};

/// A house and its occupants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub number: u8,
    pub sign: Rashi,
    /// Occupants in graha order (Sun first, Ketu last).
    pub planets: Vec<Graha>,
}

/// A chart in one division.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionalChart {
    division: Division,
    ascendant_sign: u8,
    lagna: LagnaPlacement,
    placements: Vec<PlanetPlacement>,
    houses: [House; 12],
}

pub(crate) fn wrap_house(house: u8) -> u8 {
    ((house as u16 + 11) % 12) as u8 + 1
}

impl DivisionalChart {
    /// Project a snapshot into `division`.
    pub fn build(snapshot: &EphemerisSnapshot, division: Division) -> Self {
        let asc_pos = varga_position(snapshot.ascendant_longitude, division);
        let ascendant_sign = asc_pos.sign;
        let lagna = LagnaPlacement::new(snapshot.ascendant_longitude, asc_pos);

        let placements: Vec<PlanetPlacement> = ALL_GRAHAS
            .iter()
            .filter_map(|&g| snapshot.position(g))
            .map(|p| {
                let pos = varga_position(p.longitude, division);
                PlanetPlacement::new(
                    p.graha,
                    p.longitude,
                    p.retrograde,
                    pos,
                    dignity_set(p.graha, p.longitude),
                    house_of_sign(ascendant_sign, pos.sign),
                )
            })
            .collect();

        let houses = std::array::from_fn(|i| {
            let number = i as u8 + 1;
            House {
                number,
                sign: Rashi::from_index(sign_of_house(ascendant_sign, number)),
                planets: placements
                    .iter()
                    .filter(|p| p.house == number)
                    .map(|p| p.graha)
                    .collect(),
            }
        });

        Self {
            division,
            ascendant_sign,
            lagna,
            placements,
            houses,
        }
    }

    pub fn division(&self) -> Division {
        self.division
    }

    /// Divisional ascendant sign, 0-based.
    pub fn ascendant_sign(&self) -> u8 {
        self.ascendant_sign
    }

    pub fn lagna(&self) -> &LagnaPlacement {
        &self.lagna
    }

    /// Placements in graha order; absent grahas are skipped.
    pub fn placements(&self) -> &[PlanetPlacement] {
        &self.placements
    }

    pub fn houses(&self) -> &[House; 12] {
        &self.houses
    }

    pub fn house(&self, house: u8) -> &House {
        &self.houses[wrap_house(house) as usize - 1]
    }

    /// Placement of a graha.
    pub fn placement(&self, graha: Graha) -> Result<&PlanetPlacement, ChartError> {
        self.placements
            .iter()
            .find(|p| p.graha == graha)
            .ok_or(ChartError::PlanetNotFound(graha))
    }

    pub fn contains(&self, graha: Graha) -> bool {
        self.placements.iter().any(|p| p.graha == graha)
    }

    /// Placement by English or Sanskrit name.
    pub fn planet_by_name(&self, name: &str) -> Result<&PlanetPlacement, ChartError> {
        self.placement(Graha::from_name(name)?)
    }

    pub fn house_of(&self, graha: Graha) -> Result<u8, ChartError> {
        Ok(self.placement(graha)?.house)
    }

    /// House occupied by a sign (0-based index).
    pub fn house_of_sign(&self, sign: u8) -> u8 {
        house_of_sign(self.ascendant_sign, sign % 12)
    }

    pub fn rashi_of_house(&self, house: u8) -> Rashi {
        self.house(house).sign
    }

    /// Lord of the sign on a house.
    pub fn lord_of_house(&self, house: u8) -> Graha {
        rashi_lord_by_index(self.rashi_of_house(house).index())
    }

    /// Dispositor: lord of the sign the graha occupies.
    pub fn lord_of_planet(&self, graha: Graha) -> Result<Graha, ChartError> {
        Ok(self.placement(graha)?.sign_lord)
    }

    /// Inclusive count from `a`'s house to `b`'s house.
    pub fn relative_house(&self, a: Graha, b: Graha) -> Result<u8, ChartError> {
        Ok(relative_house(self.house_of(a)?, self.house_of(b)?))
    }

    pub fn planets_in_house(&self, house: u8) -> &[Graha] {
        &self.house(house).planets
    }

    /// Planets in the `n`-th house from the graha `base`.
    pub fn planets_in_relative_house(&self, base: Graha, n: u8) -> Result<&[Graha], ChartError> {
        let from = self.house_of(base)?;
        Ok(self.planets_in_house(nth_house_from(from, wrap_house(n))))
    }

    /// Whether `graha` sits in a kendra counted from `base_house`.
    pub fn planet_in_kendra_from(&self, base_house: u8, graha: Graha) -> Result<bool, ChartError> {
        Ok(is_kendra(relative_house(wrap_house(base_house), self.house_of(graha)?)))
    }

    /// Whether `graha` sits in a trikona counted from `base_house`.
    pub fn planet_in_trikona_from(&self, base_house: u8, graha: Graha) -> Result<bool, ChartError> {
        Ok(is_trikona(relative_house(wrap_house(base_house), self.house_of(graha)?)))
    }

    /// Distinct occupied houses among `grahas`, ascending. Absent grahas are skipped.
    pub fn occupied_houses(&self, grahas: &[Graha]) -> Vec<u8> {
        let mut houses: Vec<u8> = grahas
            .iter()
            .filter_map(|&g| self.house_of(g).ok())
            .collect();
        houses.sort_unstable();
        houses.dedup();
        houses
    }

    /// Distinct occupied signs among `grahas`, ascending.
    pub fn occupied_signs(&self, grahas: &[Graha]) -> Vec<u8> {
        let mut signs: Vec<u8> = grahas
            .iter()
            .filter_map(|&g| self.placement(g).ok().map(|p| p.sign.index()))
            .collect();
        signs.sort_unstable();
        signs.dedup();
        signs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_ephem::PlanetPosition;

    fn snapshot() -> EphemerisSnapshot {
        // Lagna 15 Aries; one graha per sign from Aries onward.
        EphemerisSnapshot::new(
            15.0,
            ALL_GRAHAS
                .iter()
                .enumerate()
                .map(|(i, &g)| PlanetPosition::new(g, i as f64 * 30.0 + 10.0, false)),
        )
    }

    #[test]
    fn d1_houses_follow_signs() {
        let chart = DivisionalChart::build(&snapshot(), Division::D1);
        assert_eq!(chart.ascendant_sign(), 0);
        for (i, &g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(chart.house_of(g).unwrap(), i as u8 + 1);
        }
        assert_eq!(chart.rashi_of_house(4), Rashi::Karka);
        assert_eq!(chart.lord_of_house(10), Graha::Shani);
    }

    #[test]
    fn planet_count_is_nine() {
        let chart = DivisionalChart::build(&snapshot(), Division::D9);
        let total: usize = chart.houses().iter().map(|h| h.planets.len()).sum();
        assert_eq!(total, 9);
    }

    #[test]
    fn houses_rotate_from_ascendant() {
        for d in kundali_base::ALL_DIVISIONS {
            let chart = DivisionalChart::build(&snapshot(), d);
            for h in chart.houses() {
                assert_eq!(
                    h.sign.index(),
                    (chart.ascendant_sign() + h.number - 1) % 12,
                    "{d}"
                );
            }
        }
    }

    #[test]
    fn relative_queries() {
        let chart = DivisionalChart::build(&snapshot(), Division::D1);
        // Sun in 1, Jupiter in 5.
        assert_eq!(chart.relative_house(Graha::Surya, Graha::Guru).unwrap(), 5);
        assert_eq!(chart.relative_house(Graha::Guru, Graha::Surya).unwrap(), 9);
        assert_eq!(
            chart.planets_in_relative_house(Graha::Chandra, 2).unwrap(),
            &[Graha::Mangal]
        );
        assert!(chart.planet_in_kendra_from(1, Graha::Buddh).unwrap());
        assert!(chart.planet_in_trikona_from(1, Graha::Guru).unwrap());
        assert!(!chart.planet_in_trikona_from(1, Graha::Shukra).unwrap());
    }

    #[test]
    fn missing_planet_is_typed() {
        let snap = EphemerisSnapshot::new(0.0, [PlanetPosition::new(Graha::Surya, 5.0, false)]);
        let chart = DivisionalChart::build(&snap, Division::D1);
        assert_eq!(
            chart.house_of(Graha::Chandra),
            Err(ChartError::PlanetNotFound(Graha::Chandra))
        );
        assert!(chart.planet_by_name("Sun").is_ok());
        assert!(matches!(
            chart.planet_by_name("Pluto"),
            Err(ChartError::Base(_))
        ));
    }

    #[test]
    fn house_numbers_wrap() {
        assert_eq!(wrap_house(13), 1);
        assert_eq!(wrap_house(0), 12);
        assert_eq!(wrap_house(12), 12);
    }

    #[test]
    fn occupied_houses_dedup() {
        let snap = EphemerisSnapshot::new(
            0.0,
            [
                PlanetPosition::new(Graha::Surya, 5.0, false),
                PlanetPosition::new(Graha::Buddh, 12.0, false),
                PlanetPosition::new(Graha::Shani, 100.0, true),
            ],
        );
        let chart = DivisionalChart::build(&snap, Division::D1);
        assert_eq!(
            chart.occupied_houses(&[Graha::Surya, Graha::Buddh, Graha::Shani, Graha::Guru]),
            vec![1, 4]
        );
    }
}
