//! Evaluation context handed to every yoga rule.
//!
//! Houses are counted from the Rasi (D1) lagna unless a helper says
//! otherwise. Lord `Ln` means the ruler of the sign on house `n`.

use kundali_base::{
    Dignity, DignitySet, Graha, is_kendra, is_trikona, nth_house_from, relative_house,
    rashi_lord_by_index,
};
use kundali_chart::{ChartModel, DivisionalChart, SambandhaKind};

use crate::error::YogaError;
use crate::strength::StrengthPredicate;

/// Chart plus the strength policy for one evaluation pass.
pub struct YogaContext<'a> {
    chart: &'a ChartModel,
    rasi: &'a DivisionalChart,
    strength: &'a dyn StrengthPredicate,
}

impl<'a> YogaContext<'a> {
    pub fn new(chart: &'a ChartModel, strength: &'a dyn StrengthPredicate) -> Self {
        Self {
            chart,
            rasi: chart.rasi(),
            strength,
        }
    }

    pub fn chart(&self) -> &'a ChartModel {
        self.chart
    }

    pub fn rasi(&self) -> &'a DivisionalChart {
        self.rasi
    }

    pub fn navamsa(&self) -> &'a DivisionalChart {
        self.chart.navamsa()
    }

    pub fn strength_policy(&self) -> &'a dyn StrengthPredicate {
        self.strength
    }

    // -----------------------------------------------------------------------
    // Placement
    // -----------------------------------------------------------------------

    pub fn house(&self, graha: Graha) -> Result<u8, YogaError> {
        Ok(self.rasi.house_of(graha)?)
    }

    /// Rashi index a graha occupies in D1.
    pub fn sign(&self, graha: Graha) -> Result<u8, YogaError> {
        Ok(self.rasi.placement(graha)?.sign.index())
    }

    pub fn longitude(&self, graha: Graha) -> Result<f64, YogaError> {
        Ok(self.chart.longitude(graha)?)
    }

    pub fn dignity(&self, graha: Graha) -> Result<DignitySet, YogaError> {
        Ok(self.rasi.placement(graha)?.dignity)
    }

    pub fn is_exalted(&self, graha: Graha) -> Result<bool, YogaError> {
        Ok(self.dignity(graha)?.contains(Dignity::Exalted))
    }

    pub fn is_debilitated(&self, graha: Graha) -> Result<bool, YogaError> {
        Ok(self.dignity(graha)?.contains(Dignity::Debilitated))
    }

    pub fn occupants(&self, house: u8) -> &'a [Graha] {
        self.rasi.planets_in_house(house)
    }

    /// Whether any member of `set` occupies `house`.
    pub fn any_in(&self, set: &[Graha], house: u8) -> bool {
        self.occupants(house).iter().any(|g| set.contains(g))
    }

    pub fn in_houses(&self, graha: Graha, houses: &[u8]) -> Result<bool, YogaError> {
        Ok(houses.contains(&self.house(graha)?))
    }

    pub fn in_kendra(&self, graha: Graha) -> Result<bool, YogaError> {
        Ok(is_kendra(self.house(graha)?))
    }

    /// Kendra or trikona from the lagna.
    pub fn in_angle_or_trine(&self, graha: Graha) -> Result<bool, YogaError> {
        let h = self.house(graha)?;
        Ok(is_kendra(h) || is_trikona(h))
    }

    // -----------------------------------------------------------------------
    // Lordship
    // -----------------------------------------------------------------------

    pub fn lord(&self, house: u8) -> Graha {
        self.rasi.lord_of_house(house)
    }

    /// House occupied by the lord of `house`.
    pub fn lord_house(&self, house: u8) -> Result<u8, YogaError> {
        self.house(self.lord(house))
    }

    /// D1 dispositor of a graha.
    pub fn dispositor(&self, graha: Graha) -> Result<Graha, YogaError> {
        Ok(self.rasi.lord_of_planet(graha)?)
    }

    /// Lord of the Navamsa sign a graha occupies.
    pub fn navamsa_dispositor(&self, graha: Graha) -> Result<Graha, YogaError> {
        let sign = self.navamsa().placement(graha)?.sign.index();
        Ok(rashi_lord_by_index(sign))
    }

    // -----------------------------------------------------------------------
    // Relative positions
    // -----------------------------------------------------------------------

    /// Inclusive house count from `base` to `graha`.
    pub fn from(&self, base: Graha, graha: Graha) -> Result<u8, YogaError> {
        Ok(self.rasi.relative_house(base, graha)?)
    }

    /// Planets in the `n`-th house from `base`.
    pub fn occupants_from(&self, base: Graha, n: u8) -> Result<&'a [Graha], YogaError> {
        Ok(self.rasi.planets_in_relative_house(base, n)?)
    }

    /// House that is `n`-th from the house `base` occupies.
    pub fn house_from(&self, base: Graha, n: u8) -> Result<u8, YogaError> {
        Ok(nth_house_from(self.house(base)?, n))
    }

    /// `a` and `b` are in kendras from each other.
    pub fn mutual_kendra(&self, a: Graha, b: Graha) -> Result<bool, YogaError> {
        let (ha, hb) = (self.house(a)?, self.house(b)?);
        Ok(is_kendra(relative_house(ha, hb)))
    }

    pub fn conjunct(&self, a: Graha, b: Graha) -> Result<bool, YogaError> {
        Ok(self.rasi.conjunct(a, b)?)
    }

    pub fn sambandha(&self, a: Graha, b: Graha, kind: SambandhaKind) -> Result<bool, YogaError> {
        Ok(self.rasi.sambandha(a, b, kind)?)
    }

    pub fn parivartana(&self, a: Graha, b: Graha) -> Result<bool, YogaError> {
        Ok(self.rasi.parivartana(a, b)?)
    }

    pub fn aspects_house(&self, graha: Graha, house: u8) -> Result<bool, YogaError> {
        Ok(self.rasi.graha_aspects_house(graha, house)?)
    }

    // -----------------------------------------------------------------------
    // Strength
    // -----------------------------------------------------------------------

    /// Strength under the active policy.
    pub fn powerful(&self, graha: Graha) -> (bool, f64) {
        self.strength.strength(self.chart, graha)
    }
}

/// Graded weight of a kendra from the lagna; 0 elsewhere.
pub fn kendra_weight(house: u8) -> f64 {
    match house {
        1 => 1.0,
        4 => 0.75,
        7 => 0.9,
        10 => 0.75,
        _ => 0.0,
    }
}

/// Weight of a graha's natural beneficence.
pub fn benefic_weight(graha: Graha) -> f64 {
    match graha {
        Graha::Guru => 1.0,
        Graha::Shukra => 0.9,
        Graha::Buddh => 0.8,
        Graha::Chandra => 0.7,
        _ => 0.5,
    }
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Comma-joined English names.
pub fn names(grahas: &[Graha]) -> String {
    grahas
        .iter()
        .map(|g| g.english_name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights() {
        assert_eq!(kendra_weight(1), 1.0);
        assert_eq!(kendra_weight(7), 0.9);
        assert_eq!(kendra_weight(5), 0.0);
        assert_eq!(benefic_weight(Graha::Guru), 1.0);
        assert_eq!(benefic_weight(Graha::Shani), 0.5);
    }

    #[test]
    fn mean_of_nothing_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert!((mean(&[1.0, 0.5]) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn names_join() {
        assert_eq!(names(&[Graha::Surya, Graha::Chandra]), "Sun, Moon");
    }
}
