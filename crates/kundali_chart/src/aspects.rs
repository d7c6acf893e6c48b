//! Sign-based drishti and planetary relationships inside one divisional chart.
//!
//! The lagna never aspects. Ketu aspects like any other graha.

use kundali_base::{BENEFICS, Graha, MALEFICS, aspected_houses, aspects_house, nth_house_from};
use serde::{Deserialize, Serialize};

use crate::divisional::{DivisionalChart, wrap_house};
use crate::error::ChartError;

/// One aspected house and its occupants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectedHouse {
    pub house: u8,
    pub planets: Vec<Graha>,
}

/// Everything one graha aspects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRecord {
    pub planet: Graha,
    pub from_house: u8,
    pub aspects: Vec<AspectedHouse>,
}

impl AspectRecord {
    /// Aspected house numbers, in offset order.
    pub fn houses(&self) -> Vec<u8> {
        self.aspects.iter().map(|a| a.house).collect()
    }
}

/// Relationship variants for [`DivisionalChart::sambandha`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SambandhaKind {
    /// Same house.
    Conjunction,
    /// Either graha aspects the other.
    OneWayAspect,
    /// Each aspects the other.
    MutualAspect,
    /// Conjunction or any aspect.
    Any,
}

impl DivisionalChart {
    /// Aspect record for one graha.
    pub fn aspects_for(&self, graha: Graha) -> Result<AspectRecord, ChartError> {
        let from_house = self.house_of(graha)?;
        let aspects = aspected_houses(graha, from_house)
            .into_iter()
            .map(|house| AspectedHouse {
                house,
                planets: self.planets_in_house(house).to_vec(),
            })
            .collect();
        Ok(AspectRecord {
            planet: graha,
            from_house,
            aspects,
        })
    }

    /// Aspect records of every placed graha, in graha order.
    pub fn aspects(&self) -> Vec<AspectRecord> {
        self.placements()
            .iter()
            .filter_map(|p| self.aspects_for(p.graha).ok())
            .collect()
    }

    /// Whether `graha` aspects `house`.
    pub fn graha_aspects_house(&self, graha: Graha, house: u8) -> Result<bool, ChartError> {
        Ok(aspects_house(graha, self.house_of(graha)?, wrap_house(house)))
    }

    /// Placed members of `set` aspecting `house`.
    pub fn aspecting_from(&self, set: &[Graha], house: u8) -> Vec<Graha> {
        set.iter()
            .copied()
            .filter(|&g| self.graha_aspects_house(g, house).unwrap_or(false))
            .collect()
    }

    /// All placed grahas aspecting `house`.
    pub fn aspecting(&self, house: u8) -> Vec<Graha> {
        let all: Vec<Graha> = self.placements().iter().map(|p| p.graha).collect();
        self.aspecting_from(&all, house)
    }

    /// Any natural benefic aspects the house.
    pub fn is_house_benefic_aspected(&self, house: u8) -> bool {
        !self.aspecting_from(&BENEFICS, house).is_empty()
    }

    /// Any natural malefic aspects the house.
    pub fn is_house_malefic_aspected(&self, house: u8) -> bool {
        !self.aspecting_from(&MALEFICS, house).is_empty()
    }

    /// Same house.
    pub fn conjunct(&self, a: Graha, b: Graha) -> Result<bool, ChartError> {
        Ok(self.house_of(a)? == self.house_of(b)?)
    }

    /// `a` aspects the house `b` occupies.
    pub fn aspects_planet(&self, a: Graha, b: Graha) -> Result<bool, ChartError> {
        self.graha_aspects_house(a, self.house_of(b)?)
    }

    pub fn mutual_aspect(&self, a: Graha, b: Graha) -> Result<bool, ChartError> {
        Ok(self.aspects_planet(a, b)? && self.aspects_planet(b, a)?)
    }

    /// Relationship test of the requested kind.
    pub fn sambandha(&self, a: Graha, b: Graha, kind: SambandhaKind) -> Result<bool, ChartError> {
        Ok(match kind {
            SambandhaKind::Conjunction => self.conjunct(a, b)?,
            SambandhaKind::OneWayAspect => self.aspects_planet(a, b)? || self.aspects_planet(b, a)?,
            SambandhaKind::MutualAspect => self.mutual_aspect(a, b)?,
            SambandhaKind::Any => {
                self.conjunct(a, b)? || self.aspects_planet(a, b)? || self.aspects_planet(b, a)?
            }
        })
    }

    /// `a` sits in a sign ruled by `b` and `b` in a sign ruled by `a`.
    pub fn parivartana(&self, a: Graha, b: Graha) -> Result<bool, ChartError> {
        if a == b {
            return Ok(false);
        }
        Ok(self.lord_of_planet(a)? == b && self.lord_of_planet(b)? == a)
    }

    /// Members of `set` occupying `house`.
    pub fn occupants_from(&self, set: &[Graha], house: u8) -> Vec<Graha> {
        self.planets_in_house(house)
            .iter()
            .copied()
            .filter(|g| set.contains(g))
            .collect()
    }

    /// Members of `set` in both the 12th and the 2nd from `house`.
    pub fn is_hemmed_by(&self, set: &[Graha], house: u8) -> bool {
        let house = wrap_house(house);
        !self.occupants_from(set, nth_house_from(house, 12)).is_empty()
            && !self.occupants_from(set, nth_house_from(house, 2)).is_empty()
    }

    pub fn is_hemmed_by_malefics(&self, house: u8) -> bool {
        self.is_hemmed_by(&MALEFICS, house)
    }

    pub fn is_hemmed_by_benefics(&self, house: u8) -> bool {
        self.is_hemmed_by(&BENEFICS, house)
    }
}
