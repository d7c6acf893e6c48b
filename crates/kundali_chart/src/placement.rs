//! Per-division placement records.

use kundali_base::{
    DignitySet, Graha, Nakshatra, Rashi, VargaPosition, nakshatra_from_longitude,
    rashi_lord_by_index,
};
use serde::{Deserialize, Serialize};

/// A graha placed in a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPlacement {
    pub graha: Graha,
    /// Natal sidereal longitude.
    pub longitude: f64,
    /// Degree inside the target sign, [0, 30).
    pub degree: f64,
    /// Target sign in this division.
    pub sign: Rashi,
    pub sign_lord: Graha,
    /// Nakshatra of the natal longitude.
    pub nakshatra: Nakshatra,
    pub nakshatra_lord: Graha,
    pub pada: u8,
    pub retrograde: bool,
    /// Dignity in the natal (D1) sign.
    pub dignity: DignitySet,
    /// House 1..=12 from the divisional ascendant.
    pub house: u8,
}

impl PlanetPlacement {
    pub(crate) fn new(
        graha: Graha,
        longitude: f64,
        retrograde: bool,
        position: VargaPosition,
        dignity: DignitySet,
        house: u8,
    ) -> Self {
        let nak = nakshatra_from_longitude(longitude);
        Self {
            graha,
            longitude,
            degree: position.degree,
            sign: position.rashi(),
            sign_lord: rashi_lord_by_index(position.sign),
            nakshatra: nak.nakshatra,
            nakshatra_lord: nak.lord,
            pada: nak.pada,
            retrograde,
            dignity,
            house,
        }
    }
}

/// The ascendant placed in a divisional chart. Always in house 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagnaPlacement {
    pub longitude: f64,
    pub degree: f64,
    pub sign: Rashi,
    pub sign_lord: Graha,
    pub nakshatra: Nakshatra,
    pub nakshatra_lord: Graha,
    pub pada: u8,
}

impl LagnaPlacement {
    pub(crate) fn new(longitude: f64, position: VargaPosition) -> Self {
        let nak = nakshatra_from_longitude(longitude);
        Self {
            longitude,
            degree: position.degree,
            sign: position.rashi(),
            sign_lord: rashi_lord_by_index(position.sign),
            nakshatra: nak.nakshatra,
            nakshatra_lord: nak.lord,
            pada: nak.pada,
        }
    }

    /// The lagna never moves backward.
    pub const fn retrograde(&self) -> bool {
        false
    }
}
