//! Vedic planet (graha) enum, natural benefic/malefic sets and rashi lordship.
//!
//! The 9 grahas are the seven classical planets plus the two lunar nodes.
//! Each rashi has a planetary lord; the nodes own no rashi.

use serde::{Deserialize, Serialize};

use crate::error::BaseError;
use crate::rashi::{ALL_RASHIS, Rashi};

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Graha {
    #[serde(rename = "Sun")]
    Surya,
    #[serde(rename = "Moon")]
    Chandra,
    #[serde(rename = "Mars")]
    Mangal,
    #[serde(rename = "Mercury")]
    Buddh,
    #[serde(rename = "Jupiter")]
    Guru,
    #[serde(rename = "Venus")]
    Shukra,
    #[serde(rename = "Saturn")]
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Natural benefics.
pub const BENEFICS: [Graha; 4] = [Graha::Chandra, Graha::Buddh, Graha::Guru, Graha::Shukra];

/// Natural malefics.
pub const MALEFICS: [Graha; 5] = [
    Graha::Surya,
    Graha::Mangal,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The five star-planets (tara grahas) that can form Mahapurusha yogas and
/// enter planetary war.
pub const TARA_GRAHAS: [Graha; 5] = [
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Rahu or Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Member of the natural benefic set.
    pub const fn is_benefic(self) -> bool {
        matches!(self, Self::Chandra | Self::Buddh | Self::Guru | Self::Shukra)
    }

    /// Member of the natural malefic set.
    pub const fn is_malefic(self) -> bool {
        !self.is_benefic()
    }

    /// Parse a graha from its English or Sanskrit name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Graha, BaseError> {
        let needle = name.trim();
        ALL_GRAHAS
            .iter()
            .copied()
            .find(|g| {
                g.english_name().eq_ignore_ascii_case(needle) || g.name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| BaseError::UnknownGraha(name.to_string()))
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika → Mangal
/// - Vrishabha/Tula → Shukra
/// - Mithuna/Kanya → Buddh
/// - Karka → Chandra
/// - Simha → Surya
/// - Dhanu/Meena → Guru
/// - Makara/Kumbha → Shani
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Lord of a rashi by 0-based index. Indices wrap modulo 12.
pub const fn rashi_lord_by_index(rashi_index: u8) -> Graha {
    rashi_lord(ALL_RASHIS[(rashi_index % 12) as usize])
}

/// Compute the n-th rashi from a given rashi (0-based indices, 1-based offset).
///
/// `nth_rashi_from(0, 1)` = 0 (same rashi), `nth_rashi_from(0, 2)` = 1 (next rashi).
pub const fn nth_rashi_from(rashi_index: u8, offset: u8) -> u8 {
    ((rashi_index as u16 + offset as u16 + 11) % 12) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_grahas_count() {
        assert_eq!(ALL_GRAHAS.len(), 9);
        assert_eq!(SAPTA_GRAHAS.len(), 7);
    }

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn benefic_malefic_partition() {
        for g in ALL_GRAHAS {
            assert_ne!(BENEFICS.contains(&g), MALEFICS.contains(&g), "{g}");
            assert_eq!(g.is_benefic(), BENEFICS.contains(&g));
        }
    }

    #[test]
    fn lordship_table() {
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Karka), Graha::Chandra);
        assert_eq!(rashi_lord(Rashi::Simha), Graha::Surya);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Meena), Graha::Guru);
    }

    #[test]
    fn nodes_own_nothing() {
        for r in ALL_RASHIS {
            assert!(!rashi_lord(r).is_node());
        }
    }

    #[test]
    fn lord_by_index_wraps() {
        assert_eq!(rashi_lord_by_index(12), Graha::Mangal);
        assert_eq!(rashi_lord_by_index(4), Graha::Surya);
    }

    #[test]
    fn nth_rashi() {
        assert_eq!(nth_rashi_from(0, 1), 0);
        assert_eq!(nth_rashi_from(0, 2), 1);
        assert_eq!(nth_rashi_from(11, 2), 0);
        assert_eq!(nth_rashi_from(3, 12), 2);
    }

    #[test]
    fn parse_names() {
        assert_eq!(Graha::from_name("saturn"), Ok(Graha::Shani));
        assert_eq!(Graha::from_name("Guru"), Ok(Graha::Guru));
        assert_eq!(Graha::from_name(" MOON "), Ok(Graha::Chandra));
        assert!(Graha::from_name("Pluto").is_err());
    }
}
