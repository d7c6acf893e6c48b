//! Varga (divisional chart) mapping for the sixteen Shodashavarga divisions.
//!
//! Each rashi is split into N parts; part `k` of rashi `s` is projected onto
//! a target rashi, and the position inside the part is stretched to a full
//! 30 degrees. D30 is the exception: its five segments are unequal and
//! depend only on the parity of the rashi.

use serde::{Deserialize, Serialize};

use crate::error::BaseError;
use crate::rashi::{Element, Modality, Rashi, rashi_index_of};
use crate::util::normalize_360;

// ---------------------------------------------------------------------------
// Division enum
// ---------------------------------------------------------------------------

/// The sixteen supported divisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Division {
    D1,
    D2,
    D3,
    D4,
    D7,
    D9,
    D10,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
}

/// All divisions in ascending order.
pub const ALL_DIVISIONS: [Division; 16] = [
    Division::D1,
    Division::D2,
    Division::D3,
    Division::D4,
    Division::D7,
    Division::D9,
    Division::D10,
    Division::D12,
    Division::D16,
    Division::D20,
    Division::D24,
    Division::D27,
    Division::D30,
    Division::D40,
    Division::D45,
    Division::D60,
];

impl Division {
    /// Number of parts per rashi (the N of DN).
    pub const fn code(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D27 => 27,
            Self::D30 => 30,
            Self::D40 => 40,
            Self::D45 => 45,
            Self::D60 => 60,
        }
    }

    /// 0-based position in [`ALL_DIVISIONS`].
    pub const fn index(self) -> usize {
        match self {
            Self::D1 => 0,
            Self::D2 => 1,
            Self::D3 => 2,
            Self::D4 => 3,
            Self::D7 => 4,
            Self::D9 => 5,
            Self::D10 => 6,
            Self::D12 => 7,
            Self::D16 => 8,
            Self::D20 => 9,
            Self::D24 => 10,
            Self::D27 => 11,
            Self::D30 => 12,
            Self::D40 => 13,
            Self::D45 => 14,
            Self::D60 => 15,
        }
    }

    /// Classical name of the varga.
    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rasi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsa",
            Self::D7 => "Saptamsa",
            Self::D9 => "Navamsa",
            Self::D10 => "Dasamsa",
            Self::D12 => "Dwadasamsa",
            Self::D16 => "Shodasamsa",
            Self::D20 => "Vimsamsa",
            Self::D24 => "Chaturvimsamsa",
            Self::D27 => "Saptavimsamsa",
            Self::D30 => "Trimsamsa",
            Self::D40 => "Khavedamsa",
            Self::D45 => "Akshavedamsa",
            Self::D60 => "Shashtiamsa",
        }
    }

    /// Look up a division by its N. Anything outside the sixteen is rejected.
    pub fn from_code(code: u16) -> Result<Division, BaseError> {
        ALL_DIVISIONS
            .iter()
            .copied()
            .find(|d| d.code() == code)
            .ok_or(BaseError::UnsupportedDivision(code))
    }
}

impl TryFrom<u16> for Division {
    type Error = BaseError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Division::from_code(code)
    }
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "D{}", self.code())
    }
}

impl Serialize for Division {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}

impl<'de> Deserialize<'de> for Division {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u16::deserialize(deserializer)?;
        Division::from_code(code).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// Result of projecting a longitude into a division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VargaPosition {
    /// Target rashi index 0..=11.
    pub sign: u8,
    /// Degrees within the target rashi, [0, 30).
    pub degree: f64,
}

impl VargaPosition {
    /// Target rashi.
    pub const fn rashi(&self) -> Rashi {
        Rashi::from_index(self.sign)
    }

    /// Absolute longitude in the divisional zodiac.
    pub fn longitude(&self) -> f64 {
        self.sign as f64 * 30.0 + self.degree
    }
}

/// Largest representable degree strictly inside a rashi.
const MAX_DEGREE: f64 = 30.0 - 1e-12;

/// Odd-rashi D30 segments: (upper bound, target rashi).
const TRIMSAMSA_ODD: [(f64, u8); 5] = [(5.0, 0), (10.0, 10), (18.0, 8), (25.0, 2), (30.0, 6)];
/// Even-rashi D30 segments: (upper bound, target rashi).
const TRIMSAMSA_EVEN: [(f64, u8); 5] = [(5.0, 1), (12.0, 5), (20.0, 11), (25.0, 9), (30.0, 7)];

/// Start rashi chosen by modality: movable, fixed, dual.
fn by_modality(rashi: Rashi, starts: [u8; 3]) -> u8 {
    match rashi.modality() {
        Modality::Movable => starts[0],
        Modality::Fixed => starts[1],
        Modality::Dual => starts[2],
    }
}

/// Target rashi for equal-part divisions.
fn equal_part_target(division: Division, sign: u8, part: u16) -> u8 {
    let rashi = Rashi::from_index(sign);
    let s = sign as u16;
    let start: u16 = match division {
        Division::D1 => return sign,
        Division::D2 => {
            // First half of an odd rashi is Simha, of an even rashi Karka.
            let first = if rashi.is_odd() { 4 } else { 3 };
            return if part == 0 { first } else { 7 - first };
        }
        Division::D3 => return ((s + [0, 4, 8][part as usize % 3]) % 12) as u8,
        Division::D4 => return ((s + [0, 3, 6, 9][part as usize % 4]) % 12) as u8,
        Division::D7 => {
            if rashi.is_odd() {
                s
            } else {
                s + 6
            }
        }
        Division::D9 => s + by_modality(rashi, [0, 8, 4]) as u16,
        Division::D10 => {
            if rashi.is_odd() {
                s
            } else {
                s + 8
            }
        }
        Division::D12 | Division::D60 => s,
        Division::D16 | Division::D45 => by_modality(rashi, [0, 4, 8]) as u16,
        Division::D20 => by_modality(rashi, [0, 8, 4]) as u16,
        Division::D24 => {
            if rashi.is_odd() {
                4
            } else {
                3
            }
        }
        Division::D27 => match rashi.element() {
            Element::Fire => 0,
            Element::Earth => 3,
            Element::Air => 6,
            Element::Water => 9,
        },
        Division::D40 => {
            if rashi.is_odd() {
                0
            } else {
                6
            }
        }
        // Unequal segments, handled by `trimsamsa`.
        Division::D30 => s,
    };
    ((start + part) % 12) as u8
}

/// D30 mapping: (target rashi, degree stretched within the segment).
fn trimsamsa(rashi: Rashi, pos: f64) -> VargaPosition {
    let table = if rashi.is_odd() {
        &TRIMSAMSA_ODD
    } else {
        &TRIMSAMSA_EVEN
    };
    let mut lower = 0.0;
    for &(upper, target) in table {
        // A boundary value falls into the higher segment.
        if pos < upper {
            let degree = ((pos - lower) / (upper - lower) * 30.0).clamp(0.0, MAX_DEGREE);
            return VargaPosition {
                sign: target,
                degree,
            };
        }
        lower = upper;
    }
    let (_, target) = table[4];
    VargaPosition {
        sign: target,
        degree: 0.0,
    }
}

/// Project a sidereal longitude into a division.
pub fn varga_position(sidereal_lon: f64, division: Division) -> VargaPosition {
    let lon = normalize_360(sidereal_lon);
    let sign = rashi_index_of(lon);
    let pos = lon - sign as f64 * 30.0;

    if division == Division::D30 {
        return trimsamsa(Rashi::from_index(sign), pos);
    }

    let parts = division.code();
    let part_size = 30.0 / parts as f64;
    let part = ((pos / part_size).floor() as u16).min(parts - 1);
    let offset = pos - part as f64 * part_size;
    let degree = (offset / part_size * 30.0).clamp(0.0, MAX_DEGREE);

    VargaPosition {
        sign: equal_part_target(division, sign, part),
        degree,
    }
}

/// Project a longitude into a division given by its numeric code.
pub fn varga_position_by_code(sidereal_lon: f64, code: u16) -> Result<VargaPosition, BaseError> {
    Ok(varga_position(sidereal_lon, Division::from_code(code)?))
}
