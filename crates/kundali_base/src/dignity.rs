//! Graha dignity: exaltation, moolatrikona, own sign and natural friendship.
//!
//! A graha in a rashi holds a set of labels rather than a single rank:
//! Buddh in Kanya 16-20 deg is Exalted, Moolatrikona and Own at once. When
//! none of the sign-based labels apply, the natural relationship with the
//! rashi lord is recorded instead, so every set is non-empty.
//!
//! Node convention: Rahu is exalted in Vrishabha and Ketu in Vrischika,
//! debilitated in the opposite rashi; nodes own no rashi.

use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::graha::{Graha, rashi_lord_by_index};
use crate::rashi::rashi_index_of;
use crate::util::normalize_360;

// ---------------------------------------------------------------------------
// Exaltation & Debilitation
// ---------------------------------------------------------------------------

/// Deep exaltation point (sidereal degrees).
///
/// Sun 10 Ari=10, Moon 3 Tau=33, Mars 28 Cap=298, Mercury 15 Vir=165,
/// Jupiter 5 Can=95, Venus 27 Pis=357, Saturn 20 Lib=200,
/// Rahu 20 Tau=50, Ketu 20 Sco=230.
pub const fn deep_exaltation_degree(graha: Graha) -> f64 {
    match graha {
        Graha::Surya => 10.0,
        Graha::Chandra => 33.0,
        Graha::Mangal => 298.0,
        Graha::Buddh => 165.0,
        Graha::Guru => 95.0,
        Graha::Shukra => 357.0,
        Graha::Shani => 200.0,
        Graha::Rahu => 50.0,
        Graha::Ketu => 230.0,
    }
}

/// Rashi index of exaltation.
pub const fn exaltation_sign(graha: Graha) -> u8 {
    (deep_exaltation_degree(graha) / 30.0) as u8
}

/// Rashi index of debilitation (7th from exaltation).
pub const fn debilitation_sign(graha: Graha) -> u8 {
    (exaltation_sign(graha) + 6) % 12
}

/// Moolatrikona range: (rashi_index, start_deg_in_rashi, end_deg_in_rashi).
/// Returns None for Rahu/Ketu.
///
/// Sun 0-20 Leo, Moon 4-20 Tau, Mars 0-12 Ari, Mercury 16-20 Vir,
/// Jupiter 0-10 Sag, Venus 0-15 Lib, Saturn 0-20 Aqu.
pub const fn moolatrikona_range(graha: Graha) -> Option<(u8, f64, f64)> {
    match graha {
        Graha::Surya => Some((4, 0.0, 20.0)),
        Graha::Chandra => Some((1, 4.0, 20.0)),
        Graha::Mangal => Some((0, 0.0, 12.0)),
        Graha::Buddh => Some((5, 16.0, 20.0)),
        Graha::Guru => Some((8, 0.0, 10.0)),
        Graha::Shukra => Some((6, 0.0, 15.0)),
        Graha::Shani => Some((10, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Own-sign rashis. Empty for the nodes.
pub const fn own_signs(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Surya => &[4],
        Graha::Chandra => &[3],
        Graha::Mangal => &[0, 7],
        Graha::Buddh => &[2, 5],
        Graha::Guru => &[8, 11],
        Graha::Shukra => &[1, 6],
        Graha::Shani => &[9, 10],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

// ---------------------------------------------------------------------------
// Natural friendship (Naisargika Maitri)
// ---------------------------------------------------------------------------

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NaturalRelation {
    Friend,
    Neutral,
    Enemy,
}

/// Natural friendship of `graha` towards `other`.
///
/// Nodes behave like Shani: friends Buddh, Shukra, Shani; enemies Surya,
/// Chandra, Mangal; Guru neutral.
pub const fn natural_relation(graha: Graha, other: Graha) -> NaturalRelation {
    use Graha::*;
    use NaturalRelation::*;

    match (graha, other) {
        (a, b) if a.index() == b.index() => Neutral,
        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani | Rahu | Ketu) => Enemy,
        (Chandra, Surya | Buddh) => Friend,
        (Chandra, Rahu | Ketu) => Enemy,
        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh | Rahu | Ketu) => Enemy,
        (Buddh, Surya | Shukra | Rahu | Ketu) => Friend,
        (Buddh, Chandra) => Enemy,
        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,
        (Shukra, Buddh | Shani | Rahu | Ketu) => Friend,
        (Shukra, Surya | Chandra) => Enemy,
        (Shani, Buddh | Shukra | Rahu | Ketu) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,
        (Rahu | Ketu, Buddh | Shukra | Shani) => Friend,
        (Rahu | Ketu, Surya | Chandra | Mangal) => Enemy,
        _ => Neutral,
    }
}

// ---------------------------------------------------------------------------
// Dignity labels
// ---------------------------------------------------------------------------

/// A single dignity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    MoolaTrikona,
    Own,
    Friend,
    Neutral,
    Enemy,
    Debilitated,
}

/// All labels in rank order.
pub const ALL_DIGNITIES: [Dignity; 7] = [
    Dignity::Exalted,
    Dignity::MoolaTrikona,
    Dignity::Own,
    Dignity::Friend,
    Dignity::Neutral,
    Dignity::Enemy,
    Dignity::Debilitated,
];

impl Dignity {
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Label text.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::MoolaTrikona => "MoolaTrikona",
            Self::Own => "Own",
            Self::Friend => "Friend",
            Self::Neutral => "Neutral",
            Self::Enemy => "Enemy",
            Self::Debilitated => "Debilitated",
        }
    }

    /// Score used for graded yoga strengths.
    pub const fn score(self) -> f64 {
        match self {
            Self::Exalted => 1.0,
            Self::MoolaTrikona => 0.85,
            Self::Own => 0.75,
            Self::Friend => 0.6,
            Self::Neutral => 0.5,
            Self::Enemy => 0.35,
            Self::Debilitated => 0.2,
        }
    }
}

/// Ordered set of dignity labels (iteration follows rank order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DignitySet(u8);

impl DignitySet {
    /// Empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a label.
    pub const fn with(self, d: Dignity) -> Self {
        Self(self.0 | d.bit())
    }

    /// Membership test.
    pub const fn contains(self, d: Dignity) -> bool {
        self.0 & d.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Labels in rank order.
    pub fn iter(self) -> impl Iterator<Item = Dignity> {
        ALL_DIGNITIES.into_iter().filter(move |d| self.contains(*d))
    }

    /// Highest-ranked label (Exalted first, Debilitated last).
    pub fn best(self) -> Option<Dignity> {
        self.iter().next()
    }

    /// Exalted, moolatrikona or own sign.
    pub const fn is_dignified(self) -> bool {
        self.contains(Dignity::Exalted)
            || self.contains(Dignity::MoolaTrikona)
            || self.contains(Dignity::Own)
    }

    /// Own sign or exaltation (moolatrikona rashis are all own or exaltation rashis).
    pub const fn is_own_or_exalted(self) -> bool {
        self.contains(Dignity::Exalted) || self.contains(Dignity::Own)
    }

    /// Score of the best label; 0 for an empty set.
    pub fn score(self) -> f64 {
        self.best().map(Dignity::score).unwrap_or(0.0)
    }
}

impl FromIterator<Dignity> for DignitySet {
    fn from_iter<I: IntoIterator<Item = Dignity>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl std::fmt::Display for DignitySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter().map(Dignity::name).collect();
        f.write_str(&names.join("+"))
    }
}

impl Serialize for DignitySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for d in self.iter() {
            seq.serialize_element(&d)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for DignitySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let labels = Vec::<Dignity>::deserialize(deserializer)?;
        Ok(labels.into_iter().collect())
    }
}

/// Dignity set of a graha at a sidereal longitude.
pub fn dignity_set(graha: Graha, sidereal_lon: f64) -> DignitySet {
    let lon = normalize_360(sidereal_lon);
    let sign = rashi_index_of(lon);
    let deg_in_sign = lon - sign as f64 * 30.0;
    dignity_in_sign(graha, sign, deg_in_sign)
}

/// Dignity set of a graha from rashi index and degrees within the rashi.
pub fn dignity_in_sign(graha: Graha, sign: u8, degrees_in_sign: f64) -> DignitySet {
    let sign = sign % 12;
    let mut set = DignitySet::empty();

    if sign == exaltation_sign(graha) {
        set = set.with(Dignity::Exalted);
    } else if sign == debilitation_sign(graha) {
        set = set.with(Dignity::Debilitated);
    }
    if let Some((mt_sign, start, end)) = moolatrikona_range(graha) {
        if sign == mt_sign && degrees_in_sign >= start && degrees_in_sign < end {
            set = set.with(Dignity::MoolaTrikona);
        }
    }
    if own_signs(graha).contains(&sign) {
        set = set.with(Dignity::Own);
    }

    if set.is_empty() {
        set = set.with(match natural_relation(graha, rashi_lord_by_index(sign)) {
            NaturalRelation::Friend => Dignity::Friend,
            NaturalRelation::Neutral => Dignity::Neutral,
            NaturalRelation::Enemy => Dignity::Enemy,
        });
    }
    set
}

/// Signed distance of a longitude from the graha's deep exaltation point, in (-180, 180].
pub fn distance_from_deep_exaltation(graha: Graha, sidereal_lon: f64) -> f64 {
    let d = normalize_360(sidereal_lon - deep_exaltation_degree(graha));
    if d > 180.0 { d - 360.0 } else { d }
}
