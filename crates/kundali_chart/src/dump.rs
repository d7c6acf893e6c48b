//! Serializable chart and dasha dumps.
//!
//! Chart dumps are keyed `house_1` .. `house_12`; the lagna appears under
//! `house_1` as the pseudo-planet `lagna`. Degrees are rounded to 1e-6 so a
//! dump survives a JSON round trip unchanged.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use kundali_base::{Graha, Nakshatra, Rashi};
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::divisional::DivisionalChart;

/// Key of the lagna pseudo-planet.
pub const LAGNA_KEY: &str = "lagna";

const SCALE: f64 = 1e6;

/// Round to 1e-6 without leaving the 30-degree sign `x` falls in.
fn round6(x: f64) -> f64 {
    let upper = ((x / 30.0).floor() + 1.0) * 30.0;
    let r = (x * SCALE).round() / SCALE;
    if r >= upper { (upper * SCALE - 1.0) / SCALE } else { r }
}

/// One body in a house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementDump {
    pub longitude: f64,
    pub degree: f64,
    pub retrograde: bool,
    pub rashi_lord: Graha,
    pub nakshatra: Nakshatra,
    pub nakshatra_lord: Graha,
    pub pada: u8,
}

/// One house: its sign and the bodies in it, keyed by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseDump {
    pub sign: Rashi,
    pub planets: BTreeMap<String, PlacementDump>,
}

/// Twelve-house dump of one divisional chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDump {
    pub houses: Vec<HouseDump>,
}

impl ChartDump {
    pub fn from_chart(chart: &DivisionalChart) -> Self {
        let mut houses: Vec<HouseDump> = chart
            .houses()
            .iter()
            .map(|h| HouseDump {
                sign: h.sign,
                planets: BTreeMap::new(),
            })
            .collect();

        let lagna = chart.lagna();
        houses[0].planets.insert(
            LAGNA_KEY.to_string(),
            PlacementDump {
                longitude: round6(lagna.longitude),
                degree: round6(lagna.degree),
                retrograde: lagna.retrograde(),
                rashi_lord: lagna.sign_lord,
                nakshatra: lagna.nakshatra,
                nakshatra_lord: lagna.nakshatra_lord,
                pada: lagna.pada,
            },
        );
        for p in chart.placements() {
            houses[p.house as usize - 1].planets.insert(
                p.graha.english_name().to_string(),
                PlacementDump {
                    longitude: round6(p.longitude),
                    degree: round6(p.degree),
                    retrograde: p.retrograde,
                    rashi_lord: p.sign_lord,
                    nakshatra: p.nakshatra,
                    nakshatra_lord: p.nakshatra_lord,
                    pada: p.pada,
                },
            );
        }
        Self { houses }
    }

    /// House 1..=12.
    pub fn house(&self, number: u8) -> Option<&HouseDump> {
        self.houses.get((number as usize).checked_sub(1)?)
    }

    /// Bodies across all houses, lagna included.
    pub fn body_count(&self) -> usize {
        self.houses.iter().map(|h| h.planets.len()).sum()
    }
}

impl Serialize for ChartDump {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.houses.len()))?;
        for (i, house) in self.houses.iter().enumerate() {
            map.serialize_entry(&format!("house_{}", i + 1), house)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ChartDump {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut raw = BTreeMap::<String, HouseDump>::deserialize(deserializer)?;
        let houses = (1..=12)
            .map(|i| {
                let key = format!("house_{i}");
                raw.remove(&key)
                    .ok_or_else(|| D::Error::custom(format!("missing {key}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(extra) = raw.keys().next() {
            return Err(D::Error::custom(format!("unexpected key {extra}")));
        }
        Ok(Self { houses })
    }
}

// ---------------------------------------------------------------------------
// Dasha dump
// ---------------------------------------------------------------------------

pub(crate) mod ddmmyyyy {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%d-%m-%Y";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// One antardasha in the nested dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntardashaDump {
    pub bhuthi: Graha,
    #[serde(with = "ddmmyyyy")]
    pub start: NaiveDate,
    #[serde(with = "ddmmyyyy")]
    pub end: NaiveDate,
}

/// One mahadasha with its nine antardashas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MahadashaDump {
    pub mahadasha: Graha,
    #[serde(with = "ddmmyyyy")]
    pub start: NaiveDate,
    #[serde(with = "ddmmyyyy")]
    pub end: NaiveDate,
    pub antardasha: Vec<AntardashaDump>,
}

/// Nested dasha dump: nine mahadashas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashaDump(pub Vec<MahadashaDump>);

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_base::Division;
    use kundali_ephem::{EphemerisSnapshot, PlanetPosition};
    use pretty_assertions::assert_eq;

    fn dump() -> ChartDump {
        let snap = EphemerisSnapshot::new(
            12.345678912,
            [
                PlanetPosition::new(Graha::Surya, 256.87123456789, false),
                PlanetPosition::new(Graha::Shani, 22.5, true),
            ],
        );
        ChartDump::from_chart(&DivisionalChart::build(&snap, Division::D1))
    }

    #[test]
    fn keys_are_house_numbers_in_order() {
        let json = serde_json::to_string(&dump()).unwrap();
        let h1 = json.find("\"house_1\"").unwrap();
        let h2 = json.find("\"house_2\"").unwrap();
        let h12 = json.find("\"house_12\"").unwrap();
        assert!(h1 < h2 && h2 < h12);
    }

    #[test]
    fn lagna_lives_in_first_house() {
        let d = dump();
        let h1 = d.house(1).unwrap();
        assert!(h1.planets.contains_key(LAGNA_KEY));
        assert!(!h1.planets[LAGNA_KEY].retrograde);
        assert!(h1.planets["Saturn"].retrograde);
        assert_eq!(d.body_count(), 3);
        assert!(d.house(0).is_none());
    }

    #[test]
    fn degrees_are_rounded() {
        let d = dump();
        let sun = &d.house(9).unwrap().planets["Sun"];
        assert_eq!(sun.longitude, 256.871235);
    }

    #[test]
    fn rounding_stays_inside_the_sign() {
        assert_eq!(round6(29.9999996), 29.999999);
        assert_eq!(round6(359.9999999), 359.999999);
        assert_eq!(round6(30.0000001), 30.0);

        let snap = EphemerisSnapshot::new(
            5.0,
            [PlanetPosition::new(Graha::Mangal, 59.9999996, false)],
        );
        let d = ChartDump::from_chart(&DivisionalChart::build(&snap, Division::D1));
        let mars = &d.house(2).unwrap().planets["Mars"];
        assert!(mars.degree < 30.0, "{}", mars.degree);
        assert!(mars.longitude < 60.0, "{}", mars.longitude);
        let json = serde_json::to_string(&d).unwrap();
        let back: ChartDump = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn json_round_trip_is_identical() {
        let d = dump();
        let json = serde_json::to_string(&d).unwrap();
        let back: ChartDump = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
        assert_eq!(serde_json::to_string(&back).unwrap(), json);
    }

    #[test]
    fn missing_house_rejected() {
        let err = serde_json::from_str::<ChartDump>("{}").unwrap_err();
        assert!(err.to_string().contains("missing house_1"), "{err}");
    }

    #[test]
    fn dasha_dates_use_day_month_year() {
        let a = AntardashaDump {
            bhuthi: Graha::Shukra,
            start: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2010, 12, 31).unwrap(),
        };
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(
            json,
            r#"{"bhuthi":"Venus","start":"01-01-1990","end":"31-12-2010"}"#
        );
        let back: AntardashaDump = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
