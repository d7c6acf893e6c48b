//! The ephemeris provider contract and a fixed-snapshot provider.

use kundali_base::{Graha, normalize_360};
use serde::{Deserialize, Serialize};

use crate::birth::EphemerisRequest;
use crate::error::EphemerisError;

/// Sidereal position of one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    /// Sidereal ecliptic longitude in [0, 360).
    pub longitude: f64,
    pub retrograde: bool,
}

impl PlanetPosition {
    pub fn new(graha: Graha, longitude: f64, retrograde: bool) -> Self {
        Self {
            graha,
            longitude: normalize_360(longitude),
            retrograde,
        }
    }
}

/// Everything a chart needs from an ephemeris for one moment and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSnapshot {
    /// Sidereal ascendant longitude in [0, 360).
    pub ascendant_longitude: f64,
    pub planets: Vec<PlanetPosition>,
}

impl EphemerisSnapshot {
    /// Snapshot with longitudes normalized to [0, 360).
    pub fn new(ascendant_longitude: f64, planets: impl IntoIterator<Item = PlanetPosition>) -> Self {
        Self {
            ascendant_longitude: normalize_360(ascendant_longitude),
            planets: planets
                .into_iter()
                .map(|p| PlanetPosition::new(p.graha, p.longitude, p.retrograde))
                .collect(),
        }
    }

    /// Position of a graha, if present.
    pub fn position(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.graha == graha)
    }

    /// Whether all nine grahas are present.
    pub fn is_complete(&self) -> bool {
        kundali_base::ALL_GRAHAS
            .iter()
            .all(|&g| self.position(g).is_some())
    }
}

/// Source of sidereal snapshots.
pub trait EphemerisProvider {
    fn snapshot(&self, request: &EphemerisRequest) -> Result<EphemerisSnapshot, EphemerisError>;
}

/// Returns the same snapshot for every request.
#[derive(Debug, Clone)]
pub struct StaticEphemeris {
    snapshot: EphemerisSnapshot,
}

impl StaticEphemeris {
    pub fn new(snapshot: EphemerisSnapshot) -> Self {
        Self { snapshot }
    }
}

impl EphemerisProvider for StaticEphemeris {
    fn snapshot(&self, _request: &EphemerisRequest) -> Result<EphemerisSnapshot, EphemerisError> {
        Ok(self.snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BirthInputs;

    #[test]
    fn normalizes_longitudes() {
        let snap = EphemerisSnapshot::new(-10.0, [PlanetPosition::new(Graha::Surya, 370.0, false)]);
        assert!((snap.ascendant_longitude - 350.0).abs() < 1e-12);
        assert!((snap.position(Graha::Surya).unwrap().longitude - 10.0).abs() < 1e-12);
        assert!(snap.position(Graha::Chandra).is_none());
        assert!(!snap.is_complete());
    }

    #[test]
    fn static_provider_replays() {
        let snap = EphemerisSnapshot::new(15.0, [PlanetPosition::new(Graha::Shani, 200.0, true)]);
        let provider = StaticEphemeris::new(snap.clone());
        let req = BirthInputs::new(2000, 1, 1, 0, 0, 0, 0.0, 0.0, "+00:00")
            .to_request()
            .unwrap();
        assert_eq!(provider.snapshot(&req).unwrap(), snap);
    }

    #[test]
    fn snapshot_json_uses_english_names() {
        let snap = EphemerisSnapshot::new(0.0, [PlanetPosition::new(Graha::Guru, 95.0, false)]);
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"Jupiter\""), "{json}");
    }
}
