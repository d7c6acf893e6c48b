//! The chart model: one ephemeris snapshot plus memoized divisional charts.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use kundali_base::{ALL_DIVISIONS, DignitySet, Division, Graha, dignity_in_sign, varga_position};
use kundali_ephem::{BirthInputs, EphemerisProvider, EphemerisSnapshot};
use tracing::debug;

use crate::aspects::AspectRecord;
use crate::dasha::DashaTimeline;
use crate::divisional::DivisionalChart;
use crate::dump::ChartDump;
use crate::error::{ChartError, DashaError};

/// Immutable natal chart. Divisional charts are built on first request.
#[derive(Debug, Clone)]
pub struct ChartModel {
    birth: DateTime<Utc>,
    snapshot: EphemerisSnapshot,
    vargas: [OnceLock<DivisionalChart>; 16],
}

impl ChartModel {
    /// Chart from a birth instant and a ready snapshot.
    pub fn new(birth: DateTime<Utc>, snapshot: EphemerisSnapshot) -> Self {
        debug!(
            %birth,
            ascendant = snapshot.ascendant_longitude,
            planets = snapshot.planets.len(),
            "chart model built"
        );
        Self {
            birth,
            snapshot,
            vargas: std::array::from_fn(|_| OnceLock::new()),
        }
    }

    /// Validate inputs, query the provider and build the chart.
    pub fn from_inputs(
        inputs: &BirthInputs,
        provider: &dyn EphemerisProvider,
    ) -> Result<Self, ChartError> {
        let request = inputs.to_request()?;
        let snapshot = provider.snapshot(&request)?;
        Ok(Self::new(request.instant, snapshot))
    }

    pub fn birth(&self) -> DateTime<Utc> {
        self.birth
    }

    pub fn snapshot(&self) -> &EphemerisSnapshot {
        &self.snapshot
    }

    /// Natal sidereal longitude of a graha.
    pub fn longitude(&self, graha: Graha) -> Result<f64, ChartError> {
        self.snapshot
            .position(graha)
            .map(|p| p.longitude)
            .ok_or(ChartError::PlanetNotFound(graha))
    }

    /// Divisional chart, built once per division.
    pub fn varga(&self, division: Division) -> &DivisionalChart {
        self.vargas[division.index()].get_or_init(|| {
            debug!(%division, "materializing divisional chart");
            DivisionalChart::build(&self.snapshot, division)
        })
    }

    /// Divisional chart by numeric code (1, 2, 3, ... 60).
    pub fn get_varga(&self, code: u16) -> Result<&DivisionalChart, ChartError> {
        Ok(self.varga(Division::from_code(code)?))
    }

    pub fn rasi(&self) -> &DivisionalChart {
        self.varga(Division::D1)
    }

    pub fn navamsa(&self) -> &DivisionalChart {
        self.varga(Division::D9)
    }

    /// Divisions materialized so far.
    pub fn materialized(&self) -> Vec<Division> {
        ALL_DIVISIONS
            .into_iter()
            .filter(|d| self.vargas[d.index()].get().is_some())
            .collect()
    }

    /// Dignity of a graha's divisional sign and degree.
    pub fn divisional_dignity(
        &self,
        graha: Graha,
        division: Division,
    ) -> Result<DignitySet, ChartError> {
        let pos = varga_position(self.longitude(graha)?, division);
        Ok(dignity_in_sign(graha, pos.sign, pos.degree))
    }

    /// Aspect records in a division, for every graha or just one.
    pub fn aspects(
        &self,
        division_code: u16,
        planet: Option<Graha>,
    ) -> Result<Vec<AspectRecord>, ChartError> {
        let chart = self.get_varga(division_code)?;
        match planet {
            Some(g) => Ok(vec![chart.aspects_for(g)?]),
            None => Ok(chart.aspects()),
        }
    }

    /// Vimshottari timeline seeded by the natal Moon.
    pub fn dasha(&self) -> Result<DashaTimeline, DashaError> {
        let moon = self.longitude(Graha::Chandra)?;
        Ok(DashaTimeline::new(self.birth, moon))
    }

    /// Serializable dump of one division.
    pub fn dump(&self, division: Division) -> ChartDump {
        ChartDump::from_chart(self.varga(division))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use kundali_base::{ALL_GRAHAS, Dignity};
    use kundali_ephem::PlanetPosition;

    fn model() -> ChartModel {
        let snap = EphemerisSnapshot::new(
            100.0,
            ALL_GRAHAS
                .iter()
                .enumerate()
                .map(|(i, &g)| PlanetPosition::new(g, 17.0 + i as f64 * 37.0, false)),
        );
        ChartModel::new(Utc.with_ymd_and_hms(1990, 1, 1, 6, 30, 0).unwrap(), snap)
    }

    #[test]
    fn vargas_are_lazy_and_memoized() {
        let m = model();
        assert!(m.materialized().is_empty());
        let a = m.varga(Division::D9) as *const DivisionalChart;
        let b = m.varga(Division::D9) as *const DivisionalChart;
        assert_eq!(a, b);
        assert_eq!(m.materialized(), vec![Division::D9]);
    }

    #[test]
    fn unsupported_division_rejected() {
        let m = model();
        assert!(matches!(
            m.get_varga(5),
            Err(ChartError::Base(kundali_base::BaseError::UnsupportedDivision(5)))
        ));
        assert!(m.get_varga(60).is_ok());
    }

    #[test]
    fn model_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChartModel>();
    }

    #[test]
    fn divisional_dignity_uses_target_sign() {
        // Sun at 11 Aries: D1 exalted; D9 part 4 of a movable sign lands in Cancer.
        let snap = EphemerisSnapshot::new(0.0, [PlanetPosition::new(Graha::Surya, 11.0, false)]);
        let m = ChartModel::new(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(), snap);
        assert!(m.divisional_dignity(Graha::Surya, Division::D1).unwrap().contains(Dignity::Exalted));
        let d9 = m.divisional_dignity(Graha::Surya, Division::D9).unwrap();
        assert!(!d9.contains(Dignity::Exalted));
        assert_eq!(m.navamsa().placement(Graha::Surya).unwrap().sign.index(), 3);
    }

    #[test]
    fn aspects_single_planet() {
        let m = model();
        let recs = m.aspects(1, Some(Graha::Shani)).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].aspects.len(), 3);
        assert_eq!(m.aspects(1, None).unwrap().len(), 9);
    }
}
