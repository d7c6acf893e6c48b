//! Birth inputs: the boundary record every chart starts from.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::ayanamsha::{Ayanamsha, fold_name};
use crate::error::EphemerisError;
use crate::time::{local_to_utc, parse_utc_offset};

/// House systems. Only Whole Sign is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HouseSystem {
    #[default]
    #[serde(rename = "Whole Sign")]
    WholeSign,
}

impl HouseSystem {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::WholeSign => "Whole Sign",
        }
    }

    /// Parse a name, ignoring case, spaces, dashes and underscores.
    pub fn from_name(name: &str) -> Result<Self, EphemerisError> {
        match fold_name(name).as_str() {
            "wholesign" | "w" => Ok(Self::WholeSign),
            _ => Err(EphemerisError::UnsupportedHouseSystem(name.to_string())),
        }
    }
}

impl std::fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Local civil birth data plus the sidereal conventions to apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInputs {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Geographic latitude in degrees, north positive.
    pub latitude: f64,
    /// Geographic longitude in degrees, east positive.
    pub longitude: f64,
    /// UTC offset as `[+-]HH:MM`.
    pub utc_offset: String,
    #[serde(default = "default_ayanamsha_name")]
    pub ayanamsha: String,
    #[serde(default = "default_house_system_name")]
    pub house_system: String,
}

fn default_ayanamsha_name() -> String {
    Ayanamsha::default().name().to_string()
}

fn default_house_system_name() -> String {
    HouseSystem::default().name().to_string()
}

impl BirthInputs {
    /// Birth data with the default ayanamsha and house system.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        latitude: f64,
        longitude: f64,
        utc_offset: impl Into<String>,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            latitude,
            longitude,
            utc_offset: utc_offset.into(),
            ayanamsha: default_ayanamsha_name(),
            house_system: default_house_system_name(),
        }
    }

    pub fn with_ayanamsha(mut self, name: impl Into<String>) -> Self {
        self.ayanamsha = name.into();
        self
    }

    pub fn with_house_system(mut self, name: impl Into<String>) -> Self {
        self.house_system = name.into();
        self
    }

    /// Parsed UTC offset.
    pub fn offset(&self) -> Result<FixedOffset, EphemerisError> {
        parse_utc_offset(&self.utc_offset)
    }

    /// Birth instant in UTC.
    pub fn utc_instant(&self) -> Result<DateTime<Utc>, EphemerisError> {
        local_to_utc(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.offset()?,
        )
    }

    /// Validate every field and resolve names into a provider request.
    pub fn to_request(&self) -> Result<EphemerisRequest, EphemerisError> {
        if !self.latitude.is_finite() || self.latitude.abs() >= 90.0 {
            return Err(EphemerisError::InvalidLocation(format!(
                "latitude {} outside (-90, 90)",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || self.longitude.abs() > 180.0 {
            return Err(EphemerisError::InvalidLocation(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        Ok(EphemerisRequest {
            instant: self.utc_instant()?,
            latitude: self.latitude,
            longitude: self.longitude,
            ayanamsha: Ayanamsha::from_name(&self.ayanamsha)?,
            house_system: HouseSystem::from_name(&self.house_system)?,
        })
    }
}

/// A validated request for one moment and place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisRequest {
    pub instant: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub ayanamsha: Ayanamsha,
    pub house_system: HouseSystem,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi() -> BirthInputs {
        BirthInputs::new(1990, 1, 1, 12, 0, 0, 28.6139, 77.2090, "+05:30")
    }

    #[test]
    fn defaults() {
        let b = delhi();
        assert_eq!(b.ayanamsha, "Lahiri");
        assert_eq!(b.house_system, "Whole Sign");
        let req = b.to_request().unwrap();
        assert_eq!(req.ayanamsha, Ayanamsha::Lahiri);
        assert_eq!(req.house_system, HouseSystem::WholeSign);
        assert_eq!(req.instant.to_rfc3339(), "1990-01-01T06:30:00+00:00");
    }

    #[test]
    fn bad_timezone_rejected() {
        let mut b = delhi();
        b.utc_offset = "5:30".into();
        assert!(matches!(
            b.to_request(),
            Err(EphemerisError::InvalidTimezoneFormat(_))
        ));
    }

    #[test]
    fn placidus_rejected() {
        let b = delhi().with_house_system("Placidus");
        assert!(matches!(
            b.to_request(),
            Err(EphemerisError::UnsupportedHouseSystem(_))
        ));
    }

    #[test]
    fn unknown_ayanamsha_rejected() {
        let b = delhi().with_ayanamsha("Sayana");
        assert!(matches!(
            b.to_request(),
            Err(EphemerisError::UnknownAyanamsha(_))
        ));
    }

    #[test]
    fn pole_rejected() {
        let mut b = delhi();
        b.latitude = 90.0;
        assert!(matches!(b.to_request(), Err(EphemerisError::InvalidLocation(_))));
        let mut b = delhi();
        b.longitude = 181.0;
        assert!(matches!(b.to_request(), Err(EphemerisError::InvalidLocation(_))));
    }

    #[test]
    fn house_system_aliases() {
        assert_eq!(HouseSystem::from_name("whole_sign"), Ok(HouseSystem::WholeSign));
        assert_eq!(HouseSystem::from_name("Whole-Sign"), Ok(HouseSystem::WholeSign));
    }

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"{"year":2000,"month":6,"day":15,"hour":8,"minute":30,"second":0,
            "latitude":51.5,"longitude":-0.12,"utc_offset":"+01:00"}"#;
        let b: BirthInputs = serde_json::from_str(json).unwrap();
        assert_eq!(b.ayanamsha, "Lahiri");
        assert_eq!(b.house_system, "Whole Sign");
    }
}
