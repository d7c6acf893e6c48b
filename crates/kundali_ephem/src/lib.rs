//! Ephemeris adapter contract and the birth-input boundary.
//!
//! This crate provides:
//! - `BirthInputs` validation (UTC offset, calendar, location, names)
//! - Ayanamsha systems with IAU 2006 precession
//! - The `EphemerisProvider` trait, a replaying `StaticEphemeris` and the
//!   self-contained `AnalyticEphemeris`

pub mod analytic;
pub mod ayanamsha;
pub mod birth;
pub mod error;
pub mod provider;
pub mod time;

pub use analytic::AnalyticEphemeris;
pub use ayanamsha::{ALL_AYANAMSHAS, Ayanamsha, ayanamsha_deg, jd_to_centuries};
pub use birth::{BirthInputs, EphemerisRequest, HouseSystem};
pub use error::EphemerisError;
pub use provider::{EphemerisProvider, EphemerisSnapshot, PlanetPosition, StaticEphemeris};
pub use time::{format_utc_offset, julian_day, local_to_utc, parse_utc_offset};
