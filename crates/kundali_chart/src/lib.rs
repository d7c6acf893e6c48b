//! Natal chart model over a sidereal ephemeris snapshot.
//!
//! This crate provides:
//! - `ChartModel` with lazily memoized divisional charts
//! - House, lord and relationship queries on each `DivisionalChart`
//! - Sign-based aspect records and sambandha tests
//! - The dated Vimshottari `DashaTimeline`
//! - Serializable chart and dasha dumps

pub mod aspects;
pub mod dasha;
pub mod divisional;
pub mod dump;
pub mod error;
pub mod model;
pub mod placement;

pub use aspects::{AspectRecord, AspectedHouse, SambandhaKind};
pub use dasha::{CurrentDasha, DashaTimeline, DatedPeriod, start_of_day};
pub use divisional::{DivisionalChart, House};
pub use dump::{AntardashaDump, ChartDump, DashaDump, HouseDump, LAGNA_KEY, MahadashaDump, PlacementDump};
pub use error::{ChartError, DashaError};
pub use model::ChartModel;
pub use placement::{LagnaPlacement, PlanetPlacement};
