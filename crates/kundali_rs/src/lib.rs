//! Convenience wrapper for the kundali engine.
//!
//! High-level functions that go from birth data to a chart, a dasha
//! timeline and yoga results without wiring an ephemeris, a strength policy
//! or the yoga registry by hand.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use kundali_rs::*;
//!
//! let inputs = BirthInputs::new(1990, 1, 1, 12, 0, 0, 28.6139, 77.2090, "+05:30");
//! let chart = build_chart(&inputs).unwrap();
//! let navamsa = chart.get_varga(9).unwrap();
//! let yogas = evaluate_yogas(&chart, &YogaOptions::default()).unwrap();
//! let dasha = build_dasha(&inputs).unwrap().to_nested();
//! ```

pub mod convenience;
pub mod error;
pub mod options;

pub use convenience::{
    build_chart, build_chart_with, build_chart_with_options, build_dasha, chart_dump, dasha_dump,
    evaluate_yoga, evaluate_yogas,
};
pub use error::KundaliError;
pub use options::{ChartOptions, YogaOptions, options_from_config};

// Re-export the types callers touch so a single dependency is enough.
pub use kundali_base::dasha::DashaLevel;
pub use kundali_base::{
    BaseError, Division, Graha, Rashi, VargaPosition, rashi_from_longitude, varga_position,
    varga_position_by_code,
};
pub use kundali_chart::{
    AspectRecord, ChartDump, ChartError, ChartModel, CurrentDasha, DashaDump, DashaError,
    DashaTimeline, DatedPeriod, DivisionalChart, LAGNA_KEY, start_of_day,
};
pub use kundali_config::{ConfigError, KundaliConfig, LOG_LEVELS, load_config};
pub use kundali_ephem::{
    AnalyticEphemeris, Ayanamsha, BirthInputs, EphemerisError, EphemerisProvider,
    EphemerisSnapshot, HouseSystem, PlanetPosition, StaticEphemeris,
};
pub use kundali_yoga::{Polarity, StrengthPolicy, YogaError, YogaResult};
