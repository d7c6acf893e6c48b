//! Yoga detection over a natal `ChartModel`.
//!
//! This crate provides:
//! - `YogaResult` with a `[0, 1]` strength and a Positive/Neutral/Negative polarity
//! - `YogaRegistry`: ordered rule registration with grouped family evaluation
//! - Pluggable `StrengthPredicate` policies for "powerful" grahas
//! - A built-in catalog of classical yogas, available through [`catalog()`]

pub mod catalog;
pub mod context;
pub mod error;
pub mod registry;
pub mod result;
pub mod strength;

pub use context::YogaContext;
pub use error::YogaError;
pub use registry::{GroupFn, RuleFn, YogaRegistry, catalog};
pub use result::{Outcome, Polarity, YogaResult, slugify};
pub use strength::{ConservativeStrength, NavamsaBackedStrength, StrengthPolicy, StrengthPredicate};

use kundali_chart::ChartModel;

/// Evaluate the full catalog against a chart.
pub fn evaluate_all(chart: &ChartModel, strength: &dyn StrengthPredicate) -> Vec<YogaResult> {
    let ctx = YogaContext::new(chart, strength);
    catalog().compute_all(&ctx)
}

/// Evaluate one catalog yoga by name or slug.
pub fn evaluate_one(
    chart: &ChartModel,
    strength: &dyn StrengthPredicate,
    name: &str,
) -> Result<YogaResult, YogaError> {
    let ctx = YogaContext::new(chart, strength);
    catalog().evaluate(&ctx, name)
}
