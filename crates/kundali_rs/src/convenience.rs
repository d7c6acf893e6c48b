use kundali_chart::{ChartDump, ChartModel, DashaDump, DashaTimeline};
use kundali_ephem::{AnalyticEphemeris, BirthInputs, EphemerisProvider};
use kundali_yoga::{YogaContext, YogaResult, catalog};
use tracing::debug;

use crate::error::KundaliError;
use crate::options::{ChartOptions, YogaOptions};

/// Build a chart with the built-in analytic ephemeris.
pub fn build_chart(inputs: &BirthInputs) -> Result<ChartModel, KundaliError> {
    build_chart_with(inputs, &AnalyticEphemeris::new())
}

/// Build a chart from any ephemeris provider.
pub fn build_chart_with(
    inputs: &BirthInputs,
    provider: &dyn EphemerisProvider,
) -> Result<ChartModel, KundaliError> {
    Ok(ChartModel::from_inputs(inputs, provider)?)
}

/// Build a chart after applying chart options to the inputs.
pub fn build_chart_with_options(
    inputs: &BirthInputs,
    options: &ChartOptions,
    provider: &dyn EphemerisProvider,
) -> Result<ChartModel, KundaliError> {
    build_chart_with(&options.apply(inputs), provider)
}

/// Vimshottari timeline for the birth data.
pub fn build_dasha(inputs: &BirthInputs) -> Result<DashaTimeline, KundaliError> {
    Ok(build_chart(inputs)?.dasha()?)
}

/// Nested mahadasha/antardasha dump of a chart's timeline.
pub fn dasha_dump(chart: &ChartModel) -> Result<DashaDump, KundaliError> {
    Ok(chart.dasha()?.to_nested())
}

/// Divisional dump by division code (1, 2, 3, ... 60).
pub fn chart_dump(chart: &ChartModel, division: u16) -> Result<ChartDump, KundaliError> {
    Ok(ChartDump::from_chart(chart.get_varga(division)?))
}

/// Evaluate the catalog, honouring the allow-list and `present_only`.
pub fn evaluate_yogas(
    chart: &ChartModel,
    options: &YogaOptions,
) -> Result<Vec<YogaResult>, KundaliError> {
    let ctx = YogaContext::new(chart, options.strength.predicate());
    let mut results = if options.only.is_empty() {
        catalog().compute_all(&ctx)
    } else {
        catalog().compute_selected(&ctx, &options.only)?
    };
    if options.present_only {
        results.retain(|y| y.present);
    }
    debug!(
        count = results.len(),
        policy = options.strength.predicate().name(),
        "yogas evaluated"
    );
    Ok(results)
}

/// Evaluate a single catalog yoga by name or slug.
pub fn evaluate_yoga(
    chart: &ChartModel,
    name: &str,
    options: &YogaOptions,
) -> Result<YogaResult, KundaliError> {
    let ctx = YogaContext::new(chart, options.strength.predicate());
    Ok(catalog().evaluate(&ctx, name)?)
}
