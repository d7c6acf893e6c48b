//! Solar yogas.

use kundali_base::{Graha, angular_separation};

use crate::context::{YogaContext, benefic_weight, mean, names};
use crate::error::YogaError;
use crate::registry::YogaRegistry;
use crate::result::{Outcome, Polarity};

/// Mercury closer than this to the Sun is combust.
const MERCURY_COMBUSTION_DEG: f64 = 14.0;

pub(super) fn register(r: &mut YogaRegistry) {
    r.register("Vesi", Polarity::Positive, vesi);
    r.register("Vasi", Polarity::Positive, vasi);
    r.register("Ubhayachari", Polarity::Positive, ubhayachari);
    r.register("Budha-Aditya", Polarity::Positive, budha_aditya);
}

/// Occupants of the 2nd and 12th from the Sun, the Moon included, nodes excluded.
fn flanks(ctx: &YogaContext<'_>) -> Result<(Vec<Graha>, Vec<Graha>), YogaError> {
    let pick = |gs: &[Graha]| -> Vec<Graha> {
        gs.iter().copied().filter(|g| !g.is_node()).collect()
    };
    Ok((
        pick(ctx.occupants_from(Graha::Surya, 2)?),
        pick(ctx.occupants_from(Graha::Surya, 12)?),
    ))
}

fn weight(grahas: &[Graha]) -> f64 {
    mean(&grahas.iter().map(|&g| benefic_weight(g)).collect::<Vec<_>>())
}

fn vesi(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (second, twelfth) = flanks(ctx)?;
    Ok(Outcome::when(
        !second.is_empty() && twelfth.is_empty(),
        weight(&second),
        format!("2nd from Sun: [{}]", names(&second)),
    ))
}

fn vasi(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (second, twelfth) = flanks(ctx)?;
    Ok(Outcome::when(
        second.is_empty() && !twelfth.is_empty(),
        weight(&twelfth),
        format!("12th from Sun: [{}]", names(&twelfth)),
    ))
}

fn ubhayachari(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (second, twelfth) = flanks(ctx)?;
    let both: Vec<Graha> = second.iter().chain(&twelfth).copied().collect();
    Ok(Outcome::when(
        !second.is_empty() && !twelfth.is_empty(),
        weight(&both),
        format!("2nd: [{}], 12th: [{}]", names(&second), names(&twelfth)),
    ))
}

fn budha_aditya(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let together = ctx.conjunct(Graha::Surya, Graha::Buddh)?;
    let gap = angular_separation(ctx.longitude(Graha::Surya)?, ctx.longitude(Graha::Buddh)?);
    let combust = gap < MERCURY_COMBUSTION_DEG;
    Ok(Outcome::when(
        together,
        if combust { 0.5 } else { 1.0 },
        format!("Sun-Mercury separation {gap:.2} deg{}", if combust { ", combust" } else { "" }),
    ))
}
