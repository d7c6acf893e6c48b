//! Built-in yoga catalog.
//!
//! Registration order here is the order `compute_all` reports in.

mod affliction;
mod arishta;
mod chandra;
mod dhana;
mod dispositor;
mod kartari;
mod lordship;
mod mahapurusha;
mod nabhasa;
mod parivartana;
mod raja;
mod surya;

use kundali_base::Graha;

use crate::context::YogaContext;
use crate::error::YogaError;
use crate::registry::YogaRegistry;

pub fn register_all(registry: &mut YogaRegistry) {
    chandra::register(registry);
    surya::register(registry);
    kartari::register(registry);
    mahapurusha::register(registry);
    nabhasa::register(registry);
    lordship::register(registry);
    parivartana::register(registry);
    raja::register(registry);
    dhana::register(registry);
    dispositor::register(registry);
    affliction::register(registry);
    arishta::register(registry);
}

/// Kind and weight of the tie between two grahas, if any: the same graha,
/// conjunction, sign exchange or mutual aspect.
fn tie(
    ctx: &YogaContext<'_>,
    a: Graha,
    b: Graha,
) -> Result<Option<(&'static str, f64)>, YogaError> {
    if a == b {
        return Ok(Some(("same graha", 1.0)));
    }
    if ctx.conjunct(a, b)? {
        return Ok(Some(("conjunction", 1.0)));
    }
    if ctx.parivartana(a, b)? {
        return Ok(Some(("exchange", 1.0)));
    }
    if ctx.rasi().mutual_aspect(a, b)? {
        return Ok(Some(("mutual aspect", 0.75)));
    }
    Ok(None)
}

/// Lords of houses `x` and `y` are distinct and sit in each other's house.
fn lords_exchanged(ctx: &YogaContext<'_>, x: u8, y: u8) -> Result<bool, YogaError> {
    let (lx, ly) = (ctx.lord(x), ctx.lord(y));
    Ok(lx != ly && ctx.house(lx)? == y && ctx.house(ly)? == x)
}
