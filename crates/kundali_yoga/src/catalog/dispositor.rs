//! Yogas that follow dispositor chains into the Navamsa.
//!
//! A hop takes a graha to the lord of the sign it occupies: in the Rasi for
//! a rasi dispositor, in the Navamsa for a navamsa dispositor.

use kundali_base::{Dignity, is_dusthana};

use crate::context::YogaContext;
use crate::error::YogaError;
use crate::registry::YogaRegistry;
use crate::result::{Outcome, Polarity};

pub(super) fn register(r: &mut YogaRegistry) {
    r.register("Vishnu", Polarity::Positive, vishnu);
    r.register("Gauri", Polarity::Positive, gauri);
    r.register("Bharathi", Polarity::Positive, bharathi);
    r.register("Parijatha", Polarity::Positive, parijatha);
    r.register("Yuddha Praveena", Polarity::Positive, yuddha_praveena);
    r.register("Matrunasa", Polarity::Negative, matrunasa);
    r.register("Pitrunasa", Polarity::Negative, pitrunasa);
}

/// L9, L10 and the navamsa dispositor of L9 together in the 2nd.
fn vishnu(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (l9, l10) = (ctx.lord(9), ctx.lord(10));
    let nd = ctx.navamsa_dispositor(l9)?;
    let present = ctx.house(l9)? == 2 && ctx.house(l10)? == 2 && ctx.house(nd)? == 2;
    Ok(Outcome::when(present, 1.0, format!("L9 {l9}, L10 {l10}, navamsa lord {nd}")))
}

/// Navamsa dispositor of L10 exalted in the 10th with the lagna lord.
fn gauri(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (l10, l1) = (ctx.lord(10), ctx.lord(1));
    let nd = ctx.navamsa_dispositor(l10)?;
    let with_l1 = nd == l1 || ctx.conjunct(nd, l1)?;
    let present = ctx.is_exalted(nd)? && ctx.house(nd)? == 10 && with_l1;
    Ok(Outcome::when(present, 1.0, format!("L10 {l10} -> {nd}; lagna lord {l1}")))
}

/// Navamsa dispositor of L2, L5 or L11 exalted and joined with L9.
fn bharathi(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let l9 = ctx.lord(9);
    let mut found = Vec::new();
    for h in [2u8, 5, 11] {
        let lord = ctx.lord(h);
        let nd = ctx.navamsa_dispositor(lord)?;
        let joined = nd == l9 || ctx.conjunct(nd, l9)?;
        if ctx.is_exalted(nd)? && joined {
            found.push(format!("L{h} {lord} -> {nd}"));
        }
    }
    Ok(Outcome::when(!found.is_empty(), 1.0, found.join("; ")))
}

/// Rasi dispositor of the lagna lord, or its navamsa dispositor, in a
/// kendra or trikona in own or exaltation sign.
fn parijatha(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let l1 = ctx.lord(1);
    let d1 = ctx.dispositor(l1)?;
    let d2 = ctx.navamsa_dispositor(d1)?;
    let mut best = 0.0_f64;
    let mut found = Vec::new();
    for g in [d1, d2] {
        let dignity = ctx.dignity(g)?;
        if ctx.in_angle_or_trine(g)? && dignity.is_own_or_exalted() {
            best = best.max(dignity.score());
            found.push(format!("{g} ({dignity})"));
        }
    }
    Ok(Outcome::when(
        !found.is_empty(),
        best,
        format!("lagna lord {l1} -> {d1} -> {d2}: [{}]", found.join(", ")),
    ))
}

/// Three hops from L3: rasi dispositor, then two navamsa dispositors; the
/// last graha must hold own or exaltation sign.
fn yuddha_praveena(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let l3 = ctx.lord(3);
    let a = ctx.dispositor(l3)?;
    let b = ctx.navamsa_dispositor(a)?;
    let c = ctx.navamsa_dispositor(b)?;
    let dignity = ctx.dignity(c)?;
    let strength = if dignity.contains(Dignity::Exalted) { 1.0 } else { 0.75 };
    Ok(Outcome::when(
        dignity.is_own_or_exalted(),
        strength,
        format!("L3 {l3} -> {a} -> {b} -> {c} ({dignity})"),
    ))
}

/// Navamsa dispositor of the house lord in a dusthana, itself ruled in the
/// Navamsa by a natural malefic.
fn ruined_by_chain(ctx: &YogaContext<'_>, house: u8) -> Result<Outcome, YogaError> {
    let lord = ctx.lord(house);
    let a = ctx.navamsa_dispositor(lord)?;
    let b = ctx.navamsa_dispositor(a)?;
    let at = ctx.house(a)?;
    Ok(Outcome::when(
        is_dusthana(at) && b.is_malefic(),
        1.0,
        format!("L{house} {lord} -> {a} (house {at}) -> {b}"),
    ))
}

fn matrunasa(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    ruined_by_chain(ctx, 4)
}

fn pitrunasa(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    ruined_by_chain(ctx, 9)
}
