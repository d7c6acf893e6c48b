//! Afflictions: node conjunctions, planetary war, the Kala Sarpa axis and
//! the doshas read from Mars, the Sun and Saturn.

use kundali_base::{Graha, SAPTA_GRAHAS, TARA_GRAHAS, angular_separation, forward_arc};

use crate::context::{YogaContext, names};
use crate::error::YogaError;
use crate::registry::YogaRegistry;
use crate::result::{Outcome, Polarity};

/// Tara grahas closer than this are at war.
const GRAHA_YUDDHA_ORB: f64 = 1.0;

pub(super) fn register(r: &mut YogaRegistry) {
    use Polarity::Negative;
    r.register("Grahana", Negative, grahana);
    r.register("Guru Chandala", Negative, guru_chandala);
    r.register("Angaraka", Negative, angaraka);
    r.register("Shrapit", Negative, shrapit);
    r.register("Visha", Negative, visha);
    r.register("Kala Sarpa", Negative, kala_sarpa);
    r.register("Graha Yuddha", Negative, graha_yuddha);
    r.register("Mangal Dosha", Negative, mangal_dosha);
    r.register("Pitru Dosha", Negative, pitru_dosha);
    r.register("Punarphoo", Negative, punarphoo);
}

/// Members of `grahas` sharing a house with either node.
fn with_nodes(ctx: &YogaContext<'_>, grahas: &[Graha]) -> Result<Vec<Graha>, YogaError> {
    let mut hit = Vec::new();
    for &g in grahas {
        for node in [Graha::Rahu, Graha::Ketu] {
            if ctx.conjunct(g, node)? && !hit.contains(&g) {
                hit.push(g);
            }
        }
    }
    Ok(hit)
}

fn grahana(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let hit = with_nodes(ctx, &[Graha::Surya, Graha::Chandra])?;
    Ok(Outcome::when(
        !hit.is_empty(),
        hit.len() as f64 / 2.0,
        format!("luminaries with a node: [{}]", names(&hit)),
    ))
}

fn guru_chandala(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let hit = with_nodes(ctx, &[Graha::Guru])?;
    Ok(Outcome::when(!hit.is_empty(), 1.0, "Jupiter with a node"))
}

fn angaraka(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let hit = with_nodes(ctx, &[Graha::Mangal])?;
    Ok(Outcome::when(!hit.is_empty(), 1.0, "Mars with a node"))
}

fn shrapit(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    Ok(Outcome::when(
        ctx.conjunct(Graha::Shani, Graha::Rahu)?,
        1.0,
        "Saturn with Rahu",
    ))
}

fn visha(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    Ok(Outcome::when(
        ctx.conjunct(Graha::Shani, Graha::Chandra)?,
        1.0,
        "Saturn with the Moon",
    ))
}

/// All seven grahas strictly on one side of the Rahu-Ketu axis.
fn kala_sarpa(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let rahu = ctx.longitude(Graha::Rahu)?;
    let ketu = ctx.longitude(Graha::Ketu)?;
    let span = forward_arc(rahu, ketu);
    let mut ahead = 0;
    let mut behind = 0;
    for g in SAPTA_GRAHAS {
        let arc = forward_arc(rahu, ctx.longitude(g)?);
        if arc > 0.0 && arc < span {
            ahead += 1;
        } else if arc > span {
            behind += 1;
        }
    }
    let present = ahead == SAPTA_GRAHAS.len() || behind == SAPTA_GRAHAS.len();
    Ok(Outcome::when(
        present,
        1.0,
        format!("{ahead} grahas Rahu->Ketu, {behind} Ketu->Rahu"),
    ))
}

fn graha_yuddha(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let mut wars = Vec::new();
    for (i, &a) in TARA_GRAHAS.iter().enumerate() {
        for &b in &TARA_GRAHAS[i + 1..] {
            let (Ok(la), Ok(lb)) = (ctx.longitude(a), ctx.longitude(b)) else {
                continue;
            };
            let gap = angular_separation(la, lb);
            if gap < GRAHA_YUDDHA_ORB {
                wars.push(format!("{a}-{b} {gap:.2} deg"));
            }
        }
    }
    Ok(Outcome::when(!wars.is_empty(), 1.0, wars.join("; ")))
}

/// Mars in the 1st, 2nd, 4th, 7th, 8th or 12th; heaviest in the 7th and 8th.
fn mangal_dosha(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let h = ctx.house(Graha::Mangal)?;
    let s = match h {
        7 | 8 => 1.0,
        1 | 2 | 4 | 12 => 0.75,
        _ => 0.0,
    };
    Ok(Outcome::when(s > 0.0, s, format!("Mars in house {h}")))
}

/// The Sun joined by Rahu or Saturn, or Rahu in the 9th.
fn pitru_dosha(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let mut with = Vec::new();
    for g in [Graha::Rahu, Graha::Shani] {
        if ctx.rasi().contains(g) && ctx.conjunct(Graha::Surya, g)? {
            with.push(g);
        }
    }
    let rahu_ninth = ctx.rasi().contains(Graha::Rahu) && ctx.house(Graha::Rahu)? == 9;
    let s = if ctx.house(Graha::Surya)? == 9 && !with.is_empty() {
        1.0
    } else if !with.is_empty() || rahu_ninth {
        0.75
    } else {
        0.0
    };
    Ok(Outcome::when(
        s > 0.0,
        s,
        format!("Sun with [{}], Rahu in 9th: {rahu_ninth}", names(&with)),
    ))
}

/// Saturn aspects the Moon from another house. The conjunction is Visha.
fn punarphoo(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let conjunct = ctx.conjunct(Graha::Shani, Graha::Chandra)?;
    let seen = ctx.rasi().aspects_planet(Graha::Shani, Graha::Chandra)?;
    let mutual = ctx.rasi().mutual_aspect(Graha::Shani, Graha::Chandra)?;
    Ok(Outcome::when(
        !conjunct && seen,
        if mutual { 1.0 } else { 0.75 },
        format!("Saturn aspects the Moon, mutual: {mutual}"),
    ))
}
