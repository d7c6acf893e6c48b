//! Lunar yogas: flanking of the Moon and the Moon's relation to Jupiter.

use kundali_base::{BENEFICS, Graha, SAPTA_GRAHAS, is_kendra, is_upachaya};

use crate::context::{YogaContext, benefic_weight, kendra_weight, mean, names};
use crate::error::YogaError;
use crate::registry::YogaRegistry;
use crate::result::{Outcome, Polarity};

const SAUMYA: [Graha; 3] = [Graha::Buddh, Graha::Guru, Graha::Shukra];

pub(super) fn register(r: &mut YogaRegistry) {
    r.register("Sunapha", Polarity::Positive, sunapha);
    r.register("Anapha", Polarity::Positive, anapha);
    r.register("Durudhara", Polarity::Positive, durudhara);
    r.register("Kemadruma", Polarity::Negative, kemadruma);
    r.register("Kemadruma Bhanga", Polarity::Positive, kemadruma_bhanga);
    r.register("Chandra Mangala", Polarity::Positive, chandra_mangala);
    r.register("Gajakesari", Polarity::Positive, gajakesari);
    r.register("Adhi", Polarity::Positive, adhi);
    r.register("Amala", Polarity::Positive, amala);
    r.register("Vasumati", Polarity::Positive, vasumati);
    r.register("Pushkala", Polarity::Positive, pushkala);
    r.register("Shakata", Polarity::Negative, shakata);
    r.register("Shakata Bhanga", Polarity::Positive, shakata_bhanga);
}

fn without_sun(grahas: &[Graha]) -> Vec<Graha> {
    grahas.iter().copied().filter(|&g| g != Graha::Surya).collect()
}

/// Grahas other than the Sun in the 2nd and 12th from the Moon. Nodes count.
fn flanks(ctx: &YogaContext<'_>) -> Result<(Vec<Graha>, Vec<Graha>), YogaError> {
    let second = without_sun(ctx.occupants_from(Graha::Chandra, 2)?);
    let twelfth = without_sun(ctx.occupants_from(Graha::Chandra, 12)?);
    Ok((second, twelfth))
}

fn flank_strength(grahas: &[Graha]) -> f64 {
    mean(&grahas.iter().map(|&g| benefic_weight(g)).collect::<Vec<_>>())
}

fn sunapha(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (second, twelfth) = flanks(ctx)?;
    Ok(Outcome::when(
        !second.is_empty() && twelfth.is_empty(),
        flank_strength(&second),
        format!("2nd from Moon: [{}]", names(&second)),
    ))
}

fn anapha(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (second, twelfth) = flanks(ctx)?;
    Ok(Outcome::when(
        second.is_empty() && !twelfth.is_empty(),
        flank_strength(&twelfth),
        format!("12th from Moon: [{}]", names(&twelfth)),
    ))
}

fn durudhara(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (second, twelfth) = flanks(ctx)?;
    let all: Vec<Graha> = second.iter().chain(&twelfth).copied().collect();
    Ok(Outcome::when(
        !second.is_empty() && !twelfth.is_empty(),
        flank_strength(&all),
        format!("2nd: [{}], 12th: [{}]", names(&second), names(&twelfth)),
    ))
}

fn kemadruma(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (second, twelfth) = flanks(ctx)?;
    Ok(Outcome::when(
        second.is_empty() && twelfth.is_empty(),
        1.0,
        "no graha but the Sun in the 2nd or 12th from the Moon",
    ))
}

/// Kemadruma cancelled by a graha in a kendra from the lagna or the Moon.
fn kemadruma_bhanga(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (second, twelfth) = flanks(ctx)?;
    if !(second.is_empty() && twelfth.is_empty()) {
        return Ok(Outcome::absent("no Kemadruma to cancel"));
    }
    let mut from_moon = Vec::new();
    let mut from_lagna = Vec::new();
    for g in SAPTA_GRAHAS.into_iter().filter(|&g| g != Graha::Chandra) {
        let Ok(h) = ctx.house(g) else { continue };
        if is_kendra(ctx.from(Graha::Chandra, g)?) {
            from_moon.push(g);
        }
        if is_kendra(h) {
            from_lagna.push(g);
        }
    }
    let strength = if !from_moon.is_empty() { 1.0 } else { 0.75 };
    Ok(Outcome::when(
        !from_moon.is_empty() || !from_lagna.is_empty(),
        strength,
        format!(
            "kendra from Moon: [{}], kendra from lagna: [{}]",
            names(&from_moon),
            names(&from_lagna)
        ),
    ))
}

fn chandra_mangala(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let h = ctx.house(Graha::Chandra)?;
    Ok(Outcome::when(
        ctx.conjunct(Graha::Chandra, Graha::Mangal)?,
        1.0,
        format!("Moon and Mars in house {h}"),
    ))
}

fn gajakesari(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let rel = ctx.from(Graha::Chandra, Graha::Guru)?;
    let dignity = ctx.dignity(Graha::Guru)?;
    Ok(Outcome::when(
        is_kendra(rel),
        mean(&[kendra_weight(rel), dignity.score()]),
        format!("Jupiter {rel} from Moon ({dignity})"),
    ))
}

fn adhi(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let mut found = Vec::new();
    for g in SAUMYA {
        if matches!(ctx.from(Graha::Chandra, g)?, 6..=8) {
            found.push(g);
        }
    }
    let weight: f64 = found.iter().map(|&g| benefic_weight(g)).sum();
    Ok(Outcome::when(
        !found.is_empty(),
        weight / 2.7,
        format!("6th/7th/8th from Moon: [{}]", names(&found)),
    ))
}

fn amala(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let mut found: Vec<Graha> = ctx
        .occupants(10)
        .iter()
        .copied()
        .filter(|g| BENEFICS.contains(g))
        .collect();
    for &g in ctx.occupants_from(Graha::Chandra, 10)? {
        if BENEFICS.contains(&g) && !found.contains(&g) {
            found.push(g);
        }
    }
    let best = found.iter().map(|&g| benefic_weight(g)).fold(0.0, f64::max);
    Ok(Outcome::when(
        !found.is_empty(),
        best,
        format!("benefics 10th from lagna or Moon: [{}]", names(&found)),
    ))
}

fn vasumati(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let mut found = Vec::new();
    for g in SAUMYA {
        if is_upachaya(ctx.from(Graha::Chandra, g)?) {
            found.push(g);
        }
    }
    let weight: f64 = found.iter().map(|&g| benefic_weight(g)).sum();
    Ok(Outcome::when(
        found.len() >= 2,
        weight / 2.7,
        format!("upachayas from Moon: [{}]", names(&found)),
    ))
}

/// Moon joins the lagna lord while the Moon's dispositor holds a kendra.
fn pushkala(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let l1 = ctx.lord(1);
    let disp = ctx.dispositor(Graha::Chandra)?;
    let disp_house = ctx.house(disp)?;
    let joined = l1 != Graha::Chandra && ctx.conjunct(Graha::Chandra, l1)?;
    Ok(Outcome::when(
        joined && is_kendra(disp_house),
        mean(&[kendra_weight(disp_house), ctx.dignity(disp)?.score()]),
        format!("lagna lord {l1} with Moon; dispositor {disp} in house {disp_house}"),
    ))
}

fn shakata(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let rel = ctx.from(Graha::Guru, Graha::Chandra)?;
    let moon_house = ctx.house(Graha::Chandra)?;
    Ok(Outcome::when(
        matches!(rel, 6 | 8 | 12) && !is_kendra(moon_house),
        1.0,
        format!("Moon {rel} from Jupiter, house {moon_house}"),
    ))
}

/// Moon 6/8/12 from Jupiter, cancelled by the Moon holding a kendra.
fn shakata_bhanga(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let rel = ctx.from(Graha::Guru, Graha::Chandra)?;
    let moon_house = ctx.house(Graha::Chandra)?;
    Ok(Outcome::when(
        matches!(rel, 6 | 8 | 12) && is_kendra(moon_house),
        kendra_weight(moon_house),
        format!("Moon {rel} from Jupiter, held in house {moon_house}"),
    ))
}
