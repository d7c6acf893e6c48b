//! Wealth, prosperity and bhava-welfare yogas.

use kundali_base::{
    APOKLIMAS, BENEFICS, Dignity, Graha, KENDRAS, Modality, PANAPHARAS, Rashi, is_trikona,
};

use crate::context::{YogaContext, names};
use crate::error::YogaError;
use crate::registry::YogaRegistry;
use crate::result::{Outcome, Polarity};

use super::{lords_exchanged, tie};

pub(super) fn register(r: &mut YogaRegistry) {
    use Polarity::Positive;
    r.register("Dhana", Positive, dhana);
    r.register("Guru-Mangala", Positive, guru_mangala);
    r.register("Gandharva", Positive, gandharva);
    r.register("Sarada", Positive, sarada);
    r.register("Marud", Positive, marud);
    r.register("Budha", Positive, budha);
    r.register("Indra", Positive, indra);
    r.register("Ravi", Positive, ravi);
    r.register("Bhaskara", Positive, bhaskara);
    r.register("Sareera Soukhya", Positive, sareera_soukhya);
    r.register("Dehapushti", Positive, dehapushti);
    r.register("Swaveeryaddhana", Positive, swaveeryaddhana);
    r.register("Bhratruvriddhi", Positive, bhratruvriddhi);
    r.register("Matrusukha", Positive, matrusukha);
    r.register("Putra", Positive, putra);
    r.register("Kalatramooladhana", Positive, kalatramooladhana);
    r.register_group(
        "Adhama/Sama/Varishta",
        &[
            ("Adhama", Polarity::Negative),
            ("Sama", Polarity::Neutral),
            ("Varishta", Positive),
        ],
        moon_from_sun,
    );
}

/// Lords of the 2nd or 11th tied to each other or to the 1st, 5th or 9th lord.
fn dhana(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let mut pairs: Vec<(u8, u8)> = vec![(2, 11)];
    for w in [2u8, 11] {
        for t in [1u8, 5, 9] {
            pairs.push((w, t));
        }
    }
    let mut best = 0.0_f64;
    let mut found = Vec::new();
    for (x, y) in pairs {
        let (lx, ly) = (ctx.lord(x), ctx.lord(y));
        if lx == ly {
            continue;
        }
        if let Some((kind, w)) = tie(ctx, lx, ly)? {
            best = best.max(w);
            found.push(format!("L{x} {lx} / L{y} {ly}: {kind}"));
        }
    }
    Ok(Outcome::when(!found.is_empty(), best, found.join("; ")))
}

fn guru_mangala(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    Ok(match tie(ctx, Graha::Guru, Graha::Mangal)? {
        Some((kind, w)) => Outcome::present(w, format!("Jupiter / Mars: {kind}")),
        None => Outcome::absent("Jupiter and Mars unrelated"),
    })
}

fn gandharva(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (l10, l1) = (ctx.lord(10), ctx.lord(1));
    let with_jupiter = l1 == Graha::Guru || ctx.conjunct(l1, Graha::Guru)?;
    let present = ctx.in_houses(l10, &[3, 7, 11])?
        && with_jupiter
        && ctx.is_exalted(Graha::Surya)?
        && ctx.house(Graha::Chandra)? == 9;
    Ok(Outcome::when(present, 1.0, format!("L10 {l10}; lagna lord {l1} with Jupiter")))
}

fn sarada(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let l10 = ctx.lord(10);
    let present = ctx.house(l10)? == 5
        && ctx.in_kendra(Graha::Buddh)?
        && ctx.sign(Graha::Surya)? == Rashi::Simha.index();
    Ok(Outcome::when(present, 1.0, format!("L10 {l10} in 5th; Mercury angular; Sun in Leo")))
}

fn marud(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let present = ctx.from(Graha::Shukra, Graha::Guru)? == 5
        && ctx.from(Graha::Guru, Graha::Chandra)? == 9
        && ctx.from(Graha::Chandra, Graha::Surya)? == 11;
    Ok(Outcome::when(present, 1.0, "Venus-Jupiter 5th, Jupiter-Moon 9th, Moon-Sun 11th"))
}

fn budha(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let present = ctx.house(Graha::Guru)? == 1
        && ctx.in_kendra(Graha::Chandra)?
        && ctx.from(Graha::Chandra, Graha::Rahu)? == 2
        && ctx.from(Graha::Rahu, Graha::Surya)? == 3
        && ctx.from(Graha::Rahu, Graha::Mangal)? == 3;
    Ok(Outcome::when(present, 1.0, "Jupiter in lagna; Rahu 2nd from Moon; Sun, Mars 3rd from Rahu"))
}

fn indra(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let present = lords_exchanged(ctx, 5, 11)? && ctx.house(Graha::Chandra)? == 5;
    Ok(Outcome::when(present, 1.0, "5<->11; Moon in 5th"))
}

fn ravi(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let l10 = ctx.lord(10);
    let present = ctx.house(Graha::Surya)? == 10
        && ctx.house(l10)? == 3
        && ctx.house(Graha::Shani)? == 3;
    Ok(Outcome::when(present, 1.0, format!("Sun in 10th; L10 {l10} with Saturn in 3rd")))
}

fn bhaskara(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let present = ctx.from(Graha::Surya, Graha::Buddh)? == 2
        && ctx.from(Graha::Buddh, Graha::Chandra)? == 11
        && is_trikona(ctx.from(Graha::Chandra, Graha::Guru)?);
    Ok(Outcome::when(present, 1.0, "Mercury 2nd from Sun, Moon 11th from Mercury, Jupiter trine Moon"))
}

fn sareera_soukhya(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let l1 = ctx.lord(1);
    let mut helpers = Vec::new();
    for g in [Graha::Guru, Graha::Shukra] {
        if ctx.rasi().contains(g) && ctx.in_kendra(g)? {
            helpers.push(g);
        }
    }
    Ok(Outcome::when(
        ctx.in_kendra(l1)? && !helpers.is_empty(),
        if helpers.len() == 2 { 1.0 } else { 0.8 },
        format!("lagna lord {l1} angular with [{}]", names(&helpers)),
    ))
}

fn dehapushti(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let l1 = ctx.lord(1);
    let p = ctx.rasi().placement(l1)?;
    let h = p.house;
    let benefic_near = ctx.occupants(h).iter().any(|&g| g != l1 && BENEFICS.contains(&g))
        || ctx.rasi().aspecting_from(&BENEFICS, h).iter().any(|&g| g != l1);
    Ok(Outcome::when(
        p.sign.modality() == Modality::Movable && benefic_near,
        1.0,
        format!("lagna lord {l1} in {}", p.sign),
    ))
}

fn swaveeryaddhana(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let l1 = ctx.lord(1);
    let (strong, s) = ctx.powerful(l1);
    Ok(Outcome::when(
        ctx.in_houses(l1, &[2, 11])? && strong,
        s,
        format!("lagna lord {l1} strength {s:.2}"),
    ))
}

fn bhratruvriddhi(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let l3 = ctx.lord(3);
    let karaka_in_3 = ctx.house(l3)? == 3
        || (ctx.rasi().contains(Graha::Mangal) && ctx.house(Graha::Mangal)? == 3);
    let supported = ctx.any_in(&BENEFICS, 3) || ctx.rasi().is_house_benefic_aspected(3);
    Ok(Outcome::when(karaka_in_3 && supported, 1.0, format!("L3 {l3}")))
}

fn matrusukha(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let l4 = ctx.lord(4);
    let d = ctx.dignity(l4)?;
    Ok(Outcome::when(
        ctx.in_angle_or_trine(l4)? && d.is_dignified(),
        d.score(),
        format!("L4 {l4} ({d})"),
    ))
}

fn putra(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let l5 = ctx.lord(5);
    let jupiter = ctx.house(Graha::Guru)? == 5 || ctx.aspects_house(Graha::Guru, 5)?;
    Ok(Outcome::when(
        ctx.in_angle_or_trine(l5)? && jupiter,
        1.0,
        format!("L5 {l5}; Jupiter on the 5th"),
    ))
}

fn kalatramooladhana(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (l2, l7) = (ctx.lord(2), ctx.lord(7));
    let joined = l2 == l7 || ctx.conjunct(l2, l7)?;
    let venus = ctx.dignity(Graha::Shukra)?;
    let strong_venus = venus.is_dignified() || venus.contains(Dignity::Friend);
    Ok(Outcome::when(
        joined && strong_venus,
        venus.score(),
        format!("L2 {l2} with L7 {l7}; Venus {venus}"),
    ))
}

/// Moon in a kendra, panaphara or apoklima from the Sun.
fn moon_from_sun(ctx: &YogaContext<'_>) -> Result<Vec<Outcome>, YogaError> {
    let rel = ctx.from(Graha::Surya, Graha::Chandra)?;
    let details = format!("Moon {rel} from Sun");
    Ok([&KENDRAS[..], &PANAPHARAS[..], &APOKLIMAS[..]]
        .iter()
        .map(|set| Outcome::when(set.contains(&rel), 1.0, details.as_str()))
        .collect())
}
