//! Raja yogas and related combinations of kendra and trikona lords.

use kundali_base::{
    BENEFICS, Dignity, Division, Graha, MALEFICS, Modality, SAPTA_GRAHAS,
    distance_from_deep_exaltation, exaltation_sign, is_kendra, is_trikona, nth_house_from,
    rashi_lord_by_index,
};

use crate::context::{YogaContext, benefic_weight, mean, names};
use crate::error::YogaError;
use crate::registry::YogaRegistry;
use crate::result::{Outcome, Polarity};

use super::{lords_exchanged, tie};

const SAUMYA: [Graha; 3] = [Graha::Buddh, Graha::Guru, Graha::Shukra];

/// Orb around the deep exaltation point for Jaya and Vidyut.
const DEEP_EXALTATION_ORB: f64 = 5.0;

pub(super) fn register(r: &mut YogaRegistry) {
    use Polarity::Positive;
    r.register("Raja", Positive, raja);
    r.register("Dharma-Karmadhipati", Positive, dharma_karmadhipati);
    r.register("Neecha Bhanga Raja", Positive, neecha_bhanga);
    r.register("Neecha Bhanga Kendra", Positive, neecha_bhanga_kendra);
    r.register("Neecha Bhanga Uchcha Graha", Positive, neecha_bhanga_uchcha);
    r.register("Neecha Bhanga Drishti", Positive, neecha_bhanga_drishti);
    r.register("Neecha Bhanga Navamsa", Positive, neecha_bhanga_navamsa);
    r.register("Kalpadruma", Positive, kalpadruma);
    r.register("Mahabhagya", Positive, mahabhagya);
    r.register("Kahala", Positive, kahala);
    r.register("Parvata", Positive, parvata);
    r.register("Lakshmi", Positive, lakshmi);
    r.register("Chamara", Positive, chamara);
    r.register("Sankha", Positive, sankha);
    r.register("Bheri", Positive, bheri);
    r.register("Mridanga", Positive, mridanga);
    r.register("Srinatha", Positive, srinatha);
    r.register("Kusuma", Positive, kusuma);
    r.register("Matsya", Positive, matsya);
    r.register("Kurma", Positive, kurma);
    r.register("Khadga", Positive, khadga);
    r.register("Saraswati", Positive, saraswati);
    r.register("Kalanidhi", Positive, kalanidhi);
    r.register("Chatussagara", Positive, chatussagara);
    r.register("Amsavatara", Positive, amsavatara);
    r.register("Hari", Positive, hari);
    r.register("Hara", Positive, hara);
    r.register("Brahma", Positive, brahma);
    r.register("Lagnadhi", Positive, lagnadhi);
    r.register("Sreekanta", Positive, sreekanta);
    r.register("Jaya", Positive, jaya);
    r.register("Vidyut", Positive, vidyut);
}

fn raja(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let mut best = 0.0_f64;
    let mut found = Vec::new();
    for k in [1u8, 4, 7, 10] {
        for t in [5u8, 9] {
            let (lk, lt) = (ctx.lord(k), ctx.lord(t));
            if let Some((kind, w)) = tie(ctx, lk, lt)? {
                best = best.max(w);
                found.push(format!("L{k} {lk} / L{t} {lt}: {kind}"));
            }
        }
    }
    Ok(Outcome::when(!found.is_empty(), best, found.join("; ")))
}

fn dharma_karmadhipati(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (l9, l10) = (ctx.lord(9), ctx.lord(10));
    Ok(match tie(ctx, l9, l10)? {
        Some((kind, w)) => Outcome::present(w, format!("L9 {l9} / L10 {l10}: {kind}")),
        None => Outcome::absent(format!("L9 {l9} and L10 {l10} unrelated")),
    })
}

/// A debilitated graha whose sign lord or exaltation lord holds a kendra
/// from the lagna (full) or from the Moon (partial).
fn neecha_bhanga(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let mut best = 0.0_f64;
    let mut found = Vec::new();
    for g in SAPTA_GRAHAS {
        if !ctx.rasi().contains(g) || !ctx.is_debilitated(g)? {
            continue;
        }
        let cancellers = [ctx.dispositor(g)?, rashi_lord_by_index(exaltation_sign(g))];
        for c in cancellers {
            let Ok(h) = ctx.house(c) else { continue };
            let w = if is_kendra(h) {
                1.0
            } else if ctx.rasi().contains(Graha::Chandra) && is_kendra(ctx.from(Graha::Chandra, c)?) {
                0.75
            } else {
                continue;
            };
            best = best.max(w);
            found.push(format!("{g} debilitated, cancelled by {c}"));
        }
    }
    Ok(Outcome::when(!found.is_empty(), best, found.join("; ")))
}

/// Debilitated sapta grahas placed in D1.
fn debilitated(ctx: &YogaContext<'_>) -> Result<Vec<Graha>, YogaError> {
    let mut out = Vec::new();
    for g in SAPTA_GRAHAS {
        if ctx.rasi().contains(g) && ctx.is_debilitated(g)? {
            out.push(g);
        }
    }
    Ok(out)
}

/// 1.0 for a kendra from the lagna, 0.75 for a kendra from the Moon only.
fn kendra_from_lagna_or_moon(ctx: &YogaContext<'_>, g: Graha) -> Result<Option<f64>, YogaError> {
    if ctx.in_kendra(g)? {
        return Ok(Some(1.0));
    }
    if ctx.rasi().contains(Graha::Chandra) && is_kendra(ctx.from(Graha::Chandra, g)?) {
        return Ok(Some(0.75));
    }
    Ok(None)
}

/// The debilitated graha itself holds a kendra.
fn neecha_bhanga_kendra(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let mut best = 0.0_f64;
    let mut found = Vec::new();
    for g in debilitated(ctx)? {
        if let Some(w) = kendra_from_lagna_or_moon(ctx, g)? {
            best = best.max(w);
            found.push(g);
        }
    }
    Ok(Outcome::when(
        !found.is_empty(),
        best,
        format!("debilitated in a kendra: [{}]", names(&found)),
    ))
}

/// A graha exalted in the sign of the fall holds a kendra.
fn neecha_bhanga_uchcha(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let mut best = 0.0_f64;
    let mut found = Vec::new();
    for g in debilitated(ctx)? {
        let sign = ctx.sign(g)?;
        for x in SAPTA_GRAHAS {
            if exaltation_sign(x) != sign || !ctx.rasi().contains(x) {
                continue;
            }
            if let Some(w) = kendra_from_lagna_or_moon(ctx, x)? {
                best = best.max(w);
                found.push(format!("{g} debilitated, {x} exalts there and is angular"));
            }
        }
    }
    Ok(Outcome::when(!found.is_empty(), best, found.join("; ")))
}

/// The dispositor joins or aspects the debilitated graha.
fn neecha_bhanga_drishti(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let mut best = 0.0_f64;
    let mut found = Vec::new();
    for g in debilitated(ctx)? {
        let d = ctx.dispositor(g)?;
        if !ctx.rasi().contains(d) {
            continue;
        }
        let w = if ctx.conjunct(d, g)? {
            1.0
        } else if ctx.rasi().aspects_planet(d, g)? {
            0.75
        } else {
            continue;
        };
        best = best.max(w);
        found.push(format!("{g} debilitated, seen by its dispositor {d}"));
    }
    Ok(Outcome::when(!found.is_empty(), best, found.join("; ")))
}

/// Debilitated in D1, exalted in the Navamsa.
fn neecha_bhanga_navamsa(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let mut found = Vec::new();
    for g in debilitated(ctx)? {
        if ctx
            .chart()
            .divisional_dignity(g, Division::D9)?
            .contains(Dignity::Exalted)
        {
            found.push(g);
        }
    }
    Ok(Outcome::when(
        !found.is_empty(),
        1.0,
        format!("debilitated, exalted in navamsa: [{}]", names(&found)),
    ))
}

/// Lagna lord, its dispositor, that graha's dispositor and Navamsa lord
/// all exalted or in a kendra or trikona.
fn kalpadruma(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let l1 = ctx.lord(1);
    let d = ctx.dispositor(l1)?;
    let dd = ctx.dispositor(d)?;
    let nd = ctx.navamsa_dispositor(d)?;
    let mut weights = Vec::with_capacity(4);
    for g in [l1, d, dd, nd] {
        let w = if ctx.is_exalted(g)? {
            1.0
        } else if ctx.in_angle_or_trine(g)? {
            0.75
        } else {
            0.0
        };
        weights.push(w);
    }
    Ok(Outcome::when(
        weights.iter().all(|&w| w > 0.0),
        mean(&weights),
        format!("{l1} -> {d} -> {dd}, navamsa lord {nd}"),
    ))
}

/// Mesha, index 0, is the first odd sign.
fn odd_sign(sign: u8) -> bool {
    sign % 2 == 0
}

/// Day birth with lagna, Sun and Moon in odd signs, or night birth with
/// all three in even signs.
fn mahabhagya(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let signs = [
        ctx.rasi().ascendant_sign(),
        ctx.sign(Graha::Surya)?,
        ctx.sign(Graha::Chandra)?,
    ];
    let day = ctx.house(Graha::Surya)? >= 7;
    let odd = signs.iter().all(|&s| odd_sign(s));
    let even = signs.iter().all(|&s| !odd_sign(s));
    Ok(Outcome::when(
        (day && odd) || (!day && even),
        1.0,
        format!(
            "{} birth, lagna/Sun/Moon signs {signs:?}",
            if day { "day" } else { "night" }
        ),
    ))
}

fn kahala(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (l4, l9, l1) = (ctx.lord(4), ctx.lord(9), ctx.lord(1));
    let (strong, s) = ctx.powerful(l1);
    Ok(Outcome::when(
        ctx.mutual_kendra(l4, l9)? && strong,
        mean(&[1.0, s]),
        format!("L4 {l4}, L9 {l9} mutually angular; lagna lord {l1} strength {s:.2}"),
    ))
}

fn parvata(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let mut in_kendra = Vec::new();
    for g in BENEFICS {
        if ctx.rasi().contains(g) && ctx.in_kendra(g)? {
            in_kendra.push(g);
        }
    }
    let clean = !ctx.any_in(&MALEFICS, 6) && !ctx.any_in(&MALEFICS, 8);
    let weights: Vec<f64> = in_kendra.iter().map(|&g| benefic_weight(g)).collect();
    Ok(Outcome::when(
        !in_kendra.is_empty() && clean,
        mean(&weights),
        format!("benefics in kendras: [{}]", names(&in_kendra)),
    ))
}

fn lakshmi(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (l9, l1) = (ctx.lord(9), ctx.lord(1));
    let dignity = ctx.dignity(l9)?;
    let (strong, s) = ctx.powerful(l1);
    Ok(Outcome::when(
        ctx.in_angle_or_trine(l9)? && dignity.is_own_or_exalted() && strong,
        mean(&[dignity.score(), s]),
        format!("L9 {l9} ({dignity}); lagna lord {l1} strength {s:.2}"),
    ))
}

fn chamara(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let l1 = ctx.lord(1);
    let h = ctx.house(l1)?;
    let present = ctx.is_exalted(l1)? && is_kendra(h) && ctx.aspects_house(Graha::Guru, h)?;
    Ok(Outcome::when(present, 1.0, format!("lagna lord {l1} in house {h}")))
}

fn sankha(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (l5, l6, l1) = (ctx.lord(5), ctx.lord(6), ctx.lord(1));
    let (strong, s) = ctx.powerful(l1);
    Ok(Outcome::when(
        l5 != l6 && ctx.mutual_kendra(l5, l6)? && strong,
        mean(&[1.0, s]),
        format!("L5 {l5}, L6 {l6}; lagna lord {l1} strength {s:.2}"),
    ))
}

fn bheri(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (l1, l9) = (ctx.lord(1), ctx.lord(9));
    let (strong, s) = ctx.powerful(l9);
    let present =
        ctx.mutual_kendra(Graha::Shukra, Graha::Guru)? && ctx.in_kendra(l1)? && strong;
    Ok(Outcome::when(
        present,
        mean(&[1.0, s]),
        format!("Venus and Jupiter mutually angular; L9 {l9} strength {s:.2}"),
    ))
}

fn mridanga(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let mut exalted = Vec::new();
    for g in SAPTA_GRAHAS {
        if ctx.rasi().contains(g) && ctx.is_exalted(g)? && ctx.in_angle_or_trine(g)? {
            exalted.push(g);
        }
    }
    let l1 = ctx.lord(1);
    let (strong, s) = ctx.powerful(l1);
    Ok(Outcome::when(
        !exalted.is_empty() && strong,
        mean(&[1.0, s]),
        format!("exalted in kendra/trikona: [{}]", names(&exalted)),
    ))
}

fn srinatha(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (l7, l9, l10) = (ctx.lord(7), ctx.lord(9), ctx.lord(10));
    let joined = l9 == l10 || ctx.conjunct(l9, l10)?;
    let present = ctx.house(l7)? == 10 && ctx.is_exalted(l7)? && joined;
    Ok(Outcome::when(present, 1.0, format!("L7 {l7}; L9 {l9} with L10 {l10}")))
}

fn kusuma(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let fixed = ctx.rasi().rashi_of_house(1).modality() == Modality::Fixed;
    let present = fixed
        && ctx.in_kendra(Graha::Shukra)?
        && is_trikona(ctx.house(Graha::Chandra)?)
        && ctx.house(Graha::Shani)? == 10;
    Ok(Outcome::when(present, 1.0, "fixed lagna; Venus angular, Moon trine, Saturn 10th"))
}

fn matsya(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let present = ctx.any_in(&BENEFICS, 1)
        && ctx.any_in(&BENEFICS, 9)
        && ctx.any_in(&MALEFICS, 4)
        && ctx.any_in(&MALEFICS, 8)
        && !ctx.occupants(5).is_empty();
    Ok(Outcome::when(present, 1.0, "benefics 1/9, malefics 4/8, 5th occupied"))
}

fn kurma(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let present = [5u8, 6, 7].iter().all(|&h| ctx.any_in(&BENEFICS, h))
        && [1u8, 3, 11].iter().all(|&h| ctx.any_in(&MALEFICS, h));
    Ok(Outcome::when(present, 1.0, "benefics 5/6/7, malefics 1/3/11"))
}

fn khadga(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let l1 = ctx.lord(1);
    let present = lords_exchanged(ctx, 2, 9)? && ctx.in_angle_or_trine(l1)?;
    Ok(Outcome::when(present, 1.0, format!("2<->9; lagna lord {l1}")))
}

fn saraswati(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    const GOOD: [u8; 7] = [1, 2, 4, 5, 7, 9, 10];
    let mut placed = true;
    for g in SAUMYA {
        placed &= ctx.in_houses(g, &GOOD)?;
    }
    let d = ctx.dignity(Graha::Guru)?;
    let jupiter_ok = d.is_dignified() || d.contains(Dignity::Friend);
    Ok(Outcome::when(
        placed && jupiter_ok,
        mean(&[1.0, d.score()]),
        format!("Jupiter {d}"),
    ))
}

fn kalanidhi(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let h = ctx.house(Graha::Guru)?;
    let mut helpers = Vec::new();
    for g in [Graha::Buddh, Graha::Shukra] {
        if ctx.rasi().contains(g)
            && (ctx.conjunct(g, Graha::Guru)? || ctx.aspects_house(g, h)?)
        {
            helpers.push(g);
        }
    }
    Ok(Outcome::when(
        matches!(h, 2 | 5) && !helpers.is_empty(),
        if helpers.len() == 2 { 1.0 } else { 0.8 },
        format!("Jupiter in {h} with [{}]", names(&helpers)),
    ))
}

fn chatussagara(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let present = [1u8, 4, 7, 10].iter().all(|&h| !ctx.occupants(h).is_empty());
    Ok(Outcome::when(present, 1.0, "all four kendras occupied"))
}

fn amsavatara(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let movable = ctx.rasi().rashi_of_house(1).modality() == Modality::Movable;
    let present = movable
        && ctx.in_kendra(Graha::Guru)?
        && ctx.in_kendra(Graha::Shukra)?
        && ctx.in_kendra(Graha::Shani)?
        && ctx.is_exalted(Graha::Shani)?;
    Ok(Outcome::when(present, 1.0, "movable lagna; Jupiter, Venus, exalted Saturn angular"))
}

/// Benefics in each of the given houses counted from the lord of `house`.
fn benefics_around_lord(
    ctx: &YogaContext<'_>,
    house: u8,
    offsets: [u8; 3],
) -> Result<Outcome, YogaError> {
    let lord = ctx.lord(house);
    let base = ctx.house(lord)?;
    let present = offsets
        .iter()
        .all(|&n| ctx.any_in(&BENEFICS, nth_house_from(base, n)));
    Ok(Outcome::when(
        present,
        1.0,
        format!("L{house} {lord} in {base}; benefics {offsets:?} from it"),
    ))
}

fn hari(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    benefics_around_lord(ctx, 2, [2, 8, 12])
}

fn hara(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    benefics_around_lord(ctx, 7, [4, 8, 9])
}

fn brahma(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    benefics_around_lord(ctx, 1, [4, 10, 11])
}

fn lagnadhi(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let mut found = Vec::new();
    for g in SAUMYA {
        if ctx.rasi().contains(g) && ctx.in_houses(g, &[6, 7, 8])? {
            found.push(g);
        }
    }
    let clean = (6..=8).all(|h| !ctx.any_in(&MALEFICS, h));
    let weight: f64 = found.iter().map(|&g| benefic_weight(g)).sum();
    Ok(Outcome::when(
        !found.is_empty() && clean,
        weight / 2.7,
        format!("benefics 6/7/8 from lagna: [{}]", names(&found)),
    ))
}

fn sreekanta(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    const GOOD: [u8; 6] = [1, 4, 5, 7, 9, 10];
    let l1 = ctx.lord(1);
    let present = ctx.in_houses(l1, &GOOD)?
        && ctx.in_houses(Graha::Surya, &GOOD)?
        && ctx.in_houses(Graha::Chandra, &GOOD)?;
    Ok(Outcome::when(present, 1.0, format!("lagna lord {l1}, Sun, Moon in kendra/trikona")))
}

/// Strength falls off linearly from 1 at the deep exaltation point to 0.5
/// at the edge of the orb.
fn deep_exaltation(ctx: &YogaContext<'_>, graha: Graha) -> Result<Option<f64>, YogaError> {
    let d = distance_from_deep_exaltation(graha, ctx.longitude(graha)?).abs();
    Ok((d <= DEEP_EXALTATION_ORB).then(|| 1.0 - d / (2.0 * DEEP_EXALTATION_ORB)))
}

fn jaya(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (l6, l10) = (ctx.lord(6), ctx.lord(10));
    let deep = deep_exaltation(ctx, l10)?;
    Ok(match deep {
        Some(s) if ctx.is_debilitated(l6)? => {
            Outcome::present(s, format!("L6 {l6} debilitated; L10 {l10} deeply exalted"))
        }
        _ => Outcome::absent(format!("L6 {l6}, L10 {l10}")),
    })
}

fn vidyut(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let (l11, l1) = (ctx.lord(11), ctx.lord(1));
    if l11 == Graha::Shukra {
        return Ok(Outcome::absent("L11 is Venus"));
    }
    let deep = deep_exaltation(ctx, l11)?;
    Ok(match deep {
        Some(s) if ctx.conjunct(l11, Graha::Shukra)? && ctx.mutual_kendra(l1, l11)? => {
            Outcome::present(s, format!("L11 {l11} deeply exalted with Venus"))
        }
        _ => Outcome::absent(format!("L11 {l11}")),
    })
}
