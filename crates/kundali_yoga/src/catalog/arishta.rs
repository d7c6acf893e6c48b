//! Arishta yogas: threats to early life read from the Moon and the lagna,
//! and their cancellation.

use kundali_base::{Graha, MALEFICS, is_dusthana, is_kendra};

use crate::context::{YogaContext, names};
use crate::error::YogaError;
use crate::registry::YogaRegistry;
use crate::result::{Outcome, Polarity};

const SAUMYA: [Graha; 3] = [Graha::Buddh, Graha::Guru, Graha::Shukra];
const KRURA: [Graha; 4] = [Graha::Mangal, Graha::Shani, Graha::Rahu, Graha::Ketu];

pub(super) fn register(r: &mut YogaRegistry) {
    r.register_group(
        "Arishta",
        &[
            ("Balarishta", Polarity::Negative),
            ("Lagnarishta", Polarity::Negative),
            ("Chandrarishta", Polarity::Negative),
            ("Arishta Bhanga", Polarity::Positive),
        ],
        arishta_family,
    );
}

/// Members of `set` joining or aspecting `graha`.
fn touching(
    ctx: &YogaContext<'_>,
    set: &[Graha],
    graha: Graha,
) -> Result<Vec<Graha>, YogaError> {
    let house = ctx.house(graha)?;
    let mut hit = Vec::new();
    for &g in set {
        if g == graha || !ctx.rasi().contains(g) {
            continue;
        }
        if ctx.house(g)? == house || ctx.aspects_house(g, house)? {
            hit.push(g);
        }
    }
    Ok(hit)
}

fn arishta_family(ctx: &YogaContext<'_>) -> Result<Vec<Outcome>, YogaError> {
    let moon_house = ctx.house(Graha::Chandra)?;

    let krura_on_moon = touching(ctx, &KRURA, Graha::Chandra)?;
    let saumya_on_moon = touching(ctx, &SAUMYA, Graha::Chandra)?;
    let bala = Outcome::when(
        matches!(moon_house, 6 | 8 | 12) && !krura_on_moon.is_empty() && saumya_on_moon.is_empty(),
        (krura_on_moon.len() as f64 / 2.0).min(1.0),
        format!("Moon in house {moon_house}, afflicted by [{}]", names(&krura_on_moon)),
    );

    let l1 = ctx.lord(1);
    let l1_house = ctx.house(l1)?;
    let in_lagna: Vec<Graha> = ctx
        .occupants(1)
        .iter()
        .copied()
        .filter(|g| MALEFICS.contains(g))
        .collect();
    let lagna = Outcome::when(
        !in_lagna.is_empty() && is_dusthana(l1_house),
        if l1_house == 8 { 1.0 } else { 0.75 },
        format!("[{}] in lagna, lagna lord {l1} in house {l1_house}", names(&in_lagna)),
    );

    let weak_moon = ctx.is_debilitated(Graha::Chandra)? || is_dusthana(moon_house);
    let mut with_moon = Vec::new();
    for g in KRURA {
        if ctx.rasi().contains(g) && ctx.conjunct(g, Graha::Chandra)? {
            with_moon.push(g);
        }
    }
    let chandra = Outcome::when(
        weak_moon && !with_moon.is_empty(),
        if with_moon.len() > 1 { 1.0 } else { 0.75 },
        format!("Moon in house {moon_house} with [{}]", names(&with_moon)),
    );

    let any = bala.present || lagna.present || chandra.present;
    let guru_kendra = ctx.rasi().contains(Graha::Guru) && ctx.in_kendra(Graha::Guru)?;
    let rescue = if guru_kendra {
        1.0
    } else if is_kendra(l1_house) {
        0.75
    } else {
        0.0
    };
    let bhanga = Outcome::when(
        any && rescue > 0.0,
        rescue,
        format!("Jupiter in kendra: {guru_kendra}, lagna lord {l1} in house {l1_house}"),
    );

    Ok(vec![bala, lagna, chandra, bhanga])
}
