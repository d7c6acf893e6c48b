//! Yogas decided by where the lords of the dusthanas and of the 10th and
//! 11th houses fall, and Pravrajya, read against the 10th lord.

use kundali_base::{DUSTHANAS, SAPTA_GRAHAS, is_dusthana};

use crate::context::{YogaContext, names};
use crate::error::YogaError;
use crate::registry::YogaRegistry;
use crate::result::{Outcome, Polarity};

pub(super) fn register(r: &mut YogaRegistry) {
    r.register_group(
        "Harsha/Sarala/Vimala",
        &[
            ("Harsha", Polarity::Positive),
            ("Sarala", Polarity::Positive),
            ("Vimala", Polarity::Positive),
        ],
        viparita_family,
    );
    r.register("Viparita Raja", Polarity::Positive, viparita_raja);
    r.register_group(
        "Duryoga/Daridra",
        &[("Duryoga", Polarity::Negative), ("Daridra", Polarity::Negative)],
        duryoga_daridra,
    );
    r.register("Pravrajya", Polarity::Neutral, pravrajya);
}

/// Lords of the 6th, 8th and 12th in their own house.
fn viparita_family(ctx: &YogaContext<'_>) -> Result<Vec<Outcome>, YogaError> {
    DUSTHANAS
        .into_iter()
        .map(|h| -> Result<Outcome, YogaError> {
            let lord = ctx.lord(h);
            let at = ctx.house(lord)?;
            Ok(Outcome::when(at == h, 1.0, format!("lord of {h} ({lord}) in house {at}")))
        })
        .collect()
}

/// A dusthana lord in another dusthana; graded by how many lords do so.
fn viparita_raja(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let mut hits = Vec::new();
    for h in DUSTHANAS {
        let at = ctx.lord_house(h)?;
        if at != h && is_dusthana(at) {
            hits.push(format!("L{h} in {at}"));
        }
    }
    let strength = match hits.len() {
        0 => 0.0,
        1 => 0.6,
        2 => 0.8,
        _ => 1.0,
    };
    Ok(Outcome::when(!hits.is_empty(), strength, hits.join(", ")))
}

/// Lord of the 10th (Duryoga) or the 11th (Daridra) in a dusthana.
fn duryoga_daridra(ctx: &YogaContext<'_>) -> Result<Vec<Outcome>, YogaError> {
    [10u8, 11]
        .into_iter()
        .map(|h| -> Result<Outcome, YogaError> {
            let lord = ctx.lord(h);
            let at = ctx.house(lord)?;
            Ok(Outcome::when(is_dusthana(at), 1.0, format!("lord of {h} ({lord}) in house {at}")))
        })
        .collect()
}

/// Four or more sapta grahas in one house; full strength when the 10th
/// lord is among them.
fn pravrajya(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let l10 = ctx.lord(10);
    for h in 1..=12 {
        let group: Vec<_> = ctx
            .occupants(h)
            .iter()
            .copied()
            .filter(|g| SAPTA_GRAHAS.contains(g))
            .collect();
        if group.len() >= 4 {
            let s = if group.contains(&l10) { 1.0 } else { 0.75 };
            return Ok(Outcome::present(
                s,
                format!("[{}] in house {h}, 10th lord {l10}", names(&group)),
            ));
        }
    }
    Ok(Outcome::absent("no house holds four grahas"))
}
