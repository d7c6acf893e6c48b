//! Parivartana: two house lords occupying each other's houses.

use kundali_base::{Modality, is_dusthana};

use crate::context::YogaContext;
use crate::error::YogaError;
use crate::registry::YogaRegistry;
use crate::result::{Outcome, Polarity};

use super::lords_exchanged;

pub(super) fn register(r: &mut YogaRegistry) {
    r.register_group(
        "Parivartana",
        &[
            ("Maha Parivartana", Polarity::Positive),
            ("Dainya Parivartana", Polarity::Negative),
            ("Khala Parivartana", Polarity::Neutral),
        ],
        classified,
    );
    r.register("Ayatnadhanalabha", Polarity::Positive, ayatnadhanalabha);
    r.register("Bahudravyarjana", Polarity::Positive, bahudravyarjana);
    r.register("Devendra", Polarity::Positive, devendra);
    r.register("Chapa", Polarity::Positive, chapa);
}

/// Every exchanging pair `(a, b)` with `a < b`. Absent lords are skipped.
fn exchanges(ctx: &YogaContext<'_>) -> Vec<(u8, u8)> {
    let mut pairs = Vec::new();
    for a in 1..=12u8 {
        for b in a + 1..=12 {
            if lords_exchanged(ctx, a, b).unwrap_or(false) {
                pairs.push((a, b));
            }
        }
    }
    pairs
}

fn describe(pairs: &[(u8, u8)]) -> String {
    pairs
        .iter()
        .map(|(a, b)| format!("{a}<->{b}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Dainya involves a dusthana, Khala the 3rd, Maha neither.
fn classified(ctx: &YogaContext<'_>) -> Result<Vec<Outcome>, YogaError> {
    let (mut maha, mut dainya, mut khala) = (Vec::new(), Vec::new(), Vec::new());
    for (a, b) in exchanges(ctx) {
        if is_dusthana(a) || is_dusthana(b) {
            dainya.push((a, b));
        } else if a == 3 || b == 3 {
            khala.push((a, b));
        } else {
            maha.push((a, b));
        }
    }
    Ok([maha, dainya, khala]
        .iter()
        .map(|pairs| Outcome::when(!pairs.is_empty(), 1.0, describe(pairs)))
        .collect())
}

fn ayatnadhanalabha(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    Ok(Outcome::when(lords_exchanged(ctx, 1, 2)?, 1.0, "lords of 1 and 2 exchanged"))
}

fn bahudravyarjana(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    Ok(Outcome::when(lords_exchanged(ctx, 2, 11)?, 1.0, "lords of 2 and 11 exchanged"))
}

/// Fixed lagna with the 1/11 and 2/10 lords both exchanged.
fn devendra(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let fixed = ctx.rasi().rashi_of_house(1).modality() == Modality::Fixed;
    let present = fixed && lords_exchanged(ctx, 1, 11)? && lords_exchanged(ctx, 2, 10)?;
    Ok(Outcome::when(present, 1.0, "fixed lagna; 1<->11 and 2<->10"))
}

/// The 4th and 10th lords exchanged with an exalted lagna lord.
fn chapa(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let l1 = ctx.lord(1);
    let present = lords_exchanged(ctx, 4, 10)? && ctx.is_exalted(l1)?;
    Ok(Outcome::when(present, 1.0, format!("4<->10; lagna lord {l1} exalted")))
}
