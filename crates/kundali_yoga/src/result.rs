//! Yoga results and rule outcomes.

use serde::{Deserialize, Serialize};

/// Classical reading of a yoga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What a rule decides; the registry attaches name, id and polarity.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub present: bool,
    pub strength: f64,
    pub details: String,
}

impl Outcome {
    pub fn present(strength: f64, details: impl Into<String>) -> Self {
        Self {
            present: true,
            strength,
            details: details.into(),
        }
    }

    pub fn absent(details: impl Into<String>) -> Self {
        Self {
            present: false,
            strength: 0.0,
            details: details.into(),
        }
    }

    /// Present with `strength` when `cond` holds.
    pub fn when(cond: bool, strength: f64, details: impl Into<String>) -> Self {
        if cond {
            Self::present(strength, details)
        } else {
            Self::absent(details)
        }
    }
}

/// Evaluated yoga as exposed to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YogaResult {
    pub id: String,
    pub name: String,
    pub present: bool,
    pub strength: f64,
    pub details: String,
    #[serde(rename = "type")]
    pub polarity: Polarity,
}

impl YogaResult {
    /// Attach identity and enforce `absent => 0` and `strength in [0, 1]`.
    pub fn from_outcome(name: &str, polarity: Polarity, outcome: Outcome) -> Self {
        let strength = if !outcome.present || outcome.strength.is_nan() {
            0.0
        } else {
            outcome.strength.clamp(0.0, 1.0)
        };
        Self {
            id: slugify(name),
            name: name.to_string(),
            present: outcome.present,
            strength,
            details: outcome.details,
            polarity,
        }
    }
}

/// Lowercase slug: runs of non-alphanumerics become a single `_`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut gap = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('_');
            }
            gap = false;
            slug.extend(c.to_lowercase());
        } else {
            gap = true;
        }
    }
    slug
}
