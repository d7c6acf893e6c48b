//! Error types for yoga evaluation.

use kundali_chart::ChartError;
use thiserror::Error;

/// Errors from yoga rules and registry lookups.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum YogaError {
    #[error(transparent)]
    Chart(#[from] ChartError),
    /// No rule registered under the name.
    #[error("unknown yoga: {0}")]
    UnknownYoga(String),
    /// A rule could not find an input it depends on.
    #[error("missing input: {0}")]
    MissingInput(String),
    /// A group evaluator broke its contract.
    #[error("group {group} returned {got} results for {expected} members")]
    GroupShape {
        group: &'static str,
        expected: usize,
        got: usize,
    },
}
