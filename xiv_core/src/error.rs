//! Errors raised while resolving a damage calculation

use crate::types::Stat;
use thiserror::Error;

/// Calculation error
///
/// Every variant is an out-of-range input. The formulas only emulate in-range
/// behaviour, so nothing is clamped: the whole calculation aborts instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("No level modifiers loaded for level {0}")]
    InvalidLevel(u32),
    #[error("Unknown job code: {0}")]
    InvalidJob(String),
    #[error("Unknown stat name: {0}")]
    InvalidStatName(String),
    #[error("Unknown clan: {0}")]
    InvalidClan(String),
    #[error("{0:?} is not a job attribute")]
    NotAnAttribute(Stat),
    #[error("Potency must not be negative (got {0})")]
    NegativePotency(i64),
    #[error("Potency {0} exceeds the supported maximum")]
    PotencyTooLarge(i64),
    #[error("Weapon delay must be positive (got {0})")]
    NonPositiveDelay(i64),
}

pub type CalcResult<T> = Result<T, CalcError>;
