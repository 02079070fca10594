//! Simulator errors

use thiserror::Error;
use xiv_core::{CalcError, ConfigError};

#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Calc(#[from] CalcError),
    #[error("Unknown player preset: {0}")]
    UnknownPlayer(String),
    #[error("Unknown DoT: {0}")]
    UnknownDot(String),
    #[error("Sample count must be positive")]
    NoSamples,
    #[error("--multi-hit only applies to direct hits, not {0}")]
    MultiHitKind(String),
}
