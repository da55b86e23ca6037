//! Engine errors

use crate::dice::DiceError;
use thiserror::Error;

/// Error from a session or character operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    #[error("unknown skill: {0}")]
    UnknownSkill(String),
    #[error("unknown ability: {0}")]
    UnknownAbility(String),
    #[error(transparent)]
    Dice(#[from] DiceError),
}
