/// Value rendering — expression trees to SPL phrase text.
///
/// No arithmetic happens here; the output is a textual description of the
/// computation for whatever interpreter eventually runs the play.
use rand::Rng;
use thiserror::Error;

use crate::core::number::{self, NumberError};
use crate::schema::character::{Cast, CharacterId};
use crate::schema::value::Value;
use crate::wordbanks::WordBanks;

#[derive(Debug, Error)]
pub enum PhraseError {
    #[error("number error: {0}")]
    Number(#[from] NumberError),
    #[error("character not found in cast: {0:?}")]
    CharacterNotFound(CharacterId),
}

/// Render a value tree as SPL phrase text.
///
/// Integers go through the numeric encoder, character references resolve to
/// their cast name, operation nodes recurse left operand before right so a
/// seeded render is deterministic.
pub fn render_value(
    value: &Value,
    cast: &Cast,
    banks: &WordBanks,
    rng: &mut impl Rng,
) -> Result<String, PhraseError> {
    match value {
        Value::Int(n) => Ok(number::encode(*n, banks, rng)?),
        Value::Character(id) => cast
            .name(*id)
            .map(str::to_string)
            .ok_or(PhraseError::CharacterNotFound(*id)),
        Value::Unary { op, operand } => {
            let x = render_value(operand, cast, banks, rng)?;
            Ok(format!("{} {}", op.phrase(), x))
        }
        Value::Binary { op, lhs, rhs } => {
            let a = render_value(lhs, cast, banks, rng)?;
            let b = render_value(rhs, cast, banks, rng)?;
            Ok(format!("{} {} and {}", op.phrase(), a, b))
        }
    }
}
