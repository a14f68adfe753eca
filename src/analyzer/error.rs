use thiserror::Error;

use crate::game::Color;

/// Why a game transcript was rejected. The display strings are the messages
/// reported to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no valid turns found in the game")]
    EmptyInput,
    #[error("invalid turn number: {number}")]
    InvalidTurnNumber { number: u32 },
    #[error("turn number out of range: {digits}")]
    TurnNumberOutOfRange { digits: String },
    #[error("turn {number} is out of sequence, expected {expected}")]
    OutOfSequence { number: u32, expected: u64 },
    #[error("missing white half-move in turn {number}")]
    MissingWhiteMove { number: u32 },
    #[error("invalid {color} half-move in turn {number}: {notation}")]
    MalformedHalfMove {
        number: u32,
        color: Color,
        notation: String,
    },
}

impl AnalysisError {
    /// The turn number the error points at, if it is tied to a single turn.
    pub fn turn_number(&self) -> Option<u32> {
        match self {
            AnalysisError::InvalidTurnNumber { number }
            | AnalysisError::OutOfSequence { number, .. }
            | AnalysisError::MissingWhiteMove { number }
            | AnalysisError::MalformedHalfMove { number, .. } => Some(*number),
            AnalysisError::EmptyInput | AnalysisError::TurnNumberOutOfRange { .. } => None,
        }
    }
}
