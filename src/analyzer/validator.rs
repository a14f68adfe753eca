//! Grammar checks over a tokenized game.

use log::{debug, info};

use crate::game::{Color, HalfMove, Turn};
use crate::notation;

use super::error::AnalysisError;
use super::result::AnalysisResult;

/// How turn numbers relate to each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TurnNumbering {
    /// Numbers are taken as written. Only positivity is checked, so a game may
    /// start at any number, repeat a number or go backwards.
    #[default]
    AsWritten,
    /// Every turn after the first must be numbered one more than the previous.
    Sequential,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    pub numbering: TurnNumbering,
}

#[derive(Clone, Debug, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn validate(&self, turns: &[Turn]) -> AnalysisResult {
        self.check(turns).into()
    }

    /// Checks every turn in order and stops at the first failure. Returns the
    /// number of turns when all of them are well formed.
    pub fn check(&self, turns: &[Turn]) -> Result<usize, AnalysisError> {
        if turns.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let mut previous = None;
        for turn in turns {
            if let Err(error) = self.check_turn(turn, previous) {
                debug!("rejecting turn `{}`: {}", turn, error);
                return Err(error);
            }
            previous = Some(turn.number());
        }

        info!("accepted {} turns", turns.len());
        Ok(turns.len())
    }

    fn check_turn(&self, turn: &Turn, previous: Option<u32>) -> Result<(), AnalysisError> {
        let number = turn.number();
        if number == 0 {
            return Err(AnalysisError::InvalidTurnNumber { number });
        }

        if let (TurnNumbering::Sequential, Some(previous)) = (self.config.numbering, previous) {
            let expected = u64::from(previous) + 1;
            if u64::from(number) != expected {
                return Err(AnalysisError::OutOfSequence { number, expected });
            }
        }

        if turn.white().is_empty() {
            return Err(AnalysisError::MissingWhiteMove { number });
        }

        for (color, half_move) in turn.half_moves() {
            check_half_move(number, color, half_move)?;
        }

        Ok(())
    }
}

fn check_half_move(number: u32, color: Color, half_move: &HalfMove) -> Result<(), AnalysisError> {
    match notation::classify(half_move.notation()) {
        Some(kind) => {
            debug!("turn {} {}: {} is a {:?}", number, color, half_move, kind);
            Ok(())
        }
        None => Err(AnalysisError::MalformedHalfMove {
            number,
            color,
            notation: half_move.notation().to_string(),
        }),
    }
}

/// Validates `turns` with the default, permissive numbering.
pub fn validate(turns: &[Turn]) -> AnalysisResult {
    Validator::default().validate(turns)
}
