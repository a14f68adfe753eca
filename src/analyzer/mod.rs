//! Syntactic analysis of a game written in Standard Algebraic Notation.
//!
//! Text is first split into numbered turns by the tokenizer, then every
//! half-move is checked against the grammar in `crate::notation`. A single bad
//! turn rejects the whole game.

pub mod error;
pub mod result;
pub mod tokenizer;
pub mod validator;


use log::debug;

use crate::game::Game;

pub use error::AnalysisError;
pub use result::AnalysisResult;
pub use tokenizer::tokenize;
pub use validator::{validate, TurnNumbering, ValidationConfig, Validator};

#[derive(Clone, Debug, Default)]
pub struct Analyzer {
    validator: Validator,
}

impl Analyzer {
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            validator: Validator::new(config),
        }
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.analyze_game(text).map(|game| game.len()).into()
    }

    /// Tokenizes and validates `text`, returning the game only when every turn
    /// is well formed.
    pub fn analyze_game(&self, text: &str) -> Result<Game, AnalysisError> {
        let turns = tokenize(text)?;
        debug!("validating {} turns", turns.len());
        self.validator.check(&turns)?;
        Ok(Game::from(turns))
    }
}

/// Analyzes `text` with the default configuration.
pub fn analyze(text: &str) -> AnalysisResult {
    Analyzer::default().analyze(text)
}

/// Like [`analyze`], but hands back the validated game.
pub fn analyze_game(text: &str) -> Result<Game, AnalysisError> {
    Analyzer::default().analyze_game(text)
}
