pub mod analyzer;
pub mod game;
pub mod input_handler;
pub mod notation;
pub mod tree;
pub mod tui;

pub use analyzer::{analyze, analyze_game, AnalysisError, AnalysisResult};
