//! Value types for a game transcript: half-moves, numbered turns and the game
//! that holds them.

pub mod color;
pub mod half_move;
pub mod turn;

#[allow(clippy::module_inception)]
mod game;

pub use color::Color;
pub use game::Game;
pub use half_move::HalfMove;
pub use turn::Turn;
