use std::fmt;

use super::color::Color;
use super::half_move::HalfMove;

/// A numbered move pair. White always moves; black's reply is absent when the
/// text ended (or moved on to the next number) after white's move.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Turn {
    number: u32,
    white: HalfMove,
    black: Option<HalfMove>,
}

impl Turn {
    pub fn new(number: u32, white: HalfMove, black: Option<HalfMove>) -> Self {
        Self {
            number,
            white,
            black,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn white(&self) -> &HalfMove {
        &self.white
    }

    pub fn black(&self) -> Option<&HalfMove> {
        self.black.as_ref()
    }

    /// The half-moves of this turn in play order.
    pub fn half_moves(&self) -> impl Iterator<Item = (Color, &HalfMove)> {
        std::iter::once((Color::White, &self.white))
            .chain(self.black.iter().map(|black| (Color::Black, black)))
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number, self.white)?;
        if let Some(black) = &self.black {
            write!(f, " {}", black)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_full_turn() {
        let turn = Turn::new(1, "e4".into(), Some("e5".into()));
        assert_eq!(turn.to_string(), "1. e4 e5");
    }

    #[test]
    fn test_display_white_only() {
        let turn = Turn::new(12, "Qxf7#".into(), None);
        assert_eq!(turn.to_string(), "12. Qxf7#");
    }

    #[test]
    fn test_half_moves_in_play_order() {
        let turn = Turn::new(3, "Bb5".into(), Some("a6".into()));
        let half_moves: Vec<_> = turn
            .half_moves()
            .map(|(color, half_move)| (color, half_move.notation()))
            .collect();
        assert_eq!(half_moves, vec![(Color::White, "Bb5"), (Color::Black, "a6")]);
    }
}
