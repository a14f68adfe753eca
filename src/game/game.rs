use std::fmt;

use super::turn::Turn;

/// An ordered list of turns. Insertion order is play order; turn numbers are
/// kept as written.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Game {
    turns: Vec<Turn>,
}

impl Game {
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl From<Vec<Turn>> for Game {
    fn from(turns: Vec<Turn>) -> Self {
        Self { turns }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, turn) in self.turns.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", turn)?;
        }
        Ok(())
    }
}
