use std::fmt;

/// A single move token exactly as it appeared in the game text, e.g. `Nf3`,
/// `O-O` or `e8=Q+`. It carries no interpretation beyond its notation.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct HalfMove {
    notation: String,
}

impl HalfMove {
    pub fn new<S: Into<String>>(notation: S) -> Self {
        Self {
            notation: notation.into(),
        }
    }

    pub fn notation(&self) -> &str {
        &self.notation
    }

    pub fn is_empty(&self) -> bool {
        self.notation.is_empty()
    }
}

impl From<&str> for HalfMove {
    fn from(notation: &str) -> Self {
        Self::new(notation)
    }
}

impl fmt::Display for HalfMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation)
    }
}
