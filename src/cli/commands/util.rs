//! Shared utilities for CLI commands.

use std::io::{self, Write};

use san_analyzer::analyzer::{Analyzer, TurnNumbering, ValidationConfig};
use san_analyzer::game::Game;
use san_analyzer::tree::{render_outline, MoveTree};
use san_analyzer::tui::TreeViewer;

pub(crate) fn create_analyzer(strict_numbering: bool) -> Analyzer {
    let numbering = if strict_numbering {
        TurnNumbering::Sequential
    } else {
        TurnNumbering::AsWritten
    };
    Analyzer::new(ValidationConfig { numbering })
}

/// Shows the move tree of `game`, as a text outline written to `output` or in
/// the full-screen viewer.
pub(crate) fn display_tree<W: Write>(game: &Game, plain: bool, output: &mut W) -> io::Result<()> {
    let tree = MoveTree::from_game(game);
    if plain {
        writeln!(output, "{}", render_outline(&tree))
    } else {
        TreeViewer::new()?.show(&tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_analyzer_numbering() {
        let strict = create_analyzer(true);
        assert!(!strict.analyze("1. e4 e5 3. Nf3").is_valid());

        let permissive = create_analyzer(false);
        assert!(permissive.analyze("1. e4 e5 3. Nf3").is_valid());
    }

    #[test]
    fn test_display_plain_tree() {
        let game = san_analyzer::analyze_game("1. e4 e5 2. Nf3").unwrap();
        let mut output = Vec::new();
        display_tree(&game, true, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Inicio\ne4  e5\nNf3\n");
    }
}
