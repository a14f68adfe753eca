//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{analyze::AnalyzeArgs, menu::MenuArgs};

#[derive(StructOpt)]
#[structopt(
    name = "san-analyzer",
    about = "A syntax checker for chess games written in Standard Algebraic Notation ♞"
)]
pub enum SanAnalyzer {
    #[structopt(
        name = "menu",
        about = "Start the interactive menu. Each game you enter is checked move by move, and valid games are shown as a move tree (use `--plain` for a text outline instead of the terminal view)."
    )]
    Menu(MenuArgs),
    #[structopt(
        name = "analyze",
        about = "Check a single game, given as arguments (e.g. `1. e4 e5 2. Nf3 Nc6`), with `--file`, or on stdin. Exits with status 1 if the game is invalid. Add `--tree` to open the move tree view or `--plain` to print it as text."
    )]
    Analyze(AnalyzeArgs),
}

impl crate::cli::commands::Command for SanAnalyzer {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Menu(cmd),
            Analyze(cmd),
        }
    }
}
