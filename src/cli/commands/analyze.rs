//! Analyze command - check a single game and report the verdict.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use log::error;
use san_analyzer::input_handler::InputError;
use san_analyzer::AnalysisResult;
use structopt::StructOpt;

use super::util::{create_analyzer, display_tree};
use super::Command;

#[derive(StructOpt)]
pub struct AnalyzeArgs {
    #[structopt(help = "The game, e.g. `1. e4 e5 2. Nf3 Nc6`. Read from stdin when omitted")]
    pub game: Vec<String>,
    #[structopt(
        long = "file",
        parse(from_os_str),
        conflicts_with = "game",
        help = "Read the game from a file"
    )]
    pub file: Option<PathBuf>,
    #[structopt(
        long = "strict-numbering",
        help = "Require turn numbers to increase by one from turn to turn"
    )]
    pub strict_numbering: bool,
    #[structopt(long = "tree", help = "Open the move tree view when the game is valid")]
    pub tree: bool,
    #[structopt(long = "plain", help = "Print the move tree as text when the game is valid")]
    pub plain: bool,
}

impl AnalyzeArgs {
    fn read_game(&self) -> Result<String, InputError> {
        if let Some(path) = &self.file {
            return Ok(fs::read_to_string(path)?);
        }

        if self.game.is_empty() {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            return Ok(text);
        }

        Ok(self.game.join(" "))
    }
}

impl Command for AnalyzeArgs {
    fn execute(self) {
        let text = match self.read_game() {
            Ok(text) => text,
            Err(e) => {
                error!("failed to read game: {}", e);
                eprintln!("Failed to read game: {}", e);
                process::exit(1);
            }
        };

        let analyzer = create_analyzer(self.strict_numbering);
        let game = match analyzer.analyze_game(&text) {
            Ok(game) => game,
            Err(e) => {
                println!("{}", AnalysisResult::failure(e.to_string()));
                process::exit(1);
            }
        };

        println!("{}", AnalysisResult::success(game.len()));

        if self.tree || self.plain {
            if let Err(e) = display_tree(&game, self.plain, &mut io::stdout()) {
                error!("failed to display tree: {}", e);
                eprintln!("Failed to display tree: {}", e);
                process::exit(1);
            }
        }
    }
}
