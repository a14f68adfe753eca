//! Menu command - the interactive console loop.

use std::io::{self, BufRead, Write};
use std::process;

use log::error;
use san_analyzer::analyzer::Analyzer;
use san_analyzer::input_handler::{read_line, InputError, MenuInput};
use structopt::StructOpt;

use super::util::{create_analyzer, display_tree};
use super::Command;

#[derive(StructOpt)]
pub struct MenuArgs {
    #[structopt(
        long = "strict-numbering",
        help = "Require turn numbers to increase by one from turn to turn"
    )]
    pub strict_numbering: bool,
    #[structopt(
        long = "plain",
        help = "Print valid games as a text outline instead of opening the tree view"
    )]
    pub plain: bool,
}

impl Command for MenuArgs {
    fn execute(self) {
        let stdin = io::stdin();
        let mut session = MenuSession::new(
            stdin.lock(),
            io::stdout(),
            create_analyzer(self.strict_numbering),
            self.plain,
        );

        if let Err(e) = session.run() {
            error!("menu aborted: {}", e);
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

pub(crate) struct MenuSession<R, W> {
    input: R,
    output: W,
    analyzer: Analyzer,
    plain: bool,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    pub(crate) fn new(input: R, output: W, analyzer: Analyzer, plain: bool) -> Self {
        Self {
            input,
            output,
            analyzer,
            plain,
        }
    }

    /// Runs until the user picks the exit option or the input ends.
    pub(crate) fn run(&mut self) -> Result<(), InputError> {
        writeln!(self.output, "=== SAN GAME ANALYZER ===")?;

        loop {
            writeln!(self.output, "\nOptions:")?;
            writeln!(self.output, "1. Analyze a game")?;
            writeln!(self.output, "2. Exit")?;
            write!(self.output, "\nChoose an option (1-2): ")?;
            self.output.flush()?;

            let choice = match read_line(&mut self.input)? {
                Some(choice) => choice,
                None => return Ok(()),
            };

            match choice.parse::<MenuInput>() {
                Ok(MenuInput::AnalyzeGame) => self.analyze_game()?,
                Ok(MenuInput::Exit) => {
                    writeln!(self.output, "\nThanks for using the SAN game analyzer!")?;
                    return Ok(());
                }
                Err(_) => writeln!(self.output, "\nInvalid option. Please choose 1 or 2.")?,
            }
        }
    }

    fn analyze_game(&mut self) -> Result<(), InputError> {
        writeln!(
            self.output,
            "\nEnter the full game in Standard Algebraic Notation (SAN):"
        )?;
        writeln!(self.output, "Example: 1. d4 d5 2. Bf4 Nf6 3. e3 e6...")?;
        self.output.flush()?;

        let text = match read_line(&mut self.input)? {
            Some(text) => text,
            None => return Ok(()),
        };
        if text.is_empty() {
            writeln!(self.output, "No game was entered.")?;
            return Ok(());
        }

        match self.analyzer.analyze_game(&text) {
            Ok(game) => {
                writeln!(self.output, "\nThe game is syntactically valid.")?;
                writeln!(self.output, "Turns analyzed: {}", game.len())?;
                if let Err(e) = display_tree(&game, self.plain, &mut self.output) {
                    error!("failed to display tree: {}", e);
                    writeln!(self.output, "Could not display the move tree: {}", e)?;
                }
            }
            Err(e) => {
                writeln!(self.output, "\nThe game contains syntax errors:")?;
                writeln!(self.output, "{}", e)?;
            }
        }

        writeln!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        read_line(&mut self.input)?;
        Ok(())
    }
}
