//! Console input parsing for the interactive menu.

use std::io::BufRead;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
}

impl From<std::io::Error> for InputError {
    fn from(error: std::io::Error) -> Self {
        InputError::IOError {
            error: error.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MenuInput {
    AnalyzeGame,
    Exit,
}

impl FromStr for MenuInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "1" => Ok(MenuInput::AnalyzeGame),
            "2" => Ok(MenuInput::Exit),
            _ => Err(InputError::InvalidInput {
                input: input.to_string(),
            }),
        }
    }
}

/// Reads one line and trims it. Returns `None` once the input is exhausted.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, InputError> {
    let mut input = String::new();
    match reader.read_line(&mut input)? {
        0 => Ok(None),
        _ => Ok(Some(input.trim().to_string())),
    }
}
