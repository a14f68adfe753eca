//! Extraction of numbered turns from free-form game text.

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::game::{HalfMove, Turn};

use super::error::AnalysisError;

/// A turn number, a dot, and one or two words made of SAN characters.
static TURN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)\.\s*([A-Za-z0-9\-O+#x=]+)(?:\s+([A-Za-z0-9\-O+#x=]+))?")
        .expect("TURN_RE regex should be valid")
});

/// Scans `text` for turns in the order they appear.
///
/// Anything between turns (comments, results such as `1-0`) is skipped, and
/// the words are kept verbatim: rejecting malformed moves is the validator's
/// job. Text without any turn yields an empty list. The only failure is a
/// turn number too large to represent.
pub fn tokenize(text: &str) -> Result<Vec<Turn>, AnalysisError> {
    let mut turns = Vec::new();

    for caps in TURN_RE.captures_iter(text) {
        let digits = &caps[1];
        let number = digits
            .parse::<u32>()
            .map_err(|_| AnalysisError::TurnNumberOutOfRange {
                digits: digits.to_string(),
            })?;

        let white = HalfMove::new(caps[2].trim());
        let black = caps
            .get(3)
            .map(|m| m.as_str().trim())
            .filter(|notation| !notation.is_empty())
            .map(HalfMove::new);

        let turn = Turn::new(number, white, black);
        debug!("extracted turn `{}`", turn);
        turns.push(turn);
    }

    trace!("tokenizer found {} turns", turns.len());
    Ok(turns)
}
