//! Standard Algebraic Notation grammar.
//!
//! A half-move is accepted when it matches one of three alternatives, tried in
//! this order:
//!
//! ```text
//! castling:   O-O | O-O-O
//! piece move: P D? D? x? F R (= Q)? C?
//! pawn move:  (F x)? F R (= Q)? C?
//!
//! P: K | Q | R | B | N      F: a ... h      R: 1 ... 8
//! D: F | R                  Q: Q | R | B | N
//! C: + | #
//! ```
//!
//! Only the form of the move is checked, never whether it is playable.
//!
//! See: https://www.chessprogramming.org/Algebraic_Chess_Notation

#[cfg(test)]
mod tests;

const CASTLE_KINGSIDE_CHARS: &str = "O-O";
const CASTLE_QUEENSIDE_CHARS: &str = "O-O-O";
const CAPTURE_CHAR: u8 = b'x';
const PROMOTION_CHAR: u8 = b'=';
const CHECK_CHAR: u8 = b'+';
const CHECKMATE_CHAR: u8 = b'#';

const MAX_DISAMBIGUATING_CHARS: usize = 2;

/// Which grammar alternative a half-move matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Castling,
    PieceMove,
    PawnMove,
}

pub fn is_valid_half_move(token: &str) -> bool {
    classify(token).is_some()
}

/// Returns the first alternative that matches the whole token.
pub fn classify(token: &str) -> Option<MoveKind> {
    if is_castling(token) {
        Some(MoveKind::Castling)
    } else if is_piece_move(token) {
        Some(MoveKind::PieceMove)
    } else if is_pawn_move(token) {
        Some(MoveKind::PawnMove)
    } else {
        None
    }
}

pub fn is_castling(token: &str) -> bool {
    token == CASTLE_KINGSIDE_CHARS || token == CASTLE_QUEENSIDE_CHARS
}

pub fn is_piece_move(token: &str) -> bool {
    let (piece, rest) = match token.as_bytes().split_first() {
        Some((&piece, rest)) => (piece, rest),
        None => return false,
    };
    if !is_valid_piece(char::from(piece)) {
        return false;
    }

    let origin = match strip_destination(rest) {
        Some(origin) => origin,
        None => return false,
    };
    let disambiguation = match origin.split_last() {
        Some((&CAPTURE_CHAR, head)) => head,
        _ => origin,
    };

    disambiguation.len() <= MAX_DISAMBIGUATING_CHARS
        && disambiguation
            .iter()
            .all(|&c| is_file_char(c) || is_rank_char(c))
}

pub fn is_pawn_move(token: &str) -> bool {
    match strip_destination(token.as_bytes()) {
        Some([]) => true,
        Some([file, CAPTURE_CHAR]) => is_file_char(*file),
        _ => false,
    }
}

/// Exactly two characters: a file `a-h` followed by a rank `1-8`.
pub fn is_valid_square(square: &str) -> bool {
    matches!(square.as_bytes(), [file, rank] if is_file_char(*file) && is_rank_char(*rank))
}

pub fn is_valid_piece(piece: char) -> bool {
    matches!(piece, 'K' | 'Q' | 'R' | 'B' | 'N')
}

pub fn is_valid_promotion_piece(piece: char) -> bool {
    matches!(piece, 'Q' | 'R' | 'B' | 'N')
}

/// Removes the trailing `F R (= Q)? C?` of a move and returns everything that
/// precedes the destination square, or `None` if there is no destination.
fn strip_destination(token: &[u8]) -> Option<&[u8]> {
    let token = match token.split_last() {
        Some((&CHECK_CHAR, head)) | Some((&CHECKMATE_CHAR, head)) => head,
        _ => token,
    };
    let token = match token {
        [head @ .., PROMOTION_CHAR, piece] if is_valid_promotion_piece(char::from(*piece)) => head,
        _ => token,
    };

    match token {
        [head @ .., file, rank] if is_file_char(*file) && is_rank_char(*rank) => Some(head),
        _ => None,
    }
}

fn is_file_char(c: u8) -> bool {
    (b'a'..=b'h').contains(&c)
}

fn is_rank_char(c: u8) -> bool {
    (b'1'..=b'8').contains(&c)
}
